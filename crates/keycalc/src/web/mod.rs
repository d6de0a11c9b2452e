//! Web skin
//!
//! Renders the calculator into an in-memory DOM so it can be driven and
//! inspected natively; the `wasm` feature adds the browser entry point.

#[cfg(feature = "wasm")]
mod browser;
mod calculator;
mod dom;
mod driver;

#[cfg(feature = "wasm")]
pub use browser::BrowserCalculator;
pub use calculator::{WebCalculator, DISPLAY_ID, KEYPAD_ID, PRESSED_CLASS, ROOT_ID};
pub use dom::{DomElement, DomEvent, EventOutcome, MockDom};
pub use driver::WebDriver;
