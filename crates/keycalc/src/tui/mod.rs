//! Terminal skin
//!
//! A ratatui front end over the shared accumulator: keyboard input goes
//! through the key map, mouse clicks through the keypad geometry.

mod app;
mod driver;
mod input;
mod keypad;
mod ui;

pub use app::CalculatorApp;
pub use driver::TuiDriver;
pub use input::{InputHandler, KeyAction};
pub use keypad::KeypadWidget;
pub use ui::{render, CalculatorLayout, CalculatorUI, CALC_WIDTH, TITLE};
