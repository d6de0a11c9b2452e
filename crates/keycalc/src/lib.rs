//! keycalc - a single-display keypad calculator
//!
//! The [`core`] accumulator turns a stream of keypad actions into the text
//! shown on the display. Operators fold immediately, left to right, with no
//! precedence. Skins are thin adapters over it: [`tui`] draws it in a
//! terminal, [`web`] renders it into a DOM, and [`driver`] holds both to the
//! same observable behaviour.
//!
//! # Example
//!
//! ```rust
//! use keycalc::prelude::*;
//!
//! let mut calc = CalculatorState::new();
//! for key in ["3", "+", "4", "*", "2", "Enter"] {
//!     let action = keycalc::keymap::action_for_key(key).unwrap();
//!     calc.apply(action).unwrap();
//! }
//! // (3 + 4) × 2
//! assert_eq!(calc.display(), "14");
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]

pub mod core;
pub mod driver;
pub mod keymap;
pub mod keypad;
pub mod theme;

#[cfg(feature = "tui")]
pub mod tui;

/// Web skin - always available, the mock DOM needs no browser
pub mod web;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::core::{
        Action, CalcError, CalcResult, CalculatorState, Digit, Operator, PendingOperation,
    };
    pub use crate::driver::CalculatorDriver;
    pub use crate::keymap::{action_for_key, binding_for_key, KeyBinding};
    pub use crate::keypad::{ButtonVariant, Keypad, KeypadButton};
    pub use crate::theme::{Theme, ThemeName};

    #[cfg(feature = "tui")]
    pub use crate::tui::{CalculatorApp, TuiDriver};

    pub use crate::web::{DomEvent, EventOutcome, MockDom, WebCalculator, WebDriver};
}
