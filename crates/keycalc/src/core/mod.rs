//! Calculator core: input accumulator and four-function evaluator
//!
//! Everything the skins show is derived from a single [`CalculatorState`].
//! Skins never touch the display string directly; they decode input into an
//! [`Action`] and hand it to [`CalculatorState::apply`].

mod accumulator;
mod number;
mod operations;

pub use accumulator::{Action, CalculatorState, PendingOperation};
pub use number::{format_number, is_entry_literal, parse_display};
pub use operations::{Digit, Operator};

use thiserror::Error;

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Calculator error types
///
/// Division by zero is deliberately absent: it yields a non-finite value that
/// is shown on the display like any other result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// The display could not be read back as a number
    #[error("malformed display value: {0:?}")]
    MalformedDisplay(String),
    /// A character outside `0`..=`9` was used as a digit
    #[error("invalid digit: {0:?}")]
    InvalidDigit(char),
    /// A symbol that is not one of the four operators
    #[error("unknown operator: {0:?}")]
    UnknownOperator(char),
}
