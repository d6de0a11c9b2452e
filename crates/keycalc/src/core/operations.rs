//! Operators and digits
//!
//! Both are closed types, so the accumulator never has to reject an
//! out-of-range digit or an unknown operator.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::CalcError;

/// One of the four binary operators on the keypad
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operator {
    /// Addition (+)
    Add,
    /// Subtraction (-)
    Subtract,
    /// Multiplication (×)
    Multiply,
    /// Division (÷)
    Divide,
}

impl Operator {
    /// All operators in keypad order, top to bottom
    pub const ALL: [Self; 4] = [Self::Divide, Self::Multiply, Self::Subtract, Self::Add];

    /// Returns the canonical operator symbol
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '×',
            Self::Divide => '÷',
        }
    }

    /// Returns a stable lowercase name, used for element ids
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Add => "plus",
            Self::Subtract => "minus",
            Self::Multiply => "times",
            Self::Divide => "divide",
        }
    }

    /// Parses an operator symbol
    ///
    /// Besides the canonical symbols this accepts `*`, `/` and the
    /// typographic minus `−` shown on the keypad.
    pub fn from_symbol(symbol: char) -> Result<Self, CalcError> {
        match symbol {
            '+' => Ok(Self::Add),
            '-' | '−' => Ok(Self::Subtract),
            '×' | '*' => Ok(Self::Multiply),
            '÷' | '/' => Ok(Self::Divide),
            other => Err(CalcError::UnknownOperator(other)),
        }
    }

    /// Applies the operator with IEEE-754 semantics
    ///
    /// Division by zero is not intercepted: `5 ÷ 0` is `Infinity` and
    /// `0 ÷ 0` is `NaN`.
    #[must_use]
    pub fn apply(self, a: f64, b: f64) -> f64 {
        match self {
            Self::Add => a + b,
            Self::Subtract => a - b,
            Self::Multiply => a * b,
            Self::Divide => a / b,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A single decimal digit, 0 through 9
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Digit(u8);

impl Digit {
    /// The digit zero
    pub const ZERO: Self = Self(0);

    /// Creates a digit, returning `None` for values above 9
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if value <= 9 {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Returns the numeric value
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Returns the ASCII character for this digit
    #[must_use]
    pub const fn as_char(self) -> char {
        (b'0' + self.0) as char
    }

    /// Iterates over all ten digits in ascending order
    pub fn all() -> impl Iterator<Item = Self> {
        (0..=9).map(Self)
    }
}

impl TryFrom<char> for Digit {
    type Error = CalcError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        c.to_digit(10)
            .map(|d| Self(d as u8))
            .ok_or(CalcError::InvalidDigit(c))
    }
}

impl TryFrom<u8> for Digit {
    type Error = CalcError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(CalcError::InvalidDigit(char::from(value)))
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> Self {
        digit.0
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== Operator =====

    #[test]
    fn test_operator_symbols() {
        assert_eq!(Operator::Add.symbol(), '+');
        assert_eq!(Operator::Subtract.symbol(), '-');
        assert_eq!(Operator::Multiply.symbol(), '×');
        assert_eq!(Operator::Divide.symbol(), '÷');
    }

    #[test]
    fn test_operator_from_symbol_round_trip() {
        for op in Operator::ALL {
            assert_eq!(Operator::from_symbol(op.symbol()), Ok(op));
        }
    }

    #[test]
    fn test_operator_from_symbol_aliases() {
        assert_eq!(Operator::from_symbol('*'), Ok(Operator::Multiply));
        assert_eq!(Operator::from_symbol('/'), Ok(Operator::Divide));
        assert_eq!(Operator::from_symbol('−'), Ok(Operator::Subtract));
    }

    #[test]
    fn test_operator_from_symbol_unknown() {
        assert_eq!(
            Operator::from_symbol('^'),
            Err(CalcError::UnknownOperator('^'))
        );
    }

    #[test]
    fn test_operator_apply() {
        assert_eq!(Operator::Add.apply(3.0, 4.0), 7.0);
        assert_eq!(Operator::Subtract.apply(10.0, 4.0), 6.0);
        assert_eq!(Operator::Multiply.apply(6.0, 7.0), 42.0);
        assert_eq!(Operator::Divide.apply(9.0, 3.0), 3.0);
    }

    #[test]
    fn test_operator_divide_by_zero_is_not_finite() {
        assert_eq!(Operator::Divide.apply(5.0, 0.0), f64::INFINITY);
        assert_eq!(Operator::Divide.apply(-5.0, 0.0), f64::NEG_INFINITY);
        assert!(Operator::Divide.apply(0.0, 0.0).is_nan());
    }

    #[test]
    fn test_operator_display() {
        assert_eq!(Operator::Multiply.to_string(), "×");
    }

    #[test]
    fn test_operator_serde_lowercase() {
        let json = serde_json::to_string(&Operator::Divide).unwrap();
        assert_eq!(json, "\"divide\"");
        let op: Operator = serde_json::from_str("\"add\"").unwrap();
        assert_eq!(op, Operator::Add);
    }

    // ===== Digit =====

    #[test]
    fn test_digit_new_bounds() {
        assert_eq!(Digit::new(9).map(Digit::value), Some(9));
        assert!(Digit::new(10).is_none());
    }

    #[test]
    fn test_digit_from_char() {
        for c in '0'..='9' {
            let digit = Digit::try_from(c).unwrap();
            assert_eq!(digit.as_char(), c);
        }
        assert_eq!(Digit::try_from('a'), Err(CalcError::InvalidDigit('a')));
    }

    #[test]
    fn test_digit_all_is_ascending() {
        let values: Vec<u8> = Digit::all().map(Digit::value).collect();
        assert_eq!(values, (0..=9).collect::<Vec<_>>());
    }

    #[test]
    fn test_digit_serde_rejects_out_of_range() {
        assert!(serde_json::from_str::<Digit>("12").is_err());
        assert_eq!(serde_json::from_str::<Digit>("4").unwrap().value(), 4);
    }
}
