//! Input accumulator state machine
//!
//! The calculator uses a single pending operation with immediate fold: every
//! operator resolves the pending operation before becoming pending itself, so
//! `3 + 4 × 2 =` shows `14`, not `11`. There is no precedence and no
//! expression tree.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::number::{format_number, is_entry_literal, parse_display};
use crate::core::{CalcError, CalcResult, Digit, Operator};

/// The symbolic actions every skin decodes its input into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "action", content = "value", rename_all = "snake_case")]
pub enum Action {
    /// Enter a digit
    Digit(Digit),
    /// Enter the decimal point
    DecimalPoint,
    /// Commit the display to a binary operation
    Operator(Operator),
    /// Resolve the pending operation
    Equals,
    /// Reset to the initial state
    Clear,
}

impl Action {
    /// Creates a digit action, `None` if `value` is not a digit
    #[must_use]
    pub fn digit(value: u8) -> Option<Self> {
        Digit::new(value).map(Self::Digit)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Digit(d) => write!(f, "{d}"),
            Self::DecimalPoint => write!(f, "."),
            Self::Operator(op) => write!(f, "{op}"),
            Self::Equals => write!(f, "="),
            Self::Clear => write!(f, "Clear"),
        }
    }
}

/// Left operand and operator waiting for a right operand
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PendingOperation {
    /// Left-hand operand
    pub operand: f64,
    /// Operator to apply once the right operand is known
    pub operator: Operator,
}

impl PendingOperation {
    /// Resolves the operation against the right-hand operand
    #[must_use]
    pub fn resolve(self, rhs: f64) -> f64 {
        self.operator.apply(self.operand, rhs)
    }
}

/// Complete calculator state for one session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatorState {
    display: String,
    pending: Option<PendingOperation>,
    awaiting_fresh_operand: bool,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorState {
    /// Initial display value
    pub const INITIAL_DISPLAY: &'static str = "0";

    /// Creates the initial state: display `0`, nothing pending
    #[must_use]
    pub fn new() -> Self {
        Self {
            display: Self::INITIAL_DISPLAY.to_string(),
            pending: None,
            awaiting_fresh_operand: false,
        }
    }

    /// Creates an editing state showing `display`
    ///
    /// `display` must be something the user could have typed (see
    /// [`is_entry_literal`]).
    pub fn with_display(display: &str) -> CalcResult<Self> {
        if !is_entry_literal(display) {
            return Err(CalcError::MalformedDisplay(display.to_string()));
        }
        Ok(Self {
            display: display.to_string(),
            pending: None,
            awaiting_fresh_operand: false,
        })
    }

    /// Returns the text to render
    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Returns the pending operation, if any
    #[must_use]
    pub fn pending(&self) -> Option<PendingOperation> {
        self.pending
    }

    /// Returns the pending left operand, if any
    #[must_use]
    pub fn pending_operand(&self) -> Option<f64> {
        self.pending.map(|p| p.operand)
    }

    /// Returns the pending operator, if any
    #[must_use]
    pub fn pending_operator(&self) -> Option<Operator> {
        self.pending.map(|p| p.operator)
    }

    /// Returns true if the next digit starts a new number
    #[must_use]
    pub fn is_awaiting_fresh_operand(&self) -> bool {
        self.awaiting_fresh_operand
    }

    /// Enters a digit
    pub fn digit(&mut self, digit: Digit) {
        if self.awaiting_fresh_operand {
            self.display = digit.to_string();
            self.awaiting_fresh_operand = false;
        } else if self.display == Self::INITIAL_DISPLAY {
            self.display = digit.to_string();
        } else {
            self.display.push(digit.as_char());
        }
        trace!(display = %self.display, "digit");
    }

    /// Enters the decimal point; a second point in the same number is ignored
    pub fn decimal_point(&mut self) {
        if self.awaiting_fresh_operand {
            self.display = "0.".to_string();
            self.awaiting_fresh_operand = false;
        } else if !self.display.contains('.') {
            self.display.push('.');
        } else {
            trace!(display = %self.display, "decimal point ignored");
            return;
        }
        trace!(display = %self.display, "decimal point");
    }

    /// Resets to the initial state
    pub fn clear(&mut self) {
        *self = Self::new();
        debug!("cleared");
    }

    /// Commits the display to `op`, folding any pending operation first
    ///
    /// On error the state is left untouched.
    pub fn operator(&mut self, op: Operator) -> CalcResult<()> {
        let current = parse_display(&self.display)?;

        let operand = match self.pending {
            None => current,
            Some(pending) => {
                let result = pending.resolve(current);
                debug!(
                    lhs = pending.operand,
                    operator = %pending.operator,
                    rhs = current,
                    result,
                    "folded pending operation"
                );
                self.display = format_number(result);
                result
            }
        };

        self.pending = Some(PendingOperation {
            operand,
            operator: op,
        });
        self.awaiting_fresh_operand = true;
        trace!(operand, operator = %op, "operation pending");
        Ok(())
    }

    /// Resolves the pending operation; a no-op when nothing is pending
    ///
    /// On error the state is left untouched.
    pub fn equals(&mut self) -> CalcResult<()> {
        let Some(pending) = self.pending else {
            trace!("equals with nothing pending");
            return Ok(());
        };

        let current = parse_display(&self.display)?;
        let result = pending.resolve(current);
        debug!(
            lhs = pending.operand,
            operator = %pending.operator,
            rhs = current,
            result,
            "evaluated"
        );

        self.display = format_number(result);
        self.pending = None;
        self.awaiting_fresh_operand = true;
        Ok(())
    }

    /// Applies an action in place
    pub fn apply(&mut self, action: Action) -> CalcResult<()> {
        match action {
            Action::Digit(d) => self.digit(d),
            Action::DecimalPoint => self.decimal_point(),
            Action::Operator(op) => return self.operator(op),
            Action::Equals => return self.equals(),
            Action::Clear => self.clear(),
        }
        Ok(())
    }

    /// Returns the state that results from `action`, leaving `self` as is
    pub fn transition(&self, action: Action) -> CalcResult<Self> {
        let mut next = self.clone();
        next.apply(action)?;
        Ok(next)
    }

    /// Applies a sequence of actions, stopping at the first error
    pub fn apply_all<I>(&mut self, actions: I) -> CalcResult<()>
    where
        I: IntoIterator<Item = Action>,
    {
        actions.into_iter().try_for_each(|action| self.apply(action))
    }
}
