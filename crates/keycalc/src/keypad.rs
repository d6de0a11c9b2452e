//! Keypad layout shared by every skin
//!
//! A 4-column, 5-row grid. Clear spans three columns and zero spans two:
//! ```text
//! [ Clear         ] [ ÷ ]
//! [ 7 ] [ 8 ] [ 9 ] [ × ]
//! [ 4 ] [ 5 ] [ 6 ] [ − ]
//! [ 1 ] [ 2 ] [ 3 ] [ + ]
//! [ 0       ] [ . ] [ = ]
//! ```

use serde::Serialize;

use crate::core::{Action, Digit, Operator};

/// Visual category of a button; skins style each one differently
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonVariant {
    /// Digits and the decimal point
    Number,
    /// The four operators and equals
    Operator,
    /// The clear button
    Clear,
}

/// A single keypad button
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeypadButton {
    /// The action this button dispatches
    pub action: Action,
    /// Text shown on the button
    pub label: &'static str,
    /// Styling category
    pub variant: ButtonVariant,
    /// Grid row (0-indexed)
    pub row: usize,
    /// Grid column of the leftmost cell (0-indexed)
    pub col: usize,
    /// Number of columns the button covers
    pub span: usize,
}

impl KeypadButton {
    fn new(action: Action, row: usize, col: usize) -> Self {
        let (label, variant) = match action {
            Action::Digit(d) => (DIGIT_LABELS[d.value() as usize], ButtonVariant::Number),
            Action::DecimalPoint => (".", ButtonVariant::Number),
            Action::Operator(op) => (operator_label(op), ButtonVariant::Operator),
            Action::Equals => ("=", ButtonVariant::Operator),
            Action::Clear => ("Clear", ButtonVariant::Clear),
        };
        Self {
            action,
            label,
            variant,
            row,
            col,
            span: 1,
        }
    }

    fn with_span(mut self, span: usize) -> Self {
        self.span = span;
        self
    }

    /// Returns the element id used by the web skin, e.g. `btn-7`
    #[must_use]
    pub fn id(&self) -> String {
        match self.action {
            Action::Digit(d) => format!("btn-{d}"),
            Action::DecimalPoint => "btn-decimal".to_string(),
            Action::Operator(op) => format!("btn-{}", op.name()),
            Action::Equals => "btn-equals".to_string(),
            Action::Clear => "btn-clear".to_string(),
        }
    }

    /// Returns true if the button covers grid cell (`row`, `col`)
    #[must_use]
    pub fn covers(&self, row: usize, col: usize) -> bool {
        self.row == row && (self.col..self.col + self.span).contains(&col)
    }
}

const DIGIT_LABELS: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];

/// Keypad labels use the typographic minus
fn operator_label(op: Operator) -> &'static str {
    match op {
        Operator::Add => "+",
        Operator::Subtract => "−",
        Operator::Multiply => "×",
        Operator::Divide => "÷",
    }
}

/// The calculator keypad
#[derive(Debug, Clone)]
pub struct Keypad {
    /// Buttons in row-major order
    buttons: Vec<KeypadButton>,
    cols: usize,
    rows: usize,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Number of grid rows
    pub const ROWS: usize = 5;
    /// Number of grid columns
    pub const COLS: usize = 4;

    /// Creates the standard keypad
    #[must_use]
    pub fn new() -> Self {
        let digit = |value: u8, row, col| {
            let d = Digit::new(value).unwrap_or(Digit::ZERO);
            KeypadButton::new(Action::Digit(d), row, col)
        };
        let operator = |op, row| KeypadButton::new(Action::Operator(op), row, 3);

        let buttons = vec![
            // Row 0: Clear ÷
            KeypadButton::new(Action::Clear, 0, 0).with_span(3),
            operator(Operator::Divide, 0),
            // Row 1: 7 8 9 ×
            digit(7, 1, 0),
            digit(8, 1, 1),
            digit(9, 1, 2),
            operator(Operator::Multiply, 1),
            // Row 2: 4 5 6 −
            digit(4, 2, 0),
            digit(5, 2, 1),
            digit(6, 2, 2),
            operator(Operator::Subtract, 2),
            // Row 3: 1 2 3 +
            digit(1, 3, 0),
            digit(2, 3, 1),
            digit(3, 3, 2),
            operator(Operator::Add, 3),
            // Row 4: 0 . =
            digit(0, 4, 0).with_span(2),
            KeypadButton::new(Action::DecimalPoint, 4, 2),
            KeypadButton::new(Action::Equals, 4, 3),
        ];

        Self {
            buttons,
            cols: Self::COLS,
            rows: Self::ROWS,
        }
    }

    /// Returns the number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Returns the grid dimensions (rows, cols)
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Returns all buttons in row-major order
    #[must_use]
    pub fn buttons(&self) -> &[KeypadButton] {
        &self.buttons
    }

    /// Gets a button by index
    #[must_use]
    pub fn get_button(&self, index: usize) -> Option<&KeypadButton> {
        self.buttons.get(index)
    }

    /// Gets the index of the button covering grid cell (`row`, `col`)
    #[must_use]
    pub fn index_at(&self, row: usize, col: usize) -> Option<usize> {
        self.buttons.iter().position(|b| b.covers(row, col))
    }

    /// Gets the button covering grid cell (`row`, `col`)
    #[must_use]
    pub fn get_button_at(&self, row: usize, col: usize) -> Option<&KeypadButton> {
        self.index_at(row, col).and_then(|i| self.buttons.get(i))
    }

    /// Finds a button by element id
    #[must_use]
    pub fn find_by_id(&self, id: &str) -> Option<&KeypadButton> {
        self.buttons.iter().find(|b| b.id() == id)
    }

    /// Finds the index of the button that dispatches `action`
    #[must_use]
    pub fn find_by_action(&self, action: Action) -> Option<usize> {
        self.buttons.iter().position(|b| b.action == action)
    }

    /// Iterates over the buttons of one row
    pub fn row(&self, row: usize) -> impl Iterator<Item = &KeypadButton> {
        self.buttons.iter().filter(move |b| b.row == row)
    }

    /// Renders the grid as plain text, one line per row
    #[must_use]
    pub fn to_text(&self) -> String {
        const CELL: usize = 5;
        let mut out = String::new();
        for row in 0..self.rows {
            let line: Vec<String> = self
                .row(row)
                .map(|b| {
                    let width = CELL * b.span + (b.span - 1);
                    format!("[{:^w$}]", b.label, w = width - 2)
                })
                .collect();
            out.push_str(&line.join(" "));
            out.push('\n');
        }
        out
    }
}
