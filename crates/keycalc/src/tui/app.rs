//! Terminal application state

use tracing::{debug, error};

use super::input::KeyAction;
use crate::core::{Action, CalcError, CalculatorState};
use crate::keypad::Keypad;
use crate::theme::Theme;

/// Calculator application state
#[derive(Debug)]
pub struct CalculatorApp {
    /// Accumulator
    state: CalculatorState,
    /// Keypad layout
    keypad: Keypad,
    /// Colours
    theme: Theme,
    /// Index of the most recently pressed button
    highlighted: Option<usize>,
    /// Error raised by the last action
    last_error: Option<CalcError>,
    /// Whether the app should quit
    should_quit: bool,
}

impl Default for CalculatorApp {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorApp {
    /// Creates a new calculator app with the default theme
    #[must_use]
    pub fn new() -> Self {
        Self::with_theme(Theme::default())
    }

    /// Creates a calculator app styled with `theme`
    #[must_use]
    pub fn with_theme(theme: Theme) -> Self {
        Self {
            state: CalculatorState::new(),
            keypad: Keypad::new(),
            theme,
            highlighted: None,
            last_error: None,
            should_quit: false,
        }
    }

    /// Returns the display text
    #[must_use]
    pub fn display(&self) -> &str {
        self.state.display()
    }

    /// Returns the accumulator state
    #[must_use]
    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    /// Returns the keypad
    #[must_use]
    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// Returns the theme
    #[must_use]
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Returns the highlighted button index
    #[must_use]
    pub fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    /// Returns the error raised by the last action, if any
    #[must_use]
    pub fn last_error(&self) -> Option<&CalcError> {
        self.last_error.as_ref()
    }

    /// Returns whether the app should quit
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Sets the quit flag
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Applies an action and highlights its button
    pub fn dispatch(&mut self, action: Action) {
        debug!(%action, "tui dispatch");
        self.last_error = None;
        if let Err(err) = self.state.apply(action) {
            error!(%err, %action, "action rejected");
            self.last_error = Some(err);
        }
        self.highlighted = self.keypad.find_by_action(action);
    }

    /// Presses the keypad button at `index`; returns false if out of range
    pub fn click(&mut self, index: usize) -> bool {
        let Some(action) = self.keypad.get_button(index).map(|b| b.action) else {
            return false;
        };
        self.dispatch(action);
        true
    }

    /// Applies a decoded key
    pub fn handle(&mut self, action: KeyAction) {
        match action {
            KeyAction::Calc(action) => self.dispatch(action),
            KeyAction::Quit => self.quit(),
            KeyAction::None => {}
        }
    }

    /// Resets the accumulator and the highlight
    pub fn reset(&mut self) {
        self.state = CalculatorState::new();
        self.highlighted = None;
        self.last_error = None;
    }

    /// Pending operation as `operand operator`, e.g. `7 ×`
    #[must_use]
    pub fn pending_label(&self) -> Option<String> {
        self.state
            .pending()
            .map(|p| format!("{} {}", crate::core::format_number(p.operand), p.operator))
    }
}
