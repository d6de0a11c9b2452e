//! Terminal driver
//!
//! Feeds crossterm key and mouse events through the same path the
//! interactive loop uses.

use crossterm::event::{KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;
use ratatui::Terminal;

use super::app::CalculatorApp;
use super::input::{InputHandler, KeyAction};
use super::keypad::KeypadWidget;
use super::ui::{self, CalculatorLayout};
use crate::driver::CalculatorDriver;
use crate::theme::Theme;

/// Screen size the driver lays the calculator out on
const SCREEN: Rect = Rect {
    x: 0,
    y: 0,
    width: 80,
    height: 24,
};

/// Driver wrapping a [`CalculatorApp`]
#[derive(Debug, Default)]
pub struct TuiDriver {
    app: CalculatorApp,
    input: InputHandler,
}

impl TuiDriver {
    /// Creates a new terminal driver
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a terminal driver styled with `theme`
    #[must_use]
    pub fn with_theme(theme: Theme) -> Self {
        Self {
            app: CalculatorApp::with_theme(theme),
            input: InputHandler::new(),
        }
    }

    /// Returns the application state
    #[must_use]
    pub fn app(&self) -> &CalculatorApp {
        &self.app
    }

    /// Sends a raw key event
    pub fn send_key(&mut self, event: KeyEvent) -> KeyAction {
        let action = self.input.handle_key(event);
        self.app.handle(action);
        action
    }

    /// Sends a raw mouse event; returns the index of the pressed button
    pub fn send_mouse(&mut self, event: MouseEvent) -> Option<usize> {
        let area = CalculatorLayout::new(SCREEN).keypad;
        let index = self.input.handle_mouse(event, self.app.keypad(), area)?;
        self.app.click(index);
        Some(index)
    }

    /// Renders the calculator into an off-screen buffer and returns its text
    ///
    /// Returns `None` if the test backend fails to draw.
    #[must_use]
    pub fn screen(&self) -> Option<String> {
        let mut terminal = Terminal::new(TestBackend::new(SCREEN.width, SCREEN.height)).ok()?;
        terminal.draw(|frame| ui::render(&self.app, frame)).ok()?;
        Some(
            terminal
                .backend()
                .buffer()
                .content()
                .iter()
                .map(|c| c.symbol())
                .collect(),
        )
    }
}

impl CalculatorDriver for TuiDriver {
    fn press_key(&mut self, key: &str) -> bool {
        let Some(code) = InputHandler::key_code(key) else {
            return false;
        };
        !matches!(
            self.send_key(KeyEvent::new(code, KeyModifiers::NONE)),
            KeyAction::None
        )
    }

    fn press_button(&mut self, id: &str) -> bool {
        let keypad = self.app.keypad();
        let area = CalculatorLayout::new(SCREEN).keypad;
        let Some((column, row)) = keypad
            .buttons()
            .iter()
            .position(|b| b.id() == id)
            .and_then(|index| KeypadWidget::button_center(keypad, area, index))
        else {
            return false;
        };
        self.send_mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
        .is_some()
    }

    fn display(&self) -> String {
        self.app.display().to_string()
    }

    fn reset(&mut self) {
        self.app.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::{
        verify_all, verify_basic_arithmetic, verify_buttons, verify_clear,
        verify_division_by_zero, verify_entry_rules, verify_immediate_fold,
    };
    use crossterm::event::KeyCode;

    #[test]
    fn test_tui_driver_new() {
        let driver = TuiDriver::new();
        assert_eq!(driver.display(), "0");
        assert!(!driver.app().should_quit());
    }

    #[test]
    fn test_ctrl_c_quits_without_touching_display() {
        let mut driver = TuiDriver::new();
        driver.press_key("5");
        let action = driver.send_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(action, KeyAction::Quit);
        assert!(driver.app().should_quit());
        assert_eq!(driver.display(), "5");
    }

    #[test]
    fn test_press_key_reports_handling() {
        let mut driver = TuiDriver::new();
        assert!(driver.press_key("9"));
        assert!(!driver.press_key("Tab"));
        assert!(!driver.press_key("F1"));
        assert_eq!(driver.display(), "9");
    }

    #[test]
    fn test_mouse_click_outside_keypad() {
        let mut driver = TuiDriver::new();
        let event = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        };
        assert!(driver.send_mouse(event).is_none());
        assert_eq!(driver.display(), "0");
    }

    #[test]
    fn test_screen_shows_display() {
        let mut driver = TuiDriver::new();
        driver.press_keys(&["1", "2", "3", "4", "5"]);
        assert!(driver.screen().unwrap().contains("12345"));
    }

    // ===== Shared scenarios =====

    #[test]
    fn test_unified_basic_arithmetic_tui() {
        verify_basic_arithmetic(&mut TuiDriver::new());
    }

    #[test]
    fn test_unified_immediate_fold_tui() {
        verify_immediate_fold(&mut TuiDriver::new());
    }

    #[test]
    fn test_unified_entry_rules_tui() {
        verify_entry_rules(&mut TuiDriver::new());
    }

    #[test]
    fn test_unified_division_by_zero_tui() {
        verify_division_by_zero(&mut TuiDriver::new());
    }

    #[test]
    fn test_unified_clear_tui() {
        verify_clear(&mut TuiDriver::new());
    }

    #[test]
    fn test_unified_buttons_tui() {
        verify_buttons(&mut TuiDriver::new());
    }

    #[test]
    fn test_all_scenarios_tui() {
        verify_all(&mut TuiDriver::new());
    }
}
