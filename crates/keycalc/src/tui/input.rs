//! Keyboard input handling
//!
//! Crossterm key codes are translated to browser key names and then decoded
//! by [`crate::keymap`], so both skins share one set of shortcuts.

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;

use super::keypad::KeypadWidget;
use crate::core::Action;
use crate::keymap;
use crate::keypad::Keypad;

/// Actions that can be triggered by keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Calculator action
    Calc(Action),
    /// Quit the application
    Quit,
    /// No action (ignored input)
    None,
}

/// Input handler that maps key events to actions
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Maps a key event to an action
    #[must_use]
    pub fn handle_key(&self, event: KeyEvent) -> KeyAction {
        let KeyEvent {
            code,
            modifiers,
            kind,
            ..
        } = event;

        if kind == KeyEventKind::Release {
            return KeyAction::None;
        }

        if modifiers.contains(KeyModifiers::CONTROL) {
            return match code {
                KeyCode::Char('c' | 'q') => KeyAction::Quit,
                _ => KeyAction::None,
            };
        }

        Self::key_name(code)
            .and_then(|name| keymap::action_for_key(&name))
            .map_or(KeyAction::None, KeyAction::Calc)
    }

    /// Maps a left click inside the keypad `area` to a button index
    #[must_use]
    pub fn handle_mouse(&self, event: MouseEvent, keypad: &Keypad, area: Rect) -> Option<usize> {
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                KeypadWidget::hit_test(keypad, area, event.column, event.row)
            }
            _ => None,
        }
    }

    /// Key code for a browser-style key name
    #[must_use]
    pub fn key_code(name: &str) -> Option<KeyCode> {
        match name {
            "Enter" => Some(KeyCode::Enter),
            "Escape" => Some(KeyCode::Esc),
            "Backspace" => Some(KeyCode::Backspace),
            "Tab" => Some(KeyCode::Tab),
            _ => {
                let mut chars = name.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Some(KeyCode::Char(c)),
                    _ => None,
                }
            }
        }
    }

    /// Browser-style name for a key code, `None` for keys with no name
    #[must_use]
    pub fn key_name(code: KeyCode) -> Option<String> {
        match code {
            KeyCode::Char(c) => Some(c.to_string()),
            KeyCode::Enter => Some("Enter".to_string()),
            KeyCode::Esc => Some("Escape".to_string()),
            KeyCode::Backspace => Some("Backspace".to_string()),
            KeyCode::Tab => Some("Tab".to_string()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Digit, Operator};

    fn key_event(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn key_event_ctrl(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::CONTROL)
    }

    #[test]
    fn test_handle_digit_keys() {
        let handler = InputHandler::new();
        for d in Digit::all() {
            let event = key_event(KeyCode::Char(d.as_char()));
            assert_eq!(handler.handle_key(event), KeyAction::Calc(Action::Digit(d)));
        }
    }

    #[test]
    fn test_handle_operator_keys() {
        let handler = InputHandler::new();
        let cases = [
            ('+', Operator::Add),
            ('-', Operator::Subtract),
            ('*', Operator::Multiply),
            ('/', Operator::Divide),
        ];
        for (c, op) in cases {
            assert_eq!(
                handler.handle_key(key_event(KeyCode::Char(c))),
                KeyAction::Calc(Action::Operator(op))
            );
        }
    }

    #[test]
    fn test_handle_decimal_point() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Char('.'))),
            KeyAction::Calc(Action::DecimalPoint)
        );
    }

    #[test]
    fn test_handle_equals_keys() {
        let handler = InputHandler::new();
        for code in [KeyCode::Enter, KeyCode::Char('=')] {
            assert_eq!(
                handler.handle_key(key_event(code)),
                KeyAction::Calc(Action::Equals)
            );
        }
    }

    #[test]
    fn test_handle_clear_keys() {
        let handler = InputHandler::new();
        for code in [KeyCode::Esc, KeyCode::Char('c'), KeyCode::Char('C')] {
            assert_eq!(
                handler.handle_key(key_event(code)),
                KeyAction::Calc(Action::Clear)
            );
        }
    }

    #[test]
    fn test_handle_ctrl_quit() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event_ctrl(KeyCode::Char('c'))),
            KeyAction::Quit
        );
        assert_eq!(
            handler.handle_key(key_event_ctrl(KeyCode::Char('q'))),
            KeyAction::Quit
        );
        assert_eq!(
            handler.handle_key(key_event_ctrl(KeyCode::Char('x'))),
            KeyAction::None
        );
    }

    #[test]
    fn test_release_events_ignored() {
        let handler = InputHandler::new();
        let mut event = key_event(KeyCode::Char('5'));
        event.kind = KeyEventKind::Release;
        assert_eq!(handler.handle_key(event), KeyAction::None);
    }

    #[test]
    fn test_unmapped_keys() {
        let handler = InputHandler::new();
        for code in [
            KeyCode::Char('x'),
            KeyCode::Char('%'),
            KeyCode::Backspace,
            KeyCode::Tab,
            KeyCode::Left,
            KeyCode::F(1),
        ] {
            assert_eq!(handler.handle_key(key_event(code)), KeyAction::None, "{code:?}");
        }
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_handle_mouse_left_click() {
        let handler = InputHandler::new();
        let keypad = Keypad::new();
        let area = Rect::new(0, 0, 30, 12);
        let down = mouse(MouseEventKind::Down(MouseButton::Left), 1, 1);
        assert_eq!(
            handler.handle_mouse(down, &keypad, area),
            keypad.find_by_action(Action::Clear)
        );
    }

    #[test]
    fn test_handle_mouse_ignores_other_events() {
        let handler = InputHandler::new();
        let keypad = Keypad::new();
        let area = Rect::new(0, 0, 30, 12);
        for kind in [
            MouseEventKind::Up(MouseButton::Left),
            MouseEventKind::Down(MouseButton::Right),
            MouseEventKind::Moved,
            MouseEventKind::ScrollDown,
        ] {
            assert!(handler.handle_mouse(mouse(kind, 1, 1), &keypad, area).is_none());
        }
    }

    #[test]
    fn test_key_code_round_trips_names() {
        for name in ["Enter", "Escape", "7", "/", "c"] {
            let code = InputHandler::key_code(name).unwrap();
            assert_eq!(InputHandler::key_name(code).as_deref(), Some(name));
        }
        assert!(InputHandler::key_code("F1").is_none());
        assert!(InputHandler::key_code("").is_none());
    }

    #[test]
    fn test_key_names() {
        assert_eq!(InputHandler::key_name(KeyCode::Esc).as_deref(), Some("Escape"));
        assert_eq!(InputHandler::key_name(KeyCode::Enter).as_deref(), Some("Enter"));
        assert_eq!(InputHandler::key_name(KeyCode::Char('7')).as_deref(), Some("7"));
        assert_eq!(InputHandler::key_name(KeyCode::Up), None);
    }
}
