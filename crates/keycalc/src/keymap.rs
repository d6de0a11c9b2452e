//! Keyboard shortcuts
//!
//! Keys are named the way browsers report `KeyboardEvent.key`; the terminal
//! skin translates crossterm key codes into the same names.

use crate::core::{Action, Digit, Operator};

/// A key decoded into a calculator action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyBinding {
    /// Action to dispatch
    pub action: Action,
    /// Whether the host should suppress its default handling of the key
    pub prevent_default: bool,
}

impl KeyBinding {
    const fn new(action: Action) -> Self {
        Self {
            action,
            prevent_default: false,
        }
    }
}

/// Maps a key name to its binding, `None` for keys the calculator ignores
///
/// `/` opens quick-find in some browsers, so its binding asks the host to
/// prevent the default.
#[must_use]
pub fn binding_for_key(key: &str) -> Option<KeyBinding> {
    let binding = match key {
        "." => KeyBinding::new(Action::DecimalPoint),
        "+" => KeyBinding::new(Action::Operator(Operator::Add)),
        "-" => KeyBinding::new(Action::Operator(Operator::Subtract)),
        "*" => KeyBinding::new(Action::Operator(Operator::Multiply)),
        "/" => KeyBinding {
            action: Action::Operator(Operator::Divide),
            prevent_default: true,
        },
        "Enter" | "=" => KeyBinding::new(Action::Equals),
        "Escape" | "c" | "C" => KeyBinding::new(Action::Clear),
        _ => {
            let mut chars = key.chars();
            let (Some(c), None) = (chars.next(), chars.next()) else {
                return None;
            };
            let digit = Digit::try_from(c).ok()?;
            KeyBinding::new(Action::Digit(digit))
        }
    };
    Some(binding)
}

/// Maps a key name to its action
#[must_use]
pub fn action_for_key(key: &str) -> Option<Action> {
    binding_for_key(key).map(|b| b.action)
}

/// Shortcut summary for help panels: (keys, description)
pub const SHORTCUTS: &[(&str, &str)] = &[
    ("0-9 .", "digits"),
    ("+ - * /", "operators"),
    ("Enter =", "evaluate"),
    ("Esc c", "clear"),
];
