//! Unified calculator driver
//!
//! Every skin is a thin adapter over the same accumulator. The
//! [`CalculatorDriver`] trait lets one scenario run against any of them, so
//! the terminal and web skins are held to the same observable behaviour.
//!
//! ```rust
//! use keycalc::driver::{verify_immediate_fold, CalculatorDriver};
//! use keycalc::web::WebDriver;
//!
//! let mut driver = WebDriver::new();
//! verify_immediate_fold(&mut driver);
//! ```

/// Abstract driver for calculator interactions
pub trait CalculatorDriver {
    /// Presses a key by name; returns false if the calculator ignores it
    fn press_key(&mut self, key: &str) -> bool;

    /// Presses a keypad button by element id; returns false if unknown
    fn press_button(&mut self, id: &str) -> bool;

    /// Returns the current display text
    fn display(&self) -> String;

    /// Returns the skin to its initial state
    fn reset(&mut self);

    /// Presses several keys in order
    fn press_keys(&mut self, keys: &[&str]) {
        for key in keys {
            self.press_key(key);
        }
    }
}

#[cfg(feature = "tui")]
pub use crate::tui::TuiDriver;
pub use crate::web::WebDriver;

// ===== Unified scenarios =====
// Each works with ANY CalculatorDriver implementation

/// Verifies the four operations
pub fn verify_basic_arithmetic<D: CalculatorDriver>(driver: &mut D) {
    let cases: [(&[&str], &str); 4] = [
        (&["3", "+", "4", "="], "7"),
        (&["1", "0", "-", "4", "="], "6"),
        (&["6", "*", "7", "="], "42"),
        (&["9", "/", "3", "="], "3"),
    ];
    for (keys, expected) in cases {
        driver.reset();
        driver.press_keys(keys);
        assert_eq!(driver.display(), expected, "keys {keys:?}");
    }
    driver.reset();
}

/// Verifies that chained operators fold left to right without precedence
pub fn verify_immediate_fold<D: CalculatorDriver>(driver: &mut D) {
    driver.reset();
    driver.press_keys(&["3", "+", "4", "*"]);
    assert_eq!(driver.display(), "7");
    driver.press_keys(&["2", "Enter"]);
    assert_eq!(driver.display(), "14");
    driver.reset();
}

/// Verifies leading-zero suppression, the decimal guard and fresh-operand gating
pub fn verify_entry_rules<D: CalculatorDriver>(driver: &mut D) {
    driver.reset();
    driver.press_keys(&["0", "0"]);
    assert_eq!(driver.display(), "0");
    driver.press_key("5");
    assert_eq!(driver.display(), "5");

    driver.press_keys(&[".", ".", "2", "."]);
    assert_eq!(driver.display(), "5.2");

    driver.press_keys(&["+", "7"]);
    assert_eq!(driver.display(), "7");

    driver.press_keys(&["-", "."]);
    assert_eq!(driver.display(), "0.");
    driver.reset();
}

/// Verifies that division by zero shows Infinity instead of failing
pub fn verify_division_by_zero<D: CalculatorDriver>(driver: &mut D) {
    driver.reset();
    driver.press_keys(&["5", "/", "0", "="]);
    assert_eq!(driver.display(), "Infinity");
    driver.reset();
}

/// Verifies that every clear key resets the display and the pending operation
pub fn verify_clear<D: CalculatorDriver>(driver: &mut D) {
    for clear_key in ["Escape", "c", "C"] {
        driver.reset();
        driver.press_keys(&["8", "*", "3"]);
        driver.press_key(clear_key);
        assert_eq!(driver.display(), "0");
        // Nothing pending: equals must not resurrect the 8 ×
        driver.press_key("=");
        assert_eq!(driver.display(), "0");
    }
    driver.reset();
}

/// Verifies that keypad buttons behave like their keys
pub fn verify_buttons<D: CalculatorDriver>(driver: &mut D) {
    driver.reset();
    for id in ["btn-1", "btn-2", "btn-decimal", "btn-5", "btn-times", "btn-4", "btn-equals"] {
        assert!(driver.press_button(id), "button {id} should exist");
    }
    assert_eq!(driver.display(), "50");

    for id in ["btn-9", "btn-minus", "btn-1", "btn-0", "btn-equals"] {
        driver.press_button(id);
    }
    assert_eq!(driver.display(), "-1");

    driver.press_button("btn-clear");
    assert_eq!(driver.display(), "0");
    assert!(!driver.press_button("btn-percent"));
    driver.reset();
}

/// Runs every scenario
pub fn verify_all<D: CalculatorDriver>(driver: &mut D) {
    verify_basic_arithmetic(driver);
    verify_immediate_fold(driver);
    verify_entry_rules(driver);
    verify_division_by_zero(driver);
    verify_clear(driver);
    verify_buttons(driver);
}
