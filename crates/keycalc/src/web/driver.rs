//! Web driver
//!
//! Implements [`CalculatorDriver`] by dispatching DOM events, so the shared
//! scenarios exercise the same path a browser would.

use super::calculator::{WebCalculator, DISPLAY_ID};
use super::dom::{DomEvent, MockDom};
use crate::driver::CalculatorDriver;
use crate::theme::Theme;

/// Driver wrapping a [`WebCalculator`]
#[derive(Debug, Default)]
pub struct WebDriver {
    calculator: WebCalculator,
}

impl WebDriver {
    /// Creates a new web driver
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a web driver styled with `theme`
    #[must_use]
    pub fn with_theme(theme: Theme) -> Self {
        Self {
            calculator: WebCalculator::with_theme(theme),
        }
    }

    /// Returns the calculator
    #[must_use]
    pub fn calculator(&self) -> &WebCalculator {
        &self.calculator
    }

    /// Returns the DOM
    #[must_use]
    pub fn dom(&self) -> &MockDom {
        self.calculator.dom()
    }

    /// Text of the display element as rendered in the DOM
    #[must_use]
    pub fn display_element_text(&self) -> Option<&str> {
        self.dom().get_element_text(DISPLAY_ID)
    }
}

impl CalculatorDriver for WebDriver {
    fn press_key(&mut self, key: &str) -> bool {
        self.calculator
            .handle_event(DomEvent::key_down(key))
            .handled
    }

    fn press_button(&mut self, id: &str) -> bool {
        self.calculator.handle_event(DomEvent::click(id)).handled
    }

    fn display(&self) -> String {
        self.calculator.display().to_string()
    }

    fn reset(&mut self) {
        self.calculator.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::{
        verify_all, verify_basic_arithmetic, verify_buttons, verify_clear,
        verify_division_by_zero, verify_entry_rules, verify_immediate_fold,
    };
    use crate::theme::ThemeName;

    #[test]
    fn test_web_driver_new() {
        let driver = WebDriver::new();
        assert_eq!(driver.display(), "0");
        assert_eq!(driver.display_element_text(), Some("0"));
    }

    #[test]
    fn test_web_driver_debug() {
        let debug = format!("{:?}", WebDriver::new());
        assert!(debug.contains("WebDriver"));
    }

    #[test]
    fn test_press_key_reports_handling() {
        let mut driver = WebDriver::new();
        assert!(driver.press_key("4"));
        assert!(!driver.press_key("Tab"));
        assert_eq!(driver.display(), "4");
    }

    #[test]
    fn test_dom_tracks_display() {
        let mut driver = WebDriver::new();
        driver.press_keys(&["1", "2", "+", "3", "="]);
        assert_eq!(driver.display_element_text(), Some("15"));
    }

    #[test]
    fn test_events_recorded() {
        let mut driver = WebDriver::new();
        driver.press_key("1");
        driver.press_button("btn-plus");
        let events = driver.dom().event_history();
        assert!(matches!(&events[0], DomEvent::KeyDown { key } if key == "1"));
        assert!(matches!(&events[1], DomEvent::Click { element_id } if element_id == "btn-plus"));
    }

    #[test]
    fn test_themed_driver_behaves_identically() {
        let mut classic = WebDriver::new();
        let mut soft = WebDriver::with_theme(ThemeName::Soft.theme());
        for driver in [&mut classic, &mut soft] {
            driver.press_keys(&["7", ".", "5", "*", "2", "="]);
        }
        assert_eq!(classic.display(), "15");
        assert_eq!(classic.display(), soft.display());
        assert_ne!(
            classic.calculator().render_html(),
            soft.calculator().render_html()
        );
    }

    // ===== Shared scenarios =====

    #[test]
    fn test_unified_basic_arithmetic_web() {
        verify_basic_arithmetic(&mut WebDriver::new());
    }

    #[test]
    fn test_unified_immediate_fold_web() {
        verify_immediate_fold(&mut WebDriver::new());
    }

    #[test]
    fn test_unified_entry_rules_web() {
        verify_entry_rules(&mut WebDriver::new());
    }

    #[test]
    fn test_unified_division_by_zero_web() {
        verify_division_by_zero(&mut WebDriver::new());
    }

    #[test]
    fn test_unified_clear_web() {
        verify_clear(&mut WebDriver::new());
    }

    #[test]
    fn test_unified_buttons_web() {
        verify_buttons(&mut WebDriver::new());
    }

    #[test]
    fn test_all_scenarios_web() {
        verify_all(&mut WebDriver::new());
    }
}
