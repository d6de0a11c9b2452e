//! Both skins must show the same display for the same input

#![cfg(feature = "tui")]

use keycalc::driver::{verify_all, CalculatorDriver};
use keycalc::keypad::Keypad;
use keycalc::theme::Theme;
use keycalc::tui::TuiDriver;
use keycalc::web::WebDriver;
use proptest::prelude::*;

const KEYS: &[&str] = &[
    "0", "1", "2", "3", "4", "5", "6", "7", "8", "9", ".", "+", "-", "*", "/", "=", "Enter",
    "Escape", "c", "C", "x", "Tab",
];

#[test]
fn test_all_scenarios_both_skins() {
    verify_all(&mut WebDriver::new());
    verify_all(&mut TuiDriver::new());
}

#[test]
fn test_all_scenarios_soft_theme() {
    verify_all(&mut WebDriver::with_theme(Theme::soft()));
    verify_all(&mut TuiDriver::with_theme(Theme::soft()));
}

#[test]
fn test_every_button_same_on_both_skins() {
    let mut web = WebDriver::new();
    let mut tui = TuiDriver::new();
    for button in Keypad::new().buttons() {
        let id = button.id();
        assert!(web.press_button(&id), "web ignored {id}");
        assert!(tui.press_button(&id), "tui ignored {id}");
        assert_eq!(web.display(), tui.display(), "after {id}");
    }
}

proptest! {
    #[test]
    fn prop_key_sequences_agree(keys in prop::collection::vec(prop::sample::select(KEYS), 0..48)) {
        let mut web = WebDriver::new();
        let mut tui = TuiDriver::new();
        for key in keys {
            prop_assert_eq!(web.press_key(key), tui.press_key(key), "handling of {:?}", key);
            prop_assert_eq!(web.display(), tui.display(), "after {:?}", key);
        }
    }
}
