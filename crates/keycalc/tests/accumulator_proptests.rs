//! Property-based tests for the input accumulator

use keycalc::core::{format_number, is_entry_literal, Action, CalculatorState, Digit, Operator};
use proptest::prelude::*;

// ===== Strategy definitions =====

fn digit_strategy() -> impl Strategy<Value = Digit> {
    (0u8..=9).prop_filter_map("digit", Digit::new)
}

fn operator_strategy() -> impl Strategy<Value = Operator> {
    prop_oneof![
        Just(Operator::Add),
        Just(Operator::Subtract),
        Just(Operator::Multiply),
        Just(Operator::Divide),
    ]
}

fn action_strategy() -> impl Strategy<Value = Action> {
    prop_oneof![
        4 => digit_strategy().prop_map(Action::Digit),
        1 => Just(Action::DecimalPoint),
        2 => operator_strategy().prop_map(Action::Operator),
        1 => Just(Action::Equals),
        1 => Just(Action::Clear),
    ]
}

fn run(actions: &[Action]) -> CalculatorState {
    let mut state = CalculatorState::new();
    for action in actions {
        state.apply(*action).unwrap();
    }
    state
}

fn type_number(state: &mut CalculatorState, n: u32) {
    for c in n.to_string().chars() {
        state.digit(Digit::try_from(c).unwrap());
    }
}

proptest! {
    /// Any action sequence is accepted and never produces a malformed display
    #[test]
    fn prop_actions_never_fail(actions in prop::collection::vec(action_strategy(), 0..64)) {
        let mut state = CalculatorState::new();
        for action in actions {
            prop_assert!(state.apply(action).is_ok(), "{action} rejected");
            prop_assert!(!state.display().is_empty());
        }
    }

    /// While a number is being typed the display is a decimal literal
    #[test]
    fn prop_editing_display_is_literal(actions in prop::collection::vec(action_strategy(), 0..64)) {
        let state = run(&actions);
        if !state.is_awaiting_fresh_operand() {
            prop_assert!(is_entry_literal(state.display()), "{:?}", state.display());
        }
    }

    /// Operand and operator are pending together or not at all
    #[test]
    fn prop_pending_pair_consistent(actions in prop::collection::vec(action_strategy(), 0..64)) {
        let state = run(&actions);
        prop_assert_eq!(state.pending_operand().is_some(), state.pending_operator().is_some());
    }

    /// A second decimal point never changes anything
    #[test]
    fn prop_decimal_point_idempotent(actions in prop::collection::vec(action_strategy(), 0..32)) {
        let mut once = run(&actions);
        once.decimal_point();
        let mut twice = once.clone();
        twice.decimal_point();
        prop_assert_eq!(format!("{once:?}"), format!("{twice:?}"));
        prop_assert!(once.display().matches('.').count() <= 1 || once.is_awaiting_fresh_operand());
    }

    /// Clear always returns to the initial state
    #[test]
    fn prop_clear_resets(actions in prop::collection::vec(action_strategy(), 0..32)) {
        let mut state = run(&actions);
        state.clear();
        prop_assert_eq!(state, CalculatorState::new());
    }

    /// `transition` leaves its input untouched and agrees with `apply`
    #[test]
    fn prop_transition_is_pure(
        actions in prop::collection::vec(action_strategy(), 0..32),
        next in action_strategy(),
    ) {
        let state = run(&actions);
        let before = format!("{state:?}");
        let after = state.transition(next).unwrap();
        prop_assert_eq!(format!("{state:?}"), before);

        let mut applied = state.clone();
        applied.apply(next).unwrap();
        prop_assert_eq!(format!("{applied:?}"), format!("{after:?}"));
    }

    /// Chained operators fold strictly left to right
    #[test]
    fn prop_chain_matches_left_fold(
        first in 0u32..1000,
        rest in prop::collection::vec((operator_strategy(), 0u32..1000), 1..6),
    ) {
        let mut state = CalculatorState::new();
        type_number(&mut state, first);
        let mut expected = f64::from(first);
        for (op, n) in &rest {
            state.operator(*op).unwrap();
            type_number(&mut state, *n);
            expected = op.apply(expected, f64::from(*n));
        }
        state.equals().unwrap();
        prop_assert_eq!(state.display(), format_number(expected));
        prop_assert!(state.pending().is_none());
    }

    /// Digits after a result start a new number
    #[test]
    fn prop_fresh_operand_after_equals(a in 1u32..100, b in 1u32..100, d in digit_strategy()) {
        let mut state = CalculatorState::new();
        type_number(&mut state, a);
        state.operator(Operator::Add).unwrap();
        type_number(&mut state, b);
        state.equals().unwrap();
        state.digit(d);
        prop_assert_eq!(state.display(), d.to_string());
    }
}
