//! Web skin
//!
//! Mounts the display and keypad into a [`MockDom`] tree, turns clicks and
//! key presses into accumulator actions and keeps the tree in sync.

use tracing::{debug, error};

use super::dom::{DomElement, DomEvent, EventOutcome, MockDom};
use crate::core::{Action, CalcError, CalculatorState};
use crate::keymap;
use crate::keypad::Keypad;
use crate::theme::{Theme, ThemeName};

/// Element id of the display
pub const DISPLAY_ID: &str = "calc-display";
/// Element id of the keypad container
pub const KEYPAD_ID: &str = "calc-keypad";
/// Element id of the calculator root
pub const ROOT_ID: &str = "calculator";
/// Class set on the most recently pressed button
pub const PRESSED_CLASS: &str = "is-pressed";

/// Browser-style calculator rendered into a mock DOM
#[derive(Debug)]
pub struct WebCalculator {
    state: CalculatorState,
    keypad: Keypad,
    theme: Theme,
    dom: MockDom,
    pressed: Option<String>,
    last_error: Option<CalcError>,
}

impl Default for WebCalculator {
    fn default() -> Self {
        Self::new()
    }
}

impl WebCalculator {
    /// Creates a calculator with the default theme
    #[must_use]
    pub fn new() -> Self {
        Self::with_theme(Theme::default())
    }

    /// Creates a calculator styled with `theme`
    #[must_use]
    pub fn with_theme(theme: Theme) -> Self {
        let keypad = Keypad::new();
        let state = CalculatorState::new();
        let dom = MockDom::new(build_tree(&keypad, &theme, &state));
        Self {
            state,
            keypad,
            theme,
            dom,
            pressed: None,
            last_error: None,
        }
    }

    /// Creates a calculator styled with the named theme
    #[must_use]
    pub fn with_theme_name(name: ThemeName) -> Self {
        Self::with_theme(name.theme())
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

    /// Returns the theme
    #[must_use]
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Returns the DOM
    #[must_use]
    pub fn dom(&self) -> &MockDom {
        &self.dom
    }

    /// Returns the error raised by the last action, if any
    #[must_use]
    pub fn last_error(&self) -> Option<&CalcError> {
        self.last_error.as_ref()
    }

    /// Dispatches a DOM event
    pub fn handle_event(&mut self, event: DomEvent) -> EventOutcome {
        self.dom.record_event(event.clone());

        match event {
            DomEvent::Click { element_id } => {
                let Some(action) = self.keypad.find_by_id(&element_id).map(|b| b.action) else {
                    return EventOutcome::IGNORED;
                };
                self.dispatch(action);
                EventOutcome {
                    handled: true,
                    prevent_default: false,
                }
            }
            DomEvent::KeyDown { key } => {
                let Some(binding) = keymap::binding_for_key(&key) else {
                    return EventOutcome::IGNORED;
                };
                self.dispatch(binding.action);
                EventOutcome {
                    handled: true,
                    prevent_default: binding.prevent_default,
                }
            }
        }
    }

    /// Applies an action and re-syncs the DOM
    pub fn dispatch(&mut self, action: Action) {
        debug!(%action, "web dispatch");
        self.last_error = None;
        if let Err(err) = self.state.apply(action) {
            error!(%err, %action, "action rejected");
            self.last_error = Some(err);
        }

        let pressed = self
            .keypad
            .find_by_action(action)
            .and_then(|i| self.keypad.get_button(i))
            .map(|b| b.id());
        self.set_pressed(pressed);
        self.sync_display();
    }

    /// Resets the accumulator and the DOM
    pub fn reset(&mut self) {
        self.state = CalculatorState::new();
        self.pressed = None;
        self.last_error = None;
        self.dom = MockDom::new(build_tree(&self.keypad, &self.theme, &self.state));
    }

    /// Renders the current tree as HTML
    #[must_use]
    pub fn render_html(&self) -> String {
        self.dom.to_html()
    }

    fn set_pressed(&mut self, id: Option<String>) {
        if let Some(previous) = self.pressed.take() {
            if let Some(elem) = self.dom.get_element_mut(&previous) {
                elem.remove_class(PRESSED_CLASS);
            }
        }
        if let Some(id) = &id {
            if let Some(elem) = self.dom.get_element_mut(id) {
                elem.add_class(PRESSED_CLASS);
            }
        }
        self.pressed = id;
    }

    fn sync_display(&mut self) {
        let pending = pending_label(&self.state);
        if let Some(display) = self.dom.get_element_mut(DISPLAY_ID) {
            display.set_text(self.state.display());
            match pending {
                Some(label) => display.set_attr("data-pending", &label),
                None => display.remove_attr("data-pending"),
            }
        }
    }
}

/// Text such as `7 ×` describing the pending operation
fn pending_label(state: &CalculatorState) -> Option<String> {
    state
        .pending()
        .map(|p| format!("{} {}", crate::core::format_number(p.operand), p.operator))
}

fn build_tree(keypad: &Keypad, theme: &Theme, state: &CalculatorState) -> DomElement {
    let (_, cols) = keypad.dimensions();

    let mut display = DomElement::new("div")
        .with_id(DISPLAY_ID)
        .with_class("calc-display")
        .with_text(state.display());
    if let Some(label) = pending_label(state) {
        display.set_attr("data-pending", &label);
    }

    let mut grid = DomElement::new("div")
        .with_id(KEYPAD_ID)
        .with_class("calc-keypad")
        .with_attr("style", &format!("grid-template-columns: repeat({cols}, 1fr);"));

    for button in keypad.buttons() {
        let mut elem = DomElement::new("button")
            .with_id(&button.id())
            .with_class("calc-btn")
            .with_class(Theme::button_class(button.variant))
            .with_attr("type", "button")
            .with_attr("data-action", &button.action.to_string())
            .with_text(button.label);
        if button.span > 1 {
            elem.add_class(&format!("col-span-{}", button.span));
        }
        grid = grid.with_child(elem);
    }

    DomElement::new("div")
        .with_id(ROOT_ID)
        .with_class("calc")
        .with_class(&theme.css_class())
        .with_attr("style", &theme.css_variables())
        .with_child(display)
        .with_child(grid)
}
