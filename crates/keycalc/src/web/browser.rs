//! Browser bindings
//!
//! The page forwards `click` and `keydown` events here and calls
//! `preventDefault()` whenever [`BrowserCalculator::press_key`] returns true.

use wasm_bindgen::prelude::*;
use web_sys::console;

use super::calculator::WebCalculator;
use super::dom::DomEvent;
use crate::core::Action;
use crate::theme::ThemeName;

/// Calculator exported to JavaScript
#[derive(Debug)]
#[wasm_bindgen]
pub struct BrowserCalculator {
    inner: WebCalculator,
}

#[wasm_bindgen]
impl BrowserCalculator {
    /// Creates a calculator; `theme` is `"classic"` or `"soft"`
    #[wasm_bindgen(constructor)]
    pub fn new(theme: Option<String>) -> Self {
        console_error_panic_hook::set_once();

        let name = match theme.as_deref().map(str::parse::<ThemeName>) {
            Some(Ok(name)) => name,
            Some(Err(msg)) => {
                console::warn_1(&msg.into());
                ThemeName::default()
            }
            None => ThemeName::default(),
        };
        Self {
            inner: WebCalculator::with_theme_name(name),
        }
    }

    /// Current display text
    #[wasm_bindgen(getter)]
    pub fn display(&self) -> String {
        self.inner.display().to_string()
    }

    /// Handles a `KeyboardEvent.key`; returns true if the page must call
    /// `preventDefault()`
    #[wasm_bindgen(js_name = pressKey)]
    pub fn press_key(&mut self, key: &str) -> bool {
        let outcome = self.inner.handle_event(DomEvent::key_down(key));
        self.report_error();
        outcome.prevent_default
    }

    /// Handles a click on a keypad button; returns false for unknown ids
    #[wasm_bindgen(js_name = pressButton)]
    pub fn press_button(&mut self, id: &str) -> bool {
        let handled = self.inner.handle_event(DomEvent::click(id)).handled;
        self.report_error();
        handled
    }

    /// Resets the calculator
    pub fn clear(&mut self) {
        self.inner.dispatch(Action::Clear);
    }

    /// Markup for the calculator, ready for `innerHTML`
    pub fn markup(&self) -> String {
        self.inner.render_html()
    }

    /// Accumulator state as JSON
    #[wasm_bindgen(js_name = stateJson)]
    pub fn state_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(self.inner.state()).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    fn report_error(&self) {
        if let Some(err) = self.inner.last_error() {
            console::error_1(&err.to_string().into());
        }
    }
}

impl Default for BrowserCalculator {
    fn default() -> Self {
        Self::new(None)
    }
}

/// Installs the panic hook when the module loads
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}
