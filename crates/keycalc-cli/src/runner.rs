//! Batch commands: key replay, markup and layout

use console::style;
use keycalc::core::{Action, CalculatorState};
use keycalc::keymap;
use keycalc::keypad::Keypad;
use keycalc::web::WebCalculator;
use tracing::{debug, info};

use crate::commands::KeysArgs;
use crate::config::CliConfig;
use crate::error::{CliError, CliResult};

/// Decodes every key up front so nothing runs if one is unknown
pub fn decode_keys(keys: &[String]) -> CliResult<Vec<(&str, Action)>> {
    keys.iter()
        .map(|key| {
            keymap::action_for_key(key)
                .map(|action| (key.as_str(), action))
                .ok_or_else(|| CliError::unknown_key(key))
        })
        .collect()
}

/// Replays keys and returns the text to print
pub fn run_keys(args: &KeysArgs) -> CliResult<String> {
    let decoded = decode_keys(&args.keys)?;
    info!(count = decoded.len(), "replaying keys");

    let mut state = CalculatorState::new();
    let mut out = String::new();
    for (key, action) in decoded {
        state.apply(action)?;
        debug!(key, display = state.display(), "key applied");
        if args.steps {
            out.push_str(&format!(
                "{:>6}  {}\n",
                style(key).dim(),
                state.display()
            ));
        }
    }

    if args.json {
        out.push_str(&serde_json::to_string_pretty(&state)?);
        out.push('\n');
    } else if !args.steps {
        out.push_str(state.display());
        out.push('\n');
    }
    Ok(out)
}

/// Web calculator markup for the configured theme
#[must_use]
pub fn run_html(config: &CliConfig) -> String {
    info!(theme = %config.theme, "rendering markup");
    WebCalculator::with_theme_name(config.theme).render_html()
}

/// Plain-text keypad grid followed by the shortcut summary
#[must_use]
pub fn run_layout() -> String {
    let mut out = Keypad::new().to_text();
    out.push('\n');
    for (keys, desc) in keymap::SHORTCUTS {
        out.push_str(&format!("{:<9}{desc}\n", style(keys).bold()));
    }
    out
}
