//! keycalc CLI library
//!
//! Command-line front end for the keycalc calculator: an interactive
//! terminal calculator plus batch commands that replay keys, print the web
//! markup, and print the keypad layout.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

mod commands;
mod config;
mod error;
pub mod logging;
pub mod runner;
pub mod tui_runner;

pub use commands::{Cli, ColorArg, Commands, KeysArgs, ThemeArg};
pub use config::{CliConfig, ColorChoice, Verbosity};
pub use error::{CliError, CliResult};
pub use logging::LogTarget;
pub use runner::{decode_keys, run_html, run_keys, run_layout};
pub use tui_runner::run_tui;
