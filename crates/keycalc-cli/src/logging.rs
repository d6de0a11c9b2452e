//! Tracing subscriber setup
//!
//! `RUST_LOG` wins over the configured verbosity. The interactive calculator
//! owns the terminal, so without a log file it installs no subscriber at all.

use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::{fmt, EnvFilter};

use crate::config::CliConfig;
use crate::error::{CliError, CliResult};

/// Where log events end up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    /// Standard error
    Stderr,
    /// The configured log file
    File,
    /// Nothing is logged
    Disabled,
}

/// Picks the log target for a run
#[must_use]
pub fn target_for(config: &CliConfig, interactive: bool) -> LogTarget {
    match (&config.log_file, interactive) {
        (Some(_), _) => LogTarget::File,
        (None, true) => LogTarget::Disabled,
        (None, false) => LogTarget::Stderr,
    }
}

fn filter(config: &CliConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.verbosity.filter_directive()))
}

/// Installs the global subscriber
pub fn init(config: &CliConfig, interactive: bool) -> CliResult<LogTarget> {
    let target = target_for(config, interactive);
    let installed = match (target, &config.log_file) {
        (LogTarget::File, Some(path)) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            fmt()
                .with_env_filter(filter(config))
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .try_init()
        }
        (LogTarget::Stderr, _) => fmt()
            .with_env_filter(filter(config))
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init(),
        _ => return Ok(LogTarget::Disabled),
    };
    installed.map_err(|e| CliError::config(format!("cannot install logger: {e}")))?;
    Ok(target)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_target_stderr_for_batch_commands() {
        assert_eq!(target_for(&CliConfig::new(), false), LogTarget::Stderr);
    }

    #[test]
    fn test_target_disabled_for_interactive_without_file() {
        assert_eq!(target_for(&CliConfig::new(), true), LogTarget::Disabled);
    }

    #[test]
    fn test_target_file_wins() {
        let config = CliConfig::new().with_log_file("calc.log");
        assert_eq!(target_for(&config, true), LogTarget::File);
        assert_eq!(target_for(&config, false), LogTarget::File);
    }

    #[test]
    fn test_init_disabled_installs_nothing() {
        assert_eq!(init(&CliConfig::new(), true).unwrap(), LogTarget::Disabled);
    }
}
