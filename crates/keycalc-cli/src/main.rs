//! keycalc: single-display keypad calculator
//!
//! ## Usage
//!
//! ```bash
//! keycalc tui                      # Interactive terminal calculator
//! keycalc keys 3 + 4 '*' 2 =       # Replay keys, prints 14
//! keycalc keys --steps 1 + 2 =     # Show the display after every key
//! keycalc html --theme soft        # Web calculator markup
//! keycalc layout                   # Keypad grid and shortcuts
//! ```

use clap::Parser;
use keycalc_cli::{
    logging, run_html, run_keys, run_layout, run_tui, Cli, CliConfig, CliResult, Commands,
    Verbosity,
};
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();

    let config = build_config(&cli)?;
    config.color.apply();
    logging::init(&config, matches!(cli.command, Commands::Tui))?;

    match &cli.command {
        Commands::Tui => run_tui(&config),
        Commands::Keys(args) => {
            print!("{}", run_keys(args)?);
            Ok(())
        }
        Commands::Html => {
            println!("{}", run_html(&config));
            Ok(())
        }
        Commands::Layout => {
            print!("{}", run_layout());
            Ok(())
        }
    }
}

/// File settings first, then flags on top
fn build_config(cli: &Cli) -> CliResult<CliConfig> {
    let mut config = match &cli.config {
        Some(path) => CliConfig::load(path)?,
        None => CliConfig::new(),
    };

    if let Some(theme) = cli.theme {
        config = config.with_theme(theme.into());
    }
    if cli.verbose > 0 || cli.quiet {
        config = config.with_verbosity(Verbosity::from_flags(cli.verbose, cli.quiet));
    }
    if let Some(color) = cli.color {
        config = config.with_color(color.into());
    }
    if let Some(path) = &cli.log_file {
        config = config.with_log_file(path.clone());
    }
    Ok(config)
}
