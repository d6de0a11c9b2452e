//! Interactive terminal calculator

use std::io::{self, Write};

use crossterm::{
    cursor::Show,
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use keycalc::tui::{render, CalculatorApp, CalculatorLayout, InputHandler};
use ratatui::{backend::Backend, backend::CrosstermBackend, layout::Rect, Terminal};
use tracing::{info, warn};

use crate::config::CliConfig;
use crate::error::CliResult;

/// Leaves raw mode, the alternate screen and mouse capture
///
/// Every step is attempted; the first failure is returned.
fn restore<W: Write>(out: &mut W) -> io::Result<()> {
    let raw = disable_raw_mode();
    let screen = execute!(out, LeaveAlternateScreen, DisableMouseCapture, Show);
    raw.and(screen)
}

/// Restores the terminal when dropped, whichever way the session ends
#[derive(Debug)]
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        let guard = Self;
        execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(e) = restore(&mut io::stdout()) {
            warn!(error = %e, "failed to restore terminal");
        }
    }
}

/// Runs the calculator until the user quits
///
/// The terminal is restored on exit and on error.
pub fn run_tui(config: &CliConfig) -> CliResult<()> {
    let _guard = TerminalGuard::enter()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    info!(theme = %config.theme, "starting terminal calculator");
    let mut app = CalculatorApp::with_theme(config.theme.theme());
    run_app(&mut terminal, &mut app)?;

    info!(display = app.display(), "terminal calculator closed");
    Ok(())
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut CalculatorApp) -> CliResult<()> {
    let input = InputHandler::new();
    let mut keypad_area = Rect::default();

    while !app.should_quit() {
        terminal.draw(|frame| {
            keypad_area = CalculatorLayout::new(frame.area()).keypad;
            render(app, frame);
        })?;

        match event::read()? {
            Event::Key(key) => app.handle(input.handle_key(key)),
            Event::Mouse(mouse) => {
                if let Some(index) = input.handle_mouse(mouse, app.keypad(), keypad_area) {
                    app.click(index);
                }
            }
            _ => {}
        }
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use keycalc::tui::KeyAction;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_restore_writes_every_step() {
        let mut out = Vec::new();
        restore(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("\x1b[?1049l"), "alternate screen left");
        assert!(text.contains("\x1b[?1000l"), "mouse capture disabled");
        assert!(text.contains("\x1b[?25h"), "cursor shown");
    }

    #[test]
    fn test_run_app_returns_once_quit() {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        let mut app = CalculatorApp::new();
        app.handle(KeyAction::Quit);
        run_app(&mut terminal, &mut app).unwrap();
        assert!(app.should_quit());
    }
}
