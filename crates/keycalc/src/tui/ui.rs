//! Terminal rendering

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Flex, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
    Frame,
};

use super::app::CalculatorApp;
use super::keypad::{color, KeypadWidget};
use crate::keymap::SHORTCUTS;

/// Title shown on the calculator frame
pub const TITLE: &str = " keycalc ";

/// Width of the calculator column, borders included
pub const CALC_WIDTH: u16 = 38;

/// Areas of the calculator inside the terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalculatorLayout {
    /// Outer frame
    pub frame: Rect,
    /// Display panel
    pub display: Rect,
    /// Keypad, border included
    pub keypad: Rect,
    /// Shortcut help line
    pub help: Rect,
}

impl CalculatorLayout {
    /// Splits `area` into the calculator regions
    #[must_use]
    pub fn new(area: Rect) -> Self {
        let [frame] = Layout::horizontal([Constraint::Length(CALC_WIDTH)])
            .flex(Flex::Center)
            .areas(area);
        let inner = Block::default().borders(Borders::ALL).inner(frame);
        let [display, keypad, help] = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4),
                Constraint::Min(7),
                Constraint::Length(3),
            ])
            .areas(inner);
        Self {
            frame,
            display,
            keypad,
            help,
        }
    }
}

/// Renders the calculator UI to the frame
pub fn render(app: &CalculatorApp, frame: &mut Frame) {
    let area = frame.area();
    frame.render_widget(CalculatorUI::new(app), area);
}

/// Calculator UI widget
#[derive(Debug)]
pub struct CalculatorUI<'a> {
    app: &'a CalculatorApp,
}

impl<'a> CalculatorUI<'a> {
    /// Creates a new calculator UI widget
    #[must_use]
    pub fn new(app: &'a CalculatorApp) -> Self {
        Self { app }
    }

    fn render_display(&self, area: Rect, buf: &mut Buffer) {
        let theme = self.app.theme();
        let base = Style::default()
            .fg(color(theme.text))
            .bg(color(theme.display_background));

        let pending = self.app.pending_label().unwrap_or_default();
        let lines = vec![
            Line::from(Span::styled(
                pending,
                Style::default().fg(color(theme.operator)),
            )),
            Line::from(Span::styled(
                self.app.display().to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
        ];

        Paragraph::new(lines)
            .style(base)
            .alignment(Alignment::Right)
            .block(
                Block::default()
                    .borders(Borders::BOTTOM)
                    .border_style(Style::default().fg(color(theme.border))),
            )
            .render(area, buf);
    }

    fn render_help(&self, area: Rect, buf: &mut Buffer) {
        let theme = self.app.theme();
        let key_style = Style::default().fg(color(theme.operator));
        // Two shortcuts per line
        let mut lines: Vec<Line> = SHORTCUTS
            .chunks(2)
            .map(|pair| {
                let spans: Vec<Span> = pair
                    .iter()
                    .flat_map(|(keys, desc)| {
                        [Span::styled(*keys, key_style), Span::raw(format!(" {desc}  "))]
                    })
                    .collect();
                Line::from(spans)
            })
            .collect();

        let status = match self.app.last_error() {
            Some(err) => Span::styled(err.to_string(), Style::default().fg(color(theme.clear))),
            None => Span::raw("Ctrl+C quit"),
        };
        lines.push(Line::from(status));

        Paragraph::new(lines)
            .style(Style::default().fg(color(theme.text)))
            .render(area, buf);
    }
}

impl Widget for CalculatorUI<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let layout = CalculatorLayout::new(area);
        let theme = self.app.theme();

        Block::default()
            .title(TITLE)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color(theme.border)))
            .style(Style::default().bg(color(theme.background)))
            .render(layout.frame, buf);

        self.render_display(layout.display, buf);
        KeypadWidget::new(self.app.keypad(), theme)
            .highlighted(self.app.highlighted())
            .render(layout.keypad, buf);
        self.render_help(layout.help, buf);
    }
}
