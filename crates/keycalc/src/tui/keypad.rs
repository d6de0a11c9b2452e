//! Keypad widget
//!
//! Draws the shared [`Keypad`] grid inside a bordered block. Buttons that
//! span several columns are drawn as one wide cell, and mouse clicks are
//! mapped back to buttons with the same geometry.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Widget},
};

use crate::keypad::{Keypad, KeypadButton};
use crate::theme::{Rgb, Theme};

pub(crate) fn color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

/// Inner area and cell size of the grid, `None` when too small to draw
fn grid(keypad: &Keypad, area: Rect) -> Option<(Rect, u16, u16)> {
    let inner = Block::default().borders(Borders::ALL).inner(area);
    let (rows, cols) = keypad.dimensions();
    let cell_width = inner.width / cols as u16;
    let cell_height = inner.height / rows as u16;
    if cell_width == 0 || cell_height == 0 {
        return None;
    }
    Some((inner, cell_width, cell_height))
}

/// Keypad widget for rendering
#[derive(Debug)]
pub struct KeypadWidget<'a> {
    keypad: &'a Keypad,
    theme: &'a Theme,
    highlighted: Option<usize>,
}

impl<'a> KeypadWidget<'a> {
    /// Creates a new keypad widget
    #[must_use]
    pub fn new(keypad: &'a Keypad, theme: &'a Theme) -> Self {
        Self {
            keypad,
            theme,
            highlighted: None,
        }
    }

    /// Highlights the button at `index`
    #[must_use]
    pub fn highlighted(mut self, index: Option<usize>) -> Self {
        self.highlighted = index;
        self
    }

    /// Converts a click position to a button index
    #[must_use]
    pub fn hit_test(keypad: &Keypad, area: Rect, x: u16, y: u16) -> Option<usize> {
        let (inner, cell_width, cell_height) = grid(keypad, area)?;
        if x < inner.x || y < inner.y || x >= inner.right() || y >= inner.bottom() {
            return None;
        }
        let col = ((x - inner.x) / cell_width) as usize;
        let row = ((y - inner.y) / cell_height) as usize;
        keypad.index_at(row, col)
    }

    /// Screen position at the centre of the button at `index`
    #[must_use]
    pub fn button_center(keypad: &Keypad, area: Rect, index: usize) -> Option<(u16, u16)> {
        let (inner, cell_width, cell_height) = grid(keypad, area)?;
        let button = keypad.get_button(index)?;
        let x = inner.x + button.col as u16 * cell_width + (cell_width * button.span as u16) / 2;
        let y = inner.y + button.row as u16 * cell_height + cell_height / 2;
        Some((x, y))
    }

    fn button_style(&self, index: usize, button: &KeypadButton) -> Style {
        if self.highlighted == Some(index) {
            return Style::default()
                .fg(color(self.theme.background))
                .bg(color(self.theme.highlight))
                .add_modifier(Modifier::BOLD);
        }
        Style::default()
            .fg(color(self.theme.button_text_color(button.variant)))
            .bg(color(self.theme.button_color(button.variant)))
    }
}

impl Widget for KeypadWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color(self.theme.border)))
            .render(area, buf);

        let Some((inner, cell_width, cell_height)) = grid(self.keypad, area) else {
            return;
        };

        for (index, button) in self.keypad.buttons().iter().enumerate() {
            let width = cell_width * button.span as u16;
            // One column of gap between buttons when there is room for it
            let gap = u16::from(cell_width > 2);
            let rect = Rect {
                x: inner.x + button.col as u16 * cell_width,
                y: inner.y + button.row as u16 * cell_height,
                width: width - gap,
                height: cell_height,
            };
            let style = self.button_style(index, button);
            buf.set_style(rect, style);

            let label_width = button.label.chars().count() as u16;
            let label_x = rect.x + rect.width.saturating_sub(label_width) / 2;
            let label_y = rect.y + rect.height / 2;
            buf.set_stringn(label_x, label_y, button.label, rect.width as usize, style);
        }
    }
}
