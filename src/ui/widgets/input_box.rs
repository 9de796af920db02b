// src/ui/widgets/input_box.rs
//! Bordered single-line input.

use ratatui::{
    Frame,
    layout::{Position, Rect},
    widgets::{Block, Borders, Paragraph},
};

/// Render `text` inside a box titled `title` and park the cursor after it.
pub fn render_input_box(f: &mut Frame<'_>, area: Rect, title: &str, text: &str) {
    let input = Paragraph::new(text.to_string())
        .block(Block::default().borders(Borders::ALL).title(title.to_string()));
    f.render_widget(input, area);

    let width = u16::try_from(text.chars().count()).unwrap_or(u16::MAX);
    let x = area
        .x
        .saturating_add(1)
        .saturating_add(width)
        .min(area.right().saturating_sub(2));
    f.set_cursor_position(Position::new(x, area.y + 1));
}
