// src/ui/widgets/file_list.rs
//! Entry list widget.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
};

use crate::fs::PathEntry;
use crate::ui::icons::icon_for_entry;

/// Render the entries at `matches` with their descriptions dimmed.
pub fn render_file_list(
    f: &mut Frame<'_>,
    area: Rect,
    title: &str,
    entries: &[PathEntry],
    matches: &[usize],
    state: &mut ListState,
) {
    let items: Vec<ListItem> = matches
        .iter()
        .filter_map(|&i| entries.get(i).map(|e| (i, e)))
        .map(|(i, entry)| {
            let mut spans = vec![Span::raw(format!("{} {}", icon_for_entry(i, entry), entry.label))];
            if !entry.description.is_empty() {
                spans.push(Span::styled(
                    format!("  {}", entry.description),
                    Style::default().fg(Color::DarkGray),
                ));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(title.to_string()))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol(">> ");

    f.render_stateful_widget(list, area, state);
}
