// src/ui/layout.rs
//! Layout computation for the picker and prompt screens.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Computed layout areas for rendering.
pub struct ComputedLayout {
    /// Filter line or text input
    pub input_area: Rect,
    /// Entry list (absent for the text prompt)
    pub list_area: Option<Rect>,
    /// One-line status/help bar
    pub status_area: Rect,
}

/// Split `area` into input box, optional list, and status line.
pub fn compute_layout(area: Rect, with_list: bool) -> ComputedLayout {
    if with_list {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(1),
                Constraint::Length(1),
            ])
            .split(area);
        ComputedLayout {
            input_area: chunks[0],
            list_area: Some(chunks[1]),
            status_area: chunks[2],
        }
    } else {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(area);
        ComputedLayout {
            input_area: chunks[0],
            list_area: None,
            status_area: chunks[2],
        }
    }
}
