// src/ui/widgets/status_bar.rs
//! One-line status bar: the current message, or key help.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    widgets::Paragraph,
};

use crate::host::Severity;

/// Line prefix and color for messages of each severity, shared by the
/// status bar and the stderr output.
pub fn severity_style(severity: Severity) -> (&'static str, Color) {
    match severity {
        Severity::Info => ("", Color::Cyan),
        Severity::Warning => ("warning: ", Color::Yellow),
        Severity::Error => ("error: ", Color::Red),
    }
}

pub fn severity_color(severity: Severity) -> Color {
    severity_style(severity).1
}

/// Render `message` if there is one, otherwise `help` in gray.
pub fn render_status_bar(f: &mut Frame<'_>, area: Rect, message: Option<(&str, Severity)>, help: &str) {
    let bar = match message {
        Some((text, severity)) => {
            Paragraph::new(text.to_string()).style(Style::default().fg(severity_color(severity)))
        }
        None => Paragraph::new(help.to_string()).style(Style::default().fg(Color::DarkGray)),
    };
    f.render_widget(bar, area);
}
