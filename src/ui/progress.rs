// src/ui/progress.rs
//! Download progress line on stderr.

use std::{
    io::{self, Write},
    time::{Duration, Instant},
};

use crossterm::{
    execute,
    terminal::{Clear, ClearType},
};

/// Minimum time between two redraws.
const MIN_REDRAW: Duration = Duration::from_millis(100);

/// Rewrites a single stderr line as progress arrives. Calls may come at any
/// rate and the byte count may jump around; only the latest value is drawn.
#[derive(Debug, Default)]
pub struct ProgressLine {
    last_draw: Option<Instant>,
}

impl ProgressLine {
    pub fn update(&mut self, bytes_read: u64, total: Option<u64>) {
        let complete = total.is_some_and(|t| bytes_read >= t);
        if !complete && self.last_draw.is_some_and(|t| t.elapsed() < MIN_REDRAW) {
            return;
        }
        self.last_draw = Some(Instant::now());

        let mut stderr = io::stderr();
        let _ = execute!(stderr, Clear(ClearType::CurrentLine));
        let _ = write!(stderr, "\r{}", format_progress(bytes_read, total));
        let _ = stderr.flush();
    }

    /// End the progress line so later output starts on a fresh one.
    pub fn finish(&mut self) {
        if self.last_draw.take().is_some() {
            eprintln!();
        }
    }
}

pub fn format_progress(bytes_read: u64, total: Option<u64>) -> String {
    match total {
        Some(total) if total > 0 => {
            let percent = (bytes_read.saturating_mul(100) / total).min(100);
            format!(
                "Downloading {} / {} ({}%)",
                human_bytes(bytes_read),
                human_bytes(total),
                percent
            )
        }
        _ => format!("Downloading {}", human_bytes(bytes_read)),
    }
}

pub fn human_bytes(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["KiB", "MiB", "GiB", "TiB"];
    if bytes < 1024 {
        return format!("{} B", bytes);
    }
    let mut value = bytes as f64 / 1024.0;
    let mut unit = 0;
    while value >= 1024.0 && unit + 1 < UNITS.len() {
        value /= 1024.0;
        unit += 1;
    }
    format!("{:.1} {}", value, UNITS[unit])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn byte_units() {
        assert_eq!(human_bytes(0), "0 B");
        assert_eq!(human_bytes(1023), "1023 B");
        assert_eq!(human_bytes(1536), "1.5 KiB");
        assert_eq!(human_bytes(3 * 1024 * 1024), "3.0 MiB");
    }

    #[test]
    fn known_total_shows_percent() {
        assert_eq!(format_progress(512, Some(1024)), "Downloading 512 B / 1.0 KiB (50%)");
    }

    #[test]
    fn overshoot_is_capped() {
        assert!(format_progress(4096, Some(1024)).ends_with("(100%)"));
    }

    #[test]
    fn unknown_total() {
        assert_eq!(format_progress(2048, None), "Downloading 2.0 KiB");
        assert_eq!(format_progress(10, Some(0)), "Downloading 10 B");
    }
}
