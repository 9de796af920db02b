// src/ui/tui.rs
//! Terminal implementation of the host: quick-pick, text prompt, messages
//! and the external editor.

use std::{
    io::{self, Stdout},
    path::Path,
    time::{Duration, Instant},
};

use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use crossterm::{
    event::{self, Event as CEvent, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    crossterm::style::{Color as StderrColor, Print, ResetColor, SetForegroundColor},
};
use tracing::debug;

use crate::{
    fs::{PathEntry, tail_path},
    host::{Host, ProgressObserver, Severity},
    ui::{
        keybindings::key_to_action,
        layout::compute_layout,
        picker::{InputState, PickerState, Step},
        progress::ProgressLine,
        widgets::{render_file_list, render_input_box, render_status_bar, severity_style},
    },
};

const TICK: Duration = Duration::from_millis(200);

const PICKER_HELP: &str = "type to filter · ↑/↓ move · Enter open · ← parent · Esc cancel";
const PROMPT_HELP: &str = "Enter confirm · Esc cancel";

/// A message that hides itself once `expires` has passed.
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub severity: Severity,
    pub expires: Instant,
}

impl StatusMessage {
    fn visible(&self) -> Option<(&str, Severity)> {
        (Instant::now() < self.expires).then_some((self.text.as_str(), self.severity))
    }
}

/// Host backed by the controlling terminal. Prompts take over the alternate
/// screen only while they are open; messages and progress go to stderr.
///
/// Prompts block inside `block_in_place`, so this must run on the
/// multi-threaded tokio runtime.
pub struct TerminalHost {
    editor: String,
    status: Option<StatusMessage>,
    progress: ProgressLine,
}

impl TerminalHost {
    pub fn new(editor: impl Into<String>) -> Self {
        Self {
            editor: editor.into(),
            status: None,
            progress: ProgressLine::default(),
        }
    }

    fn print_message(&mut self, text: &str, severity: Severity) {
        self.progress.finish();
        let (prefix, color) = severity_style(severity);
        let mut stderr = io::stderr();
        // commands and colors here come from ratatui's crossterm
        let _ = ratatui::crossterm::execute!(
            stderr,
            SetForegroundColor(StderrColor::from(color)),
            Print(format!("{prefix}{text}\n")),
            ResetColor
        );
    }
}

#[async_trait]
impl Host for TerminalHost {
    async fn pick(&mut self, dir: &Path, entries: &[PathEntry]) -> io::Result<Option<usize>> {
        self.progress.finish();
        let status = self.status.clone();
        tokio::task::block_in_place(|| run_picker(dir, entries, status.as_ref()))
    }

    async fn prompt_text(&mut self, message: &str) -> io::Result<Option<String>> {
        self.progress.finish();
        let status = self.status.clone();
        tokio::task::block_in_place(|| run_prompt(message, status.as_ref()))
    }

    async fn open_document(&mut self, path: &Path) -> Result<()> {
        self.progress.finish();
        let mut parts = self.editor.split_whitespace();
        let program = parts
            .next()
            .ok_or_else(|| anyhow!("no editor configured"))?;
        debug!(editor = %self.editor, path = %path.display(), "launching editor");

        let status = tokio::process::Command::new(program)
            .args(parts)
            .arg(path)
            .status()
            .await
            .with_context(|| format!("launching {} for {}", program, path.display()))?;
        if !status.success() {
            return Err(anyhow!(
                "{} exited with status {}",
                program,
                status
                    .code()
                    .map(|c| c.to_string())
                    .unwrap_or_else(|| "unknown".into())
            ));
        }
        Ok(())
    }

    fn show_transient(&mut self, text: &str, severity: Severity, hide_after: Duration) {
        self.print_message(text, severity);
        self.status = Some(StatusMessage {
            text: text.to_string(),
            severity,
            expires: Instant::now() + hide_after,
        });
    }

    fn show_error(&mut self, text: &str) {
        self.print_message(text, Severity::Error);
    }
}

impl ProgressObserver for TerminalHost {
    fn on_progress(&mut self, bytes_read: u64, total: Option<u64>) {
        self.progress.update(bytes_read, total);
    }
}

/// Raw mode plus alternate screen, undone on drop.
struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalSession {
    fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(Self { terminal })
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

fn run_picker(
    dir: &Path,
    entries: &[PathEntry],
    status: Option<&StatusMessage>,
) -> io::Result<Option<usize>> {
    let mut session = TerminalSession::enter()?;
    let mut state = PickerState::new(entries);
    let title = format!(" {}", tail_path(dir, 3));

    loop {
        session
            .terminal
            .draw(|f| draw_picker(f, &title, entries, &mut state, status))?;

        if event::poll(TICK)? {
            if let CEvent::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if let Step::Done(choice) = state.apply(key_to_action(&key)) {
                    return Ok(choice);
                }
            }
        }
    }
}

fn run_prompt(message: &str, status: Option<&StatusMessage>) -> io::Result<Option<String>> {
    let mut session = TerminalSession::enter()?;
    let mut input = InputState::default();

    loop {
        session
            .terminal
            .draw(|f| draw_prompt(f, message, &input, status))?;

        if event::poll(TICK)? {
            if let CEvent::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if let Step::Done(text) = input.apply(key_to_action(&key)) {
                    return Ok(text);
                }
            }
        }
    }
}

/// Draw the quick-pick screen.
pub fn draw_picker(
    f: &mut Frame<'_>,
    title: &str,
    entries: &[PathEntry],
    state: &mut PickerState,
    status: Option<&StatusMessage>,
) {
    let layout = compute_layout(f.area(), true);
    render_input_box(f, layout.input_area, title, state.filter());
    if let Some(list_area) = layout.list_area {
        let matches = state.matches().to_vec();
        render_file_list(f, list_area, "Entries", entries, &matches, &mut state.list);
    }
    render_status_bar(
        f,
        layout.status_area,
        status.and_then(StatusMessage::visible),
        PICKER_HELP,
    );
}

/// Draw the text prompt screen.
pub fn draw_prompt(
    f: &mut Frame<'_>,
    message: &str,
    input: &InputState,
    status: Option<&StatusMessage>,
) {
    let layout = compute_layout(f.area(), false);
    render_input_box(f, layout.input_area, message, &input.text);
    render_status_bar(
        f,
        layout.status_area,
        status.and_then(StatusMessage::visible),
        PROMPT_HELP,
    );
}
