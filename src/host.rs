// src/host.rs
//! Collaborators the navigator talks to: the filesystem and the UI host.

use std::{ffi::OsString, io, path::Path, time::Duration};

use async_trait::async_trait;

use crate::fs::{EntryKind, PathEntry};

/// Filesystem access used by the navigator and the directory lister.
#[async_trait]
pub trait FileSystem: Send + Sync {
    /// Classify `path`, following symlinks.
    async fn stat(&self, path: &Path) -> io::Result<EntryKind>;

    /// Names of the immediate children of `dir`.
    async fn read_dir(&self, dir: &Path) -> io::Result<Vec<OsString>>;
}

/// Severity of a message shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

/// Push-based download progress. May be called any number of times; `total`
/// is `None` when the size is unknown.
pub trait ProgressObserver: Send {
    fn on_progress(&mut self, bytes_read: u64, total: Option<u64>);
}

impl<F> ProgressObserver for F
where
    F: FnMut(u64, Option<u64>) + Send,
{
    fn on_progress(&mut self, bytes_read: u64, total: Option<u64>) {
        self(bytes_read, total)
    }
}

/// UI surface: selection, text input, document opening and messages.
#[async_trait]
pub trait Host: ProgressObserver {
    /// Present `entries` for `dir` and return the index of the chosen one,
    /// or `None` when the user cancelled.
    async fn pick(&mut self, dir: &Path, entries: &[PathEntry]) -> io::Result<Option<usize>>;

    /// Ask for a line of text; `None` when cancelled.
    async fn prompt_text(&mut self, message: &str) -> io::Result<Option<String>>;

    async fn open_document(&mut self, path: &Path) -> anyhow::Result<()>;

    /// Message that goes away on its own after `hide_after`.
    fn show_transient(&mut self, text: &str, severity: Severity, hide_after: Duration);

    fn show_error(&mut self, text: &str);
}
