// src/config/mod.rs
//! Process-wide settings, resolved once at start-up and read-only afterwards.

use std::{
    env,
    path::{Path, PathBuf},
    time::Duration,
};

use crate::fs::PathResolver;

/// Editor used when neither `VISUAL` nor `EDITOR` is set.
pub const DEFAULT_EDITOR: &str = "vi";

/// How long transient messages stay visible.
pub const DEFAULT_MESSAGE_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Clone)]
pub struct Config {
    /// Workspace root; the path used when none is given.
    pub root: PathBuf,
    /// Target of `~` expansion and of the home shortcut.
    pub home: PathBuf,
    /// Where downloads are written.
    pub temp_dir: PathBuf,
    /// Stat every child of a listing to tag it File/Dir.
    pub annotate_entries: bool,
    /// Command that opens a document, split on whitespace.
    pub editor: String,
    pub message_timeout: Duration,
}

impl Config {
    /// Settings derived from the environment alone.
    pub fn detect() -> Self {
        let root = env::current_dir().unwrap_or_else(|_| PathBuf::from("/"));
        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("/"));
        Self {
            root,
            home,
            temp_dir: env::temp_dir(),
            annotate_entries: false,
            editor: default_editor(),
            message_timeout: DEFAULT_MESSAGE_TIMEOUT,
        }
    }

    pub fn with_root(mut self, root: impl AsRef<Path>) -> Self {
        self.root = root.as_ref().to_path_buf();
        self
    }

    pub fn resolver(&self) -> PathResolver {
        PathResolver::new(&self.home, &self.root)
    }
}

fn default_editor() -> String {
    env::var("VISUAL")
        .or_else(|_| env::var("EDITOR"))
        .ok()
        .filter(|e| !e.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_EDITOR.to_string())
}
