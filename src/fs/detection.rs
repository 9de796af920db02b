// src/fs/detection.rs
//! Entry kind detection from filesystem metadata.

use std::{fmt, fs::Metadata};

/// What a path points at once symlinks are followed.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum EntryKind {
    File,
    Directory,
    /// Sockets, devices, fifos.
    Other,
}

impl EntryKind {
    pub fn from_metadata(meta: &Metadata) -> Self {
        if meta.is_file() {
            EntryKind::File
        } else if meta.is_dir() {
            EntryKind::Directory
        } else {
            EntryKind::Other
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            EntryKind::File => "File",
            EntryKind::Directory => "Dir",
            EntryKind::Other => "Other",
        };
        write!(f, "{}", s)
    }
}
