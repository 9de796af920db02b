// src/fs/mod.rs
//! Filesystem module - path resolution, directory listing and entry kinds.

pub mod browser;
pub mod detection;
pub mod local;
pub mod resolver;

// Re-export commonly used types
pub use browser::{DirectoryLister, PathEntry, SHORTCUT_COUNT, absolutize, tail_path};
pub use detection::EntryKind;
pub use local::LocalFs;
pub use resolver::PathResolver;
