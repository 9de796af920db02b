// src/fs/local.rs
//! Local disk implementation of the filesystem collaborator.

use std::{ffi::OsString, io, path::Path};

use async_trait::async_trait;

use crate::{fs::EntryKind, host::FileSystem};

/// Reads the local disk through `tokio::fs`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalFs;

#[async_trait]
impl FileSystem for LocalFs {
    async fn stat(&self, path: &Path) -> io::Result<EntryKind> {
        let meta = tokio::fs::metadata(path).await?;
        Ok(EntryKind::from_metadata(&meta))
    }

    /// Names come back in byte order so that listings are reproducible.
    async fn read_dir(&self, dir: &Path) -> io::Result<Vec<OsString>> {
        let mut rd = tokio::fs::read_dir(dir).await?;
        let mut names = Vec::new();
        while let Some(entry) = rd.next_entry().await? {
            names.push(entry.file_name());
        }
        names.sort();
        Ok(names)
    }
}
