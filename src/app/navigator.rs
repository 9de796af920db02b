// src/app/navigator.rs
//! The resolve → stat → open-or-list loop.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::{
    error::{Error, Result},
    fs::{DirectoryLister, EntryKind, PathResolver},
    host::{FileSystem, Host},
};

/// How a navigation ended when it did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A regular file was handed to the host.
    Opened(PathBuf),
    /// The user dismissed a selection prompt.
    Cancelled,
    /// The path exists but is neither a file nor a directory; nothing was done.
    Unsupported(PathBuf),
}

/// Drives one navigation: a path goes in, and the loop keeps listing
/// directories until a file is opened, the user cancels, or an error occurs.
pub struct Navigator<'a, F: ?Sized, H: ?Sized> {
    fs: &'a F,
    host: &'a mut H,
    resolver: &'a PathResolver,
    annotate: bool,
}

impl<'a, F, H> Navigator<'a, F, H>
where
    F: FileSystem + ?Sized,
    H: Host + ?Sized,
{
    pub fn new(fs: &'a F, host: &'a mut H, resolver: &'a PathResolver) -> Self {
        Self {
            fs,
            host,
            resolver,
            annotate: false,
        }
    }

    /// Tag listed children File/Dir (one extra stat per child).
    pub fn annotate(mut self, annotate: bool) -> Self {
        self.annotate = annotate;
        self
    }

    /// Navigate from `candidate`, or from the fallback root when absent.
    ///
    /// Each selection feeds the chosen path back through the resolver, so
    /// deep traversals iterate rather than recurse.
    pub async fn run(&mut self, candidate: Option<&Path>) -> Result<Outcome> {
        let mut target = self.resolver.resolve(candidate);
        loop {
            debug!(path = %target.display(), "stat");
            let kind = self
                .fs
                .stat(&target)
                .await
                .map_err(|source| Error::PathNotFound {
                    path: target.clone(),
                    source,
                })?;

            match kind {
                EntryKind::File => {
                    info!(path = %target.display(), "opening document");
                    self.host
                        .open_document(&target)
                        .await
                        .map_err(|cause| Error::Open {
                            path: target.clone(),
                            cause,
                        })?;
                    return Ok(Outcome::Opened(target));
                }
                EntryKind::Directory => {
                    let entries = DirectoryLister::new(self.fs, self.resolver.home())
                        .annotate(self.annotate)
                        .list(&target)
                        .await?;
                    let choice = self
                        .host
                        .pick(&target, &entries)
                        .await
                        .map_err(Error::Prompt)?;
                    let Some(entry) = choice.and_then(|i| entries.get(i)) else {
                        debug!(path = %target.display(), "selection cancelled");
                        return Ok(Outcome::Cancelled);
                    };
                    target = self.resolver.resolve(Some(&entry.detail));
                }
                EntryKind::Other => {
                    debug!(path = %target.display(), "neither file nor directory, ignoring");
                    return Ok(Outcome::Unsupported(target));
                }
            }
        }
    }
}
