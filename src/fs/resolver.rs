// src/fs/resolver.rs
//! Expansion of user-supplied paths: defaults and `~` shorthand.

use std::path::{Path, PathBuf};

/// Fills in a missing path and expands a leading `~`.
///
/// No normalization, symlink resolution or existence check happens here;
/// that is left to the stat that follows.
#[derive(Debug, Clone)]
pub struct PathResolver {
    home: PathBuf,
    fallback: PathBuf,
}

impl PathResolver {
    pub fn new(home: impl Into<PathBuf>, fallback: impl Into<PathBuf>) -> Self {
        Self {
            home: home.into(),
            fallback: fallback.into(),
        }
    }

    pub fn home(&self) -> &Path {
        &self.home
    }

    pub fn fallback(&self) -> &Path {
        &self.fallback
    }

    /// Resolve `input`, substituting the fallback when it is absent or empty.
    pub fn resolve(&self, input: Option<&Path>) -> PathBuf {
        let path = match input {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => return self.fallback.clone(),
        };

        // `~user` is a different component and stays untouched
        match path.strip_prefix("~") {
            Ok(rest) if rest.as_os_str().is_empty() => self.home.clone(),
            Ok(rest) => self.home.join(rest),
            Err(_) => path.to_path_buf(),
        }
    }
}
