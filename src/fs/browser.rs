// src/fs/browser.rs
//! Directory listing for the quick-pick menu.

use std::{
    io,
    path::{Component, Path, PathBuf},
};

use tracing::debug;

use crate::{
    error::{Error, Result},
    host::FileSystem,
};

/// One selectable navigation target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathEntry {
    /// Text shown in the list (`/`, `..`, `~` or the child name).
    pub label: String,
    /// Short annotation shown next to the label.
    pub description: String,
    /// Absolute path the entry leads to.
    pub detail: PathBuf,
}

impl PathEntry {
    fn new(label: impl Into<String>, description: impl Into<String>, detail: PathBuf) -> Self {
        Self {
            label: label.into(),
            description: description.into(),
            detail,
        }
    }
}

/// Number of shortcut entries that precede the children of a listing.
pub const SHORTCUT_COUNT: usize = 3;

/// Produces the entries for a directory: root, parent, home, then children.
pub struct DirectoryLister<'a, F: ?Sized> {
    fs: &'a F,
    home: &'a Path,
    annotate: bool,
}

impl<'a, F: FileSystem + ?Sized> DirectoryLister<'a, F> {
    pub fn new(fs: &'a F, home: &'a Path) -> Self {
        Self {
            fs,
            home,
            annotate: false,
        }
    }

    /// Tag each child `(File)` or `(Dir)`. Costs one stat per child, so large
    /// directories list noticeably slower.
    pub fn annotate(mut self, annotate: bool) -> Self {
        self.annotate = annotate;
        self
    }

    /// List `dir`. Children keep the order the filesystem returned them in.
    pub async fn list(&self, dir: &Path) -> Result<Vec<PathEntry>> {
        let names = self.fs.read_dir(dir).await.map_err(|source| Error::Filesystem {
            path: dir.to_path_buf(),
            source,
        })?;
        let dir = absolutize(dir).map_err(|source| Error::Filesystem {
            path: dir.to_path_buf(),
            source,
        })?;
        debug!(dir = %dir.display(), children = names.len(), "listing directory");

        let parent = dir.parent().map(Path::to_path_buf).unwrap_or_else(|| dir.clone());
        let mut entries = Vec::with_capacity(SHORTCUT_COUNT + names.len());
        entries.push(PathEntry::new("/", "Root Directory", PathBuf::from("/")));
        entries.push(PathEntry::new("..", "Parent Directory", parent));
        entries.push(PathEntry::new("~", "Home Directory", self.home.to_path_buf()));

        for name in names {
            let path = dir.join(&name);
            let description = if self.annotate {
                match self.fs.stat(&path).await {
                    Ok(kind) => format!("({})", kind),
                    Err(err) => {
                        debug!(path = %path.display(), %err, "stat failed while annotating");
                        String::new()
                    }
                }
            } else {
                String::new()
            };
            entries.push(PathEntry::new(
                name.to_string_lossy(),
                description,
                path,
            ));
        }
        Ok(entries)
    }
}

/// Make `path` absolute against the current directory and fold `.` and `..`
/// lexically. Symlinks are not resolved.
pub fn absolutize(path: &Path) -> io::Result<PathBuf> {
    let absolute = std::path::absolute(path)?;
    let mut out = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                // popping past the root is a no-op, as `/..` is `/`
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    Ok(out)
}

/// Return the last `n` components of a path, prefixed with "…/" when
/// anything was cut off.
pub fn tail_path(path: &Path, n: usize) -> String {
    let parts: Vec<_> = path
        .components()
        .filter_map(|c| match c {
            Component::Normal(s) => Some(s.to_string_lossy()),
            _ => None,
        })
        .collect();
    if parts.len() <= n {
        return path.display().to_string();
    }
    format!("…/{}", parts[parts.len() - n..].join("/"))
}
