//! Recording host and scripted fetcher shared by the integration tests.

#![allow(dead_code)]

use std::{
    collections::VecDeque,
    io,
    path::{Path, PathBuf},
    sync::Mutex,
    time::Duration,
};

use anyhow::anyhow;
use async_trait::async_trait;
use quickopen::{
    DownloadError,
    download::Fetch,
    fs::PathEntry,
    host::{Host, ProgressObserver, Severity},
};

/// Answer given to one selection prompt.
#[derive(Debug, Clone)]
pub enum Pick {
    Label(&'static str),
    Cancel,
}

#[derive(Default)]
pub struct FakeHost {
    pub picks: VecDeque<Pick>,
    pub typed: Option<String>,
    pub fail_open: bool,

    pub listings: Vec<(PathBuf, Vec<PathEntry>)>,
    pub prompts: Vec<String>,
    pub opened: Vec<PathBuf>,
    pub transients: Vec<(String, Severity)>,
    pub errors: Vec<String>,
    pub progress: Vec<(u64, Option<u64>)>,
}

impl FakeHost {
    pub fn with_picks(picks: impl IntoIterator<Item = Pick>) -> Self {
        Self {
            picks: picks.into_iter().collect(),
            ..Self::default()
        }
    }
}

#[async_trait]
impl Host for FakeHost {
    async fn pick(&mut self, dir: &Path, entries: &[PathEntry]) -> io::Result<Option<usize>> {
        self.listings.push((dir.to_path_buf(), entries.to_vec()));
        match self.picks.pop_front() {
            Some(Pick::Label(label)) => Ok(entries.iter().position(|e| e.label == label)),
            Some(Pick::Cancel) | None => Ok(None),
        }
    }

    async fn prompt_text(&mut self, message: &str) -> io::Result<Option<String>> {
        self.prompts.push(message.to_string());
        Ok(self.typed.take())
    }

    async fn open_document(&mut self, path: &Path) -> anyhow::Result<()> {
        self.opened.push(path.to_path_buf());
        if self.fail_open {
            return Err(anyhow!("editor crashed"));
        }
        Ok(())
    }

    fn show_transient(&mut self, text: &str, severity: Severity, _hide_after: Duration) {
        self.transients.push((text.to_string(), severity));
    }

    fn show_error(&mut self, text: &str) {
        self.errors.push(text.to_string());
    }
}

impl ProgressObserver for FakeHost {
    fn on_progress(&mut self, bytes_read: u64, total: Option<u64>) {
        self.progress.push((bytes_read, total));
    }
}

/// Fetcher that writes `body` to a file in `dir`, or fails when `dir` is
/// `None`.
pub struct FakeFetcher {
    pub dir: Option<PathBuf>,
    pub body: Vec<u8>,
    pub requested: Mutex<Vec<String>>,
}

impl FakeFetcher {
    pub fn writing_to(dir: &Path, body: &[u8]) -> Self {
        Self {
            dir: Some(dir.to_path_buf()),
            body: body.to_vec(),
            requested: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            dir: None,
            body: Vec::new(),
            requested: Mutex::new(Vec::new()),
        }
    }

    pub fn requested(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait]
impl Fetch for FakeFetcher {
    async fn fetch(
        &self,
        url: &str,
        progress: &mut dyn ProgressObserver,
    ) -> Result<PathBuf, DownloadError> {
        self.requested.lock().unwrap().push(url.to_string());
        let Some(dir) = &self.dir else {
            return Err(DownloadError::Status {
                url: url.to_string(),
                status: reqwest::StatusCode::NOT_FOUND,
            });
        };
        let ext = quickopen::download::url_extension(url);
        let path = dir.join(quickopen::download::temp_file_name(ext.as_deref()));
        std::fs::write(&path, &self.body).map_err(|source| DownloadError::Io {
            path: path.clone(),
            source,
        })?;
        let len = self.body.len() as u64;
        progress.on_progress(len / 2, Some(len));
        progress.on_progress(len, Some(len));
        Ok(path)
    }
}
