// src/app/commands.rs
//! The two user-facing commands: open interactively, and open a typed path
//! or URL.

use std::path::{Path, PathBuf};

use tracing::{error, warn};

use crate::{
    app::navigator::{Navigator, Outcome},
    config::Config,
    download::{Fetch, is_url},
    error::{Error, Result},
    fs::PathResolver,
    host::{FileSystem, Host, Severity},
};

/// Prompt shown by [`Session::open_typed`] when no path was given.
pub const TYPED_PATH_PROMPT: &str = "Path or URL to open";

/// Everything one command invocation needs. Errors are shown through the host
/// before being returned, so callers only need them for the exit status.
pub struct Session<'a, F: ?Sized, H, D: ?Sized> {
    config: &'a Config,
    resolver: PathResolver,
    fs: &'a F,
    host: &'a mut H,
    fetcher: &'a D,
}

impl<'a, F, H, D> Session<'a, F, H, D>
where
    F: FileSystem + ?Sized,
    H: Host,
    D: Fetch + ?Sized,
{
    pub fn new(config: &'a Config, fs: &'a F, host: &'a mut H, fetcher: &'a D) -> Self {
        Self {
            config,
            resolver: config.resolver(),
            fs,
            host,
            fetcher,
        }
    }

    /// Open `path` (the workspace root when absent): files are opened,
    /// directories listed for selection.
    pub async fn quick_open(&mut self, path: Option<&Path>) -> Result<Outcome> {
        let result = Navigator::new(self.fs, &mut *self.host, &self.resolver)
            .annotate(self.config.annotate_entries)
            .run(path)
            .await;
        if let Err(err) = &result {
            self.report(err);
        }
        result
    }

    /// Open a typed path or URL, prompting for one when `input` is absent.
    /// URLs are downloaded first; a failed download is only a warning and the
    /// original text is tried as a path instead.
    pub async fn open_typed(&mut self, input: Option<String>) -> Result<Outcome> {
        let input = match input.filter(|s| !s.is_empty()) {
            Some(input) => input,
            None => match self.host.prompt_text(TYPED_PATH_PROMPT).await {
                Ok(Some(text)) if !text.trim().is_empty() => text.trim().to_string(),
                Ok(_) => return Ok(Outcome::Cancelled),
                Err(source) => {
                    let err = Error::Prompt(source);
                    self.report(&err);
                    return Err(err);
                }
            },
        };

        let candidate = if is_url(&input) {
            self.download(&input)
                .await
                .unwrap_or_else(|| PathBuf::from(&input))
        } else {
            PathBuf::from(&input)
        };
        self.quick_open(Some(&candidate)).await
    }

    async fn download(&mut self, url: &str) -> Option<PathBuf> {
        let timeout = self.config.message_timeout;
        match self.fetcher.fetch(url, &mut *self.host).await {
            Ok(path) => {
                self.host
                    .show_transient(&format!("Downloaded {url}"), Severity::Info, timeout);
                Some(path)
            }
            Err(err) => {
                warn!(url, %err, "download failed, trying the text as a path");
                self.host.show_transient(
                    &format!("Download failed: {err}"),
                    Severity::Warning,
                    timeout,
                );
                None
            }
        }
    }

    fn report(&mut self, err: &Error) {
        error!(%err, "command failed");
        self.host.show_error(&err.to_string());
    }
}
