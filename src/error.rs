// src/error.rs
//! Error types for navigation and downloads.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Failure of one command invocation. Every variant is shown to the user and
/// ends the invocation; none is retried.
#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot read directory '{}': {source}", path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("no such file or directory '{}': {source}", path.display())]
    PathNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot open '{}': {cause:#}", path.display())]
    Open { path: PathBuf, cause: anyhow::Error },

    #[error("prompt failed: {0}")]
    Prompt(#[source] io::Error),
}

/// Failure while fetching a URL to a temporary file.
#[derive(Debug, Error)]
pub enum DownloadError {
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} answered with status {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("cannot write '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("no free temporary file name after {attempts} attempts")]
    TempName { attempts: usize },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
