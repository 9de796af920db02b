// src/download.rs
//! Fetching a URL to a uniquely named temporary file.

use std::{
    io,
    path::{Path, PathBuf},
};

use async_trait::async_trait;
use futures_util::StreamExt;
use rand::Rng;
use reqwest::{Client, Response, header::CONTENT_TYPE};
use tokio::{
    fs::{File, OpenOptions},
    io::{AsyncWriteExt, BufWriter},
};
use tracing::{debug, info};
use url::Url;

use crate::{error::DownloadError, host::ProgressObserver};

/// Length of the random part of a temporary file name.
pub const TEMP_NAME_LEN: usize = 20;

/// Fresh names drawn before giving up on an exclusive create.
pub const TEMP_NAME_ATTEMPTS: usize = 8;

const NAME_CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// True for strings starting with `http://` or `https://`, scheme compared
/// without regard to case.
pub fn is_url(s: &str) -> bool {
    ["http://", "https://"].iter().any(|prefix| {
        s.get(..prefix.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
    })
}

/// Extension of the last path segment of `url`, ignoring query and fragment.
pub fn url_extension(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    let last = parsed.path_segments()?.next_back()?;
    let ext = Path::new(last).extension()?.to_str()?;
    Some(ext.to_string())
}

/// Random lowercase alphanumeric name with an optional extension.
pub fn temp_file_name(ext: Option<&str>) -> String {
    let mut rng = rand::thread_rng();
    let mut name: String = (0..TEMP_NAME_LEN)
        .map(|_| NAME_CHARSET[rng.gen_range(0..NAME_CHARSET.len())] as char)
        .collect();
    if let Some(ext) = ext {
        name.push('.');
        name.push_str(ext);
    }
    name
}

/// Create a new file in `dir`, drawing names from `next_name` until one does
/// not exist yet.
pub async fn create_unique_file<N>(dir: &Path, mut next_name: N) -> Result<(PathBuf, File), DownloadError>
where
    N: FnMut() -> String + Send,
{
    for _ in 0..TEMP_NAME_ATTEMPTS {
        let path = dir.join(next_name());
        match OpenOptions::new().write(true).create_new(true).open(&path).await {
            Ok(file) => return Ok((path, file)),
            Err(err) if err.kind() == io::ErrorKind::AlreadyExists => {
                debug!(path = %path.display(), "temporary name taken, drawing another");
            }
            Err(source) => return Err(DownloadError::Io { path, source }),
        }
    }
    Err(DownloadError::TempName {
        attempts: TEMP_NAME_ATTEMPTS,
    })
}

/// Anything that can turn a URL into a local file.
#[async_trait]
pub trait Fetch: Send + Sync {
    async fn fetch(
        &self,
        url: &str,
        progress: &mut dyn ProgressObserver,
    ) -> Result<PathBuf, DownloadError>;
}

/// HTTP(S) downloader writing into a temp directory. The caller owns the
/// resulting files; nothing is cleaned up after a successful download.
#[derive(Debug, Clone)]
pub struct Downloader {
    client: Client,
    temp_dir: PathBuf,
}

impl Downloader {
    pub fn new(temp_dir: impl Into<PathBuf>) -> reqwest::Result<Self> {
        let client = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self::with_client(client, temp_dir))
    }

    pub fn with_client(client: Client, temp_dir: impl Into<PathBuf>) -> Self {
        Self {
            client,
            temp_dir: temp_dir.into(),
        }
    }
}

#[async_trait]
impl Fetch for Downloader {
    async fn fetch(
        &self,
        url: &str,
        progress: &mut dyn ProgressObserver,
    ) -> Result<PathBuf, DownloadError> {
        let request_error = |source| DownloadError::Request {
            url: url.to_string(),
            source,
        };

        let response = self.client.get(url).send().await.map_err(request_error)?;
        let status = response.status();
        if !status.is_success() {
            return Err(DownloadError::Status {
                url: url.to_string(),
                status,
            });
        }

        let ext = url_extension(url).or_else(|| content_type_extension(&response));
        let (path, file) =
            create_unique_file(&self.temp_dir, || temp_file_name(ext.as_deref())).await?;
        debug!(url, path = %path.display(), "downloading");

        match write_body(response, file, &path, progress).await {
            Ok(bytes) => {
                info!(url, path = %path.display(), bytes, "download complete");
                Ok(path)
            }
            Err(err) => {
                // leave nothing half-written behind
                let _ = tokio::fs::remove_file(&path).await;
                Err(err)
            }
        }
    }
}

fn content_type_extension(response: &Response) -> Option<String> {
    let value = response.headers().get(CONTENT_TYPE)?.to_str().ok()?;
    mime_extension(value)
}

/// Types whose usual extension is neither their subtype nor first in
/// mime_guess's list.
const PREFERRED_EXTENSIONS: &[(&str, &str)] = &[
    ("text/plain", "txt"),
    ("text/markdown", "md"),
    ("text/javascript", "js"),
];

/// File extension for a `Content-Type` value. Prefers a known common
/// extension, then one equal to the subtype, then one that maps back to the
/// same type. Opaque binary types get none.
pub fn mime_extension(content_type: &str) -> Option<String> {
    let essence = content_type.split(';').next()?.trim().to_ascii_lowercase();
    if essence == "application/octet-stream" {
        return None;
    }
    if let Some((_, ext)) = PREFERRED_EXTENSIONS.iter().find(|(mime, _)| *mime == essence) {
        return Some(ext.to_string());
    }

    let exts = mime_guess::get_mime_extensions_str(&essence)?;
    let subtype = essence.split_once('/')?.1;
    exts.iter()
        .find(|ext| **ext == subtype)
        .or_else(|| {
            exts.iter().find(|ext| {
                mime_guess::from_ext(ext)
                    .first()
                    .is_some_and(|mime| mime.essence_str() == essence)
            })
        })
        .map(|ext| ext.to_string())
}

async fn write_body(
    response: Response,
    file: File,
    path: &Path,
    progress: &mut dyn ProgressObserver,
) -> Result<u64, DownloadError> {
    let url = response.url().to_string();
    let total = response.content_length();
    let io_error = |source| DownloadError::Io {
        path: path.to_path_buf(),
        source,
    };

    let mut stream = response.bytes_stream();
    let mut writer = BufWriter::new(file);
    let mut read = 0u64;
    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(|source| DownloadError::Request {
            url: url.clone(),
            source,
        })?;
        writer.write_all(&chunk).await.map_err(io_error)?;
        read += chunk.len() as u64;
        progress.on_progress(read, total);
    }
    writer.flush().await.map_err(io_error)?;
    Ok(read)
}
