// src/lib.rs
//! quickopen - navigate the filesystem and open files from a quick-pick menu.
//!
//! The core (path resolution, directory listing, downloads and the
//! navigation loop) only talks to the outside world through the traits in
//! [`host`]; [`ui`] provides the terminal implementation.

pub mod app;
pub mod config;
pub mod download;
pub mod error;
pub mod fs;
pub mod host;
pub mod ui;

pub use app::{Outcome, Session};
pub use config::Config;
pub use error::{DownloadError, Error};
