// src/app/mod.rs
//! Application module - the navigation loop and the commands built on it.

pub mod commands;
pub mod navigator;

// Re-export the entry points
pub use commands::Session;
pub use navigator::{Navigator, Outcome};
