// src/ui/mod.rs
//! UI module - terminal quick-pick, prompt, progress and messages.

pub mod icons;
pub mod keybindings;
pub mod layout;
pub mod picker;
pub mod progress;
pub mod tui;
pub mod widgets;

// Re-export the host implementation
pub use tui::TerminalHost;
