// src/ui/widgets/mod.rs
//! Custom widgets for the picker and prompt screens.

pub mod file_list;
pub mod input_box;
pub mod status_bar;

// Re-export widget rendering functions
pub use file_list::render_file_list;
pub use input_box::render_input_box;
pub use status_bar::{render_status_bar, severity_style};
