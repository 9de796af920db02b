// src/ui/icons.rs
//! Icon mappings for entries in the picker.

use crate::fs::{PathEntry, SHORTCUT_COUNT};

/// Get the icon for the entry at `index` of a listing.
pub fn icon_for_entry(index: usize, entry: &PathEntry) -> &'static str {
    if index < SHORTCUT_COUNT {
        match entry.label.as_str() {
            "~" => "\u{f015}",  // home
            ".." => "\u{f062}", // arrow up
            _ => "\u{f0a0}",    // drive
        }
    } else {
        match entry.description.as_str() {
            "(Dir)" => "\u{f07b}",
            "(File)" => "\u{f15b}",
            _ => "\u{f016}",
        }
    }
}
