// src/ui/keybindings.rs
//! Keyboard input handling and key mappings.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Actions available while a list or prompt is on screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NavigationAction {
    Up,
    Down,
    PageUp,
    PageDown,
    /// Take the highlighted entry (or the typed text).
    Accept,
    /// Step into the highlighted entry; lists only.
    Forward,
    /// Jump to the parent directory entry.
    Back,
    Cancel,
    Input(char),
    Backspace,
    None,
}

/// Convert a key event to a navigation action.
pub fn key_to_action(key: &KeyEvent) -> NavigationAction {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('g') => NavigationAction::Cancel,
            KeyCode::Char('n') => NavigationAction::Down,
            KeyCode::Char('p') => NavigationAction::Up,
            _ => NavigationAction::None,
        };
    }

    match key.code {
        KeyCode::Down => NavigationAction::Down,
        KeyCode::Up => NavigationAction::Up,
        KeyCode::PageDown => NavigationAction::PageDown,
        KeyCode::PageUp => NavigationAction::PageUp,
        KeyCode::Enter => NavigationAction::Accept,
        KeyCode::Right => NavigationAction::Forward,
        KeyCode::Left => NavigationAction::Back,
        KeyCode::Esc => NavigationAction::Cancel,
        KeyCode::Backspace => NavigationAction::Backspace,
        KeyCode::Char(c) => NavigationAction::Input(c),
        _ => NavigationAction::None,
    }
}
