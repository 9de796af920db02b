// src/ui/picker.rs
//! Selection and text-input state, kept apart from rendering.

use ratatui::widgets::ListState;

use crate::fs::PathEntry;
use crate::ui::keybindings::NavigationAction;

/// Rows moved by PageUp/PageDown.
const PAGE: usize = 10;

/// Result of feeding one action to a prompt.
#[derive(Debug, Clone, PartialEq)]
pub enum Step<T> {
    Continue,
    Done(Option<T>),
}

/// Quick-pick state: a filter string narrowing the entries by label, and a
/// highlighted row among the matches.
pub struct PickerState {
    labels: Vec<String>,
    parent_index: Option<usize>,
    filter: String,
    /// Indices into the entry list that match the filter
    matches: Vec<usize>,
    /// List widget state; the selection is a position in `matches`
    pub list: ListState,
}

impl PickerState {
    pub fn new(entries: &[PathEntry]) -> Self {
        let labels = entries.iter().map(|e| e.label.to_lowercase()).collect();
        let parent_index = entries.iter().position(|e| e.label == "..");
        let mut state = Self {
            labels,
            parent_index,
            filter: String::new(),
            matches: Vec::new(),
            list: ListState::default(),
        };
        state.refilter();
        state
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn matches(&self) -> &[usize] {
        &self.matches
    }

    /// Entry index of the highlighted row.
    pub fn selected(&self) -> Option<usize> {
        self.list.selected().and_then(|pos| self.matches.get(pos).copied())
    }

    pub fn apply(&mut self, action: NavigationAction) -> Step<usize> {
        match action {
            NavigationAction::Up => self.move_by(-1),
            NavigationAction::Down => self.move_by(1),
            NavigationAction::PageUp => self.move_by(-(PAGE as isize)),
            NavigationAction::PageDown => self.move_by(PAGE as isize),
            NavigationAction::Accept | NavigationAction::Forward => {
                // Enter on an empty match list does nothing
                if let Some(index) = self.selected() {
                    return Step::Done(Some(index));
                }
            }
            NavigationAction::Back => {
                if let Some(index) = self.parent_index {
                    return Step::Done(Some(index));
                }
            }
            NavigationAction::Cancel => return Step::Done(None),
            NavigationAction::Input(c) => {
                self.filter.push(c);
                self.refilter();
            }
            NavigationAction::Backspace => {
                if self.filter.pop().is_some() {
                    self.refilter();
                }
            }
            NavigationAction::None => {}
        }
        Step::Continue
    }

    fn move_by(&mut self, delta: isize) {
        if self.matches.is_empty() {
            return;
        }
        let last = self.matches.len() - 1;
        let current = self.list.selected().unwrap_or(0);
        let next = current.saturating_add_signed(delta).min(last);
        self.list.select(Some(next));
    }

    fn refilter(&mut self) {
        let needle = self.filter.to_lowercase();
        self.matches = self
            .labels
            .iter()
            .enumerate()
            .filter(|(_, label)| label.contains(&needle))
            .map(|(i, _)| i)
            .collect();
        self.list
            .select(if self.matches.is_empty() { None } else { Some(0) });
    }
}

/// Single-line text input.
#[derive(Debug, Default)]
pub struct InputState {
    pub text: String,
}

impl InputState {
    /// Only Enter submits; arrow keys are ignored.
    pub fn apply(&mut self, action: NavigationAction) -> Step<String> {
        match action {
            NavigationAction::Accept => return Step::Done(Some(self.text.clone())),
            NavigationAction::Cancel => return Step::Done(None),
            NavigationAction::Input(c) => self.text.push(c),
            NavigationAction::Backspace => {
                self.text.pop();
            }
            _ => {}
        }
        Step::Continue
    }
}
