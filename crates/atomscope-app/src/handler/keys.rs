//! Key event handlers for UI modes

use atomscope_core::AtomId;

use crate::input_key::InputKey;
use crate::state::{AppState, UiMode};

use super::{UpdateAction, UpdateResult};

/// Number of rows a PageUp/PageDown jump moves the selection by.
const PAGE_JUMP: usize = 10;

/// Dispatch a key event according to the current UI mode.
pub fn handle_key(state: &mut AppState, key: InputKey) -> UpdateResult {
    match state.ui_mode {
        UiMode::Normal => handle_normal_key(state, key),
        UiMode::SearchInput => handle_search_key(state, key),
        UiMode::Help => handle_help_key(state, key),
    }
}

/// Keys in the normal atom-list mode.
fn handle_normal_key(state: &mut AppState, key: InputKey) -> UpdateResult {
    match key {
        InputKey::Char('q') | InputKey::CharCtrl('c') => {
            state.request_quit();
        }

        // Navigation
        InputKey::Up | InputKey::Char('k') => state.select_previous(),
        InputKey::Down | InputKey::Char('j') => state.select_next(),
        InputKey::Home | InputKey::Char('g') => state.select_first(),
        InputKey::End | InputKey::Char('G') => state.select_last(),
        InputKey::PageUp => state.select_page_up(PAGE_JUMP),
        InputKey::PageDown => state.select_page_down(PAGE_JUMP),

        // Search
        InputKey::Char('/') => {
            state.search.activate();
            state.ui_mode = UiMode::SearchInput;
        }

        // Toggle deep-nested parsing of the "Parsed value" field
        InputKey::Char('p') => {
            state.options.parse_nested_atoms = !state.options.parse_nested_atoms;
        }

        // Manual reload
        InputKey::Char('r') => {
            state.loading = true;
            return UpdateResult::action(UpdateAction::ReloadSnapshot);
        }

        // Help overlay
        InputKey::Char('?') => {
            state.ui_mode = UiMode::Help;
        }

        // Esc dismisses an error first, then an active filter
        InputKey::Esc => {
            if state.error.is_some() {
                state.error = None;
            } else if state.search.is_filtering() {
                state.search.clear();
                state.clamp_selection();
            }
        }

        _ => {}
    }
    UpdateResult::none()
}

/// Keys while the search input is capturing text.
fn handle_search_key(state: &mut AppState, key: InputKey) -> UpdateResult {
    match key {
        // Esc cancels the search entirely
        InputKey::Esc => {
            state.search.clear();
            state.ui_mode = UiMode::Normal;
            state.clamp_selection();
        }

        // Enter accepts the query as the active filter
        InputKey::Enter => {
            state.search.deactivate();
            state.ui_mode = UiMode::Normal;
        }

        InputKey::Backspace => {
            let previous = state.selected_atom().map(|node| node.id);
            state.search.pop_char();
            retain_selection(state, previous);
        }

        InputKey::Char(c) => {
            let previous = state.selected_atom().map(|node| node.id);
            state.search.push_char(c);
            retain_selection(state, previous);
        }

        InputKey::CharCtrl('c') => {
            state.request_quit();
        }

        _ => {}
    }
    UpdateResult::none()
}

/// Any key leaves the help overlay.
fn handle_help_key(state: &mut AppState, _key: InputKey) -> UpdateResult {
    state.ui_mode = UiMode::Normal;
    UpdateResult::none()
}

/// After a filter edit, keep the selection on the atom that was selected
/// before the edit if it is still visible; otherwise fall back to clamping.
fn retain_selection(state: &mut AppState, previous: Option<AtomId>) {
    match previous {
        Some(id) => {
            if let Some(index) = state.visible_atoms().iter().position(|n| n.id == id) {
                state.selected_index = index;
            } else {
                state.clamp_selection();
            }
        }
        None => state.clamp_selection(),
    }
}
