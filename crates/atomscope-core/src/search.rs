//! Search/filter state for the atom list.
//!
//! Matching is a case-insensitive substring test over each atom's display
//! name (debug label or the unlabeled placeholder).

/// State of the atom list search filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchState {
    /// Whether the search input is currently capturing keystrokes.
    pub is_active: bool,

    /// The current query text. An empty query matches every atom.
    pub query: String,
}

impl SearchState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enter search input mode, keeping any existing query.
    pub fn activate(&mut self) {
        self.is_active = true;
    }

    /// Leave search input mode, keeping the query as the active filter.
    pub fn deactivate(&mut self) {
        self.is_active = false;
    }

    /// Leave search input mode and clear the filter.
    pub fn clear(&mut self) {
        self.is_active = false;
        self.query.clear();
    }

    /// Append a character to the query.
    pub fn push_char(&mut self, c: char) {
        self.query.push(c);
    }

    /// Remove the last character from the query.
    pub fn pop_char(&mut self) {
        self.query.pop();
    }

    /// Whether a filter is in effect (non-empty query).
    pub fn is_filtering(&self) -> bool {
        !self.query.is_empty()
    }

    /// Case-insensitive substring match against a display name.
    pub fn matches(&self, display_name: &str) -> bool {
        if self.query.is_empty() {
            return true;
        }
        display_name
            .to_lowercase()
            .contains(&self.query.to_lowercase())
    }
}
