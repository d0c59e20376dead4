//! Search input prompt widget

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use atomscope_core::SearchState;

use crate::theme::styles;

/// Inline search prompt rendered at the top of the atom list.
pub struct SearchInput<'a> {
    search_state: &'a SearchState,
}

impl<'a> SearchInput<'a> {
    pub fn new(search_state: &'a SearchState) -> Self {
        Self { search_state }
    }
}

impl Widget for SearchInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Format: "/query_" while capturing, "/query" once confirmed
        let mut spans = vec![
            Span::styled("/", styles::keybinding()),
            Span::styled(self.search_state.query.as_str(), styles::text_primary()),
        ];

        if self.search_state.is_active {
            spans.push(Span::styled("_", styles::status_yellow()));
        }

        let line = Line::from(spans);
        Paragraph::new(line).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_text;

    fn make_search_state(query: &str, active: bool) -> SearchState {
        let mut state = SearchState::default();
        state.is_active = active;
        for c in query.chars() {
            state.push_char(c);
        }
        state
    }

    #[test]
    fn test_search_input_shows_query_and_cursor() {
        let state = make_search_state("count", true);
        let mut buf = Buffer::empty(Rect::new(0, 0, 30, 1));
        SearchInput::new(&state).render(Rect::new(0, 0, 30, 1), &mut buf);

        let text = buffer_text(&buf);
        assert!(text.contains("/count_"), "got: {text:?}");
    }

    #[test]
    fn test_search_input_no_cursor_when_inactive() {
        let state = make_search_state("count", false);
        let mut buf = Buffer::empty(Rect::new(0, 0, 30, 1));
        SearchInput::new(&state).render(Rect::new(0, 0, 30, 1), &mut buf);

        let text = buffer_text(&buf);
        assert!(text.contains("/count"), "got: {text:?}");
        assert!(!text.contains("/count_"), "got: {text:?}");
    }

    #[test]
    fn test_search_input_empty_query() {
        let state = make_search_state("", true);
        let mut buf = Buffer::empty(Rect::new(0, 0, 30, 1));
        SearchInput::new(&state).render(Rect::new(0, 0, 30, 1), &mut buf);

        let text = buffer_text(&buf);
        assert!(text.contains("/_"), "got: {text:?}");
    }
}
