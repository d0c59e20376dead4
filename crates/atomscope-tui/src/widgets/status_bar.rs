//! Bottom status bar.
//!
//! Shows key hints on the left and snapshot provenance (app name, load
//! freshness) on the right. Errors take over the whole bar until dismissed.

use atomscope_app::{AppState, UiMode};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::styles;

pub struct StatusBar<'a> {
    state: &'a AppState,
}

impl<'a> StatusBar<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn hint_spans(&self) -> Vec<Span<'static>> {
        let hints: &[(&str, &str)] = match self.state.ui_mode {
            UiMode::Normal => &[
                ("q", "quit"),
                ("/", "search"),
                ("p", "parse nested"),
                ("r", "reload"),
                ("?", "help"),
            ],
            UiMode::SearchInput => &[("Enter", "confirm"), ("Esc", "cancel")],
            UiMode::Help => &[("any key", "close")],
        };

        let mut spans = Vec::new();
        for (i, (key, label)) in hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled("  ", styles::text_muted()));
            }
            spans.push(Span::styled((*key).to_string(), styles::keybinding()));
            spans.push(Span::styled(
                format!(" {label}"),
                styles::text_secondary(),
            ));
        }
        spans
    }

    fn provenance(&self) -> String {
        let mut parts = Vec::new();
        if let Some(ref name) = self.state.app_name {
            parts.push(name.clone());
        }
        if self.state.loading {
            parts.push("loading...".to_string());
        } else if let Some(loaded_at) = self.state.loaded_at {
            parts.push(format!("loaded {}", loaded_at.format("%H:%M:%S")));
        }
        if self.state.options.parse_nested_atoms {
            parts.push("deep".to_string());
        }
        parts.join(" | ")
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        if let Some(ref error) = self.state.error {
            let line = Line::from(vec![
                Span::styled(
                    format!(" {} ", error.message),
                    styles::status_red().add_modifier(Modifier::BOLD),
                ),
                Span::styled(error.hint.clone(), styles::text_secondary()),
            ]);
            Paragraph::new(line).render(area, buf);
            return;
        }

        let mut spans = vec![Span::raw(" ")];
        spans.extend(self.hint_spans());
        Paragraph::new(Line::from(spans)).render(area, buf);

        // Right-aligned provenance
        let provenance = self.provenance();
        if !provenance.is_empty() {
            let len = provenance.chars().count() as u16;
            if len + 1 < area.width {
                let x = area.right().saturating_sub(len + 1);
                buf.set_string(x, area.y, &provenance, styles::text_muted());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{buffer_text, sample_state};
    use atomscope_app::PanelError;

    #[test]
    fn test_status_bar_shows_hints_in_normal_mode() {
        let state = sample_state();
        let mut buf = Buffer::empty(Rect::new(0, 0, 80, 1));
        StatusBar::new(&state).render(Rect::new(0, 0, 80, 1), &mut buf);

        let text = buffer_text(&buf);
        assert!(text.contains("quit"), "got: {text:?}");
        assert!(text.contains("search"), "got: {text:?}");
        assert!(text.contains("reload"), "got: {text:?}");
    }

    #[test]
    fn test_status_bar_search_mode_hints() {
        let mut state = sample_state();
        state.ui_mode = UiMode::SearchInput;
        let mut buf = Buffer::empty(Rect::new(0, 0, 80, 1));
        StatusBar::new(&state).render(Rect::new(0, 0, 80, 1), &mut buf);

        let text = buffer_text(&buf);
        assert!(text.contains("confirm"), "got: {text:?}");
        assert!(text.contains("cancel"), "got: {text:?}");
    }

    #[test]
    fn test_status_bar_error_takes_over() {
        let mut state = sample_state();
        state.error = Some(PanelError {
            message: "Snapshot file not found".to_string(),
            hint: "Check the path and press 'r'".to_string(),
        });

        let mut buf = Buffer::empty(Rect::new(0, 0, 80, 1));
        StatusBar::new(&state).render(Rect::new(0, 0, 80, 1), &mut buf);

        let text = buffer_text(&buf);
        assert!(text.contains("Snapshot file not found"), "got: {text:?}");
        assert!(text.contains("press 'r'"), "got: {text:?}");
        assert!(!text.contains("quit"), "got: {text:?}");
    }

    #[test]
    fn test_status_bar_shows_app_name() {
        let mut state = sample_state();
        state.app_name = Some("todo-app".to_string());

        let mut buf = Buffer::empty(Rect::new(0, 0, 80, 1));
        StatusBar::new(&state).render(Rect::new(0, 0, 80, 1), &mut buf);

        let text = buffer_text(&buf);
        assert!(text.contains("todo-app"), "got: {text:?}");
    }

    #[test]
    fn test_status_bar_shows_deep_indicator() {
        let mut state = sample_state();
        state.options.parse_nested_atoms = true;

        let mut buf = Buffer::empty(Rect::new(0, 0, 80, 1));
        StatusBar::new(&state).render(Rect::new(0, 0, 80, 1), &mut buf);

        let text = buffer_text(&buf);
        assert!(text.contains("deep"), "got: {text:?}");
    }

    #[test]
    fn test_status_bar_loading_indicator() {
        let mut state = sample_state();
        state.loading = true;

        let mut buf = Buffer::empty(Rect::new(0, 0, 80, 1));
        StatusBar::new(&state).render(Rect::new(0, 0, 80, 1), &mut buf);

        let text = buffer_text(&buf);
        assert!(text.contains("loading..."), "got: {text:?}");
    }

    #[test]
    fn test_status_bar_zero_area_no_panic() {
        let state = sample_state();
        let mut buf = Buffer::empty(Rect::new(0, 0, 0, 0));
        StatusBar::new(&state).render(Rect::new(0, 0, 0, 0), &mut buf);
    }
}
