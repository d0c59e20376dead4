//! Atom detail panel.
//!
//! Shows the selected atom's label, type, raw (shallow) value, parsed value
//! under the current display options, and the atoms that depend on it.

use atomscope_app::AppState;
use atomscope_core::{format_value, FormatMode};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    widgets::{Paragraph, Widget, Wrap},
};

use super::truncate_str;
use crate::theme::styles;

// ── DetailPanel ───────────────────────────────────────────────────────────────

/// Right-hand panel describing the currently selected atom.
///
/// Handles loading and empty states when no snapshot data is available.
pub struct DetailPanel<'a> {
    state: &'a AppState,
}

impl<'a> DetailPanel<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }
}

impl Widget for DetailPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::panel_block(" Details ", false).title_alignment(Alignment::Left);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        if self.state.loading && self.state.graph.is_empty() {
            self.render_loading(inner, buf);
        } else if self.state.graph.is_empty() {
            self.render_empty(inner, buf);
        } else if self.state.selected_atom().is_some() {
            self.render_atom(inner, buf);
        } else {
            self.render_no_selection(inner, buf);
        }
    }
}

impl DetailPanel<'_> {
    // ── Atom details ──────────────────────────────────────────────────────────

    fn render_atom(&self, inner: Rect, buf: &mut Buffer) {
        let Some(node) = self.state.selected_atom() else {
            return;
        };

        let max_w = inner.width.saturating_sub(2) as usize;
        let mut y = inner.y;

        // Label
        let label = truncate_str(node.display_name(), max_w);
        buf.set_string(inner.x + 1, y, &label, styles::accent_bold());
        y += 1;

        if y >= inner.bottom() {
            return;
        }
        let id_line = truncate_str(&format!("{}", node.id), max_w);
        buf.set_string(inner.x + 1, y, &id_line, styles::text_muted());
        y += 2;

        // Type
        y = self.render_field(inner, buf, y, "Type:", node.type_name());

        // Raw value: always shallow, so nested atom references stay abstract
        let raw = format_value(&node.value, FormatMode::Shallow, &self.state.graph);
        y = self.render_field(inner, buf, y, "Raw value:", &raw);

        // Parsed value: honors the parse-nested-atoms toggle
        let parsed = format_value(&node.value, self.state.options.format_mode(), &self.state.graph);
        y = self.render_field(inner, buf, y, "Parsed value:", &parsed);

        // Dependents
        if y >= inner.bottom() {
            return;
        }
        buf.set_string(inner.x + 1, y, "Dependents:", styles::status_yellow());
        y += 1;

        let dependents = self.state.graph.dependents_of(node.id);
        if dependents.is_empty() {
            if y < inner.bottom() {
                buf.set_string(inner.x + 1, y, "  (no dependents)", styles::text_muted());
            }
        } else {
            for dependent in dependents {
                if y >= inner.bottom() {
                    break;
                }
                let line = truncate_str(&format!("  {}", dependent.display_name()), max_w);
                buf.set_string(inner.x + 1, y, &line, styles::text_primary());
                y += 1;
            }
        }
    }

    /// Render a "Header:" row followed by an indented, wrapped value.
    ///
    /// Returns the y coordinate after the field (including one gap line).
    fn render_field(&self, inner: Rect, buf: &mut Buffer, mut y: u16, header: &str, value: &str) -> u16 {
        if y >= inner.bottom() {
            return y;
        }
        buf.set_string(inner.x + 1, y, header, styles::status_yellow());
        y += 1;

        if y >= inner.bottom() {
            return y;
        }
        let value_area = Rect {
            x: inner.x + 3,
            y,
            width: inner.width.saturating_sub(4).max(1),
            height: inner.bottom().saturating_sub(y),
        };
        // Wrapped height estimate by char count; Wrap breaks on words so the
        // real height can only be larger, which the area height caps anyway.
        let width = value_area.width as usize;
        let rows = (value.chars().count().max(1)).div_ceil(width) as u16;
        let shown = rows.min(value_area.height);
        let paragraph = Paragraph::new(value.to_string())
            .style(styles::text_primary())
            .wrap(Wrap { trim: false });
        paragraph.render(
            Rect {
                height: shown,
                ..value_area
            },
            buf,
        );
        y + shown + 1
    }

    // ── Loading / Empty states ────────────────────────────────────────────────

    fn render_loading(&self, inner: Rect, buf: &mut Buffer) {
        self.render_centered(inner, buf, "Loading snapshot...");
    }

    fn render_empty(&self, inner: Rect, buf: &mut Buffer) {
        self.render_centered(inner, buf, "No snapshot loaded - press 'r' to reload");
    }

    fn render_no_selection(&self, inner: Rect, buf: &mut Buffer) {
        self.render_centered(inner, buf, "No atom selected");
    }

    fn render_centered(&self, inner: Rect, buf: &mut Buffer, message: &str) {
        let text = Paragraph::new(message)
            .style(styles::text_muted())
            .alignment(Alignment::Center);
        let y_offset = inner.height / 2;
        text.render(
            Rect {
                y: inner.y + y_offset,
                height: 1,
                ..inner
            },
            buf,
        );
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{buffer_text, sample_state};
    use atomscope_app::{AppState, InputKey, Message};

    #[test]
    fn test_detail_panel_shows_label_and_type() {
        let state = sample_state();
        let mut buf = Buffer::empty(Rect::new(0, 0, 60, 24));
        DetailPanel::new(&state).render(Rect::new(0, 0, 60, 24), &mut buf);

        let text = buffer_text(&buf);
        assert!(text.contains("countAtom"), "got: {text:?}");
        assert!(text.contains("Type:"), "got: {text:?}");
        assert!(text.contains("number"), "got: {text:?}");
    }

    #[test]
    fn test_detail_panel_raw_value_keeps_placeholder() {
        let mut state = sample_state();
        // Select derivedAtom, whose value is an atom reference.
        atomscope_app::update(&mut state, Message::Key(InputKey::Down));
        assert_eq!(state.selected_atom().unwrap().display_name(), "derivedAtom");

        let mut buf = Buffer::empty(Rect::new(0, 0, 60, 24));
        DetailPanel::new(&state).render(Rect::new(0, 0, 60, 24), &mut buf);

        let text = buffer_text(&buf);
        assert!(text.contains("[atom]"), "got: {text:?}");
    }

    #[test]
    fn test_detail_panel_parsed_value_resolves_when_enabled() {
        let mut state = sample_state();
        state.options.parse_nested_atoms = true;
        atomscope_app::update(&mut state, Message::Key(InputKey::Down));

        let mut buf = Buffer::empty(Rect::new(0, 0, 60, 24));
        DetailPanel::new(&state).render(Rect::new(0, 0, 60, 24), &mut buf);

        // derivedAtom references countAtom (42), so deep mode shows the number.
        let text = buffer_text(&buf);
        assert!(text.contains("42"), "got: {text:?}");
    }

    #[test]
    fn test_detail_panel_lists_dependents() {
        let state = sample_state();
        let mut buf = Buffer::empty(Rect::new(0, 0, 60, 24));
        DetailPanel::new(&state).render(Rect::new(0, 0, 60, 24), &mut buf);

        // countAtom is referenced by derivedAtom.
        let text = buffer_text(&buf);
        assert!(text.contains("Dependents:"), "got: {text:?}");
        assert!(text.contains("derivedAtom"), "got: {text:?}");
    }

    #[test]
    fn test_detail_panel_no_dependents_placeholder() {
        let mut state = sample_state();
        atomscope_app::update(&mut state, Message::Key(InputKey::End));

        let mut buf = Buffer::empty(Rect::new(0, 0, 60, 24));
        DetailPanel::new(&state).render(Rect::new(0, 0, 60, 24), &mut buf);

        let text = buffer_text(&buf);
        assert!(text.contains("(no dependents)"), "got: {text:?}");
    }

    #[test]
    fn test_detail_panel_loading_state() {
        let mut state = AppState::new(std::path::PathBuf::from("atoms.json"));
        state.loading = true;

        let mut buf = Buffer::empty(Rect::new(0, 0, 60, 24));
        DetailPanel::new(&state).render(Rect::new(0, 0, 60, 24), &mut buf);

        let text = buffer_text(&buf);
        assert!(text.contains("Loading"), "got: {text:?}");
    }

    #[test]
    fn test_detail_panel_empty_state() {
        // A fresh state starts in loading; the empty state is what a finished
        // load of an empty graph leaves behind.
        let mut state = AppState::new(std::path::PathBuf::from("atoms.json"));
        state.loading = false;
        let mut buf = Buffer::empty(Rect::new(0, 0, 60, 24));
        DetailPanel::new(&state).render(Rect::new(0, 0, 60, 24), &mut buf);

        let text = buffer_text(&buf);
        assert!(text.contains("No snapshot loaded"), "got: {text:?}");
    }

    #[test]
    fn test_detail_panel_zero_area_no_panic() {
        let state = sample_state();
        let mut buf = Buffer::empty(Rect::new(0, 0, 10, 1));
        DetailPanel::new(&state).render(Rect::new(0, 0, 10, 1), &mut buf);
    }
}
