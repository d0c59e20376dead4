//! Atom list panel.
//!
//! Renders the sorted atom listing with the current selection highlighted
//! and the viewport scrolled to keep the selection visible.

use atomscope_app::{AppState, UiMode};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    widgets::Widget,
};

use super::truncate_str;
use crate::theme::{palette, styles};

// ── AtomList ──────────────────────────────────────────────────────────────────

/// Left-hand panel listing every atom in the snapshot, filtered by the
/// active search query.
pub struct AtomList<'a> {
    state: &'a AppState,
}

impl<'a> AtomList<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    /// Compute the viewport start/end indices that keep the selected row
    /// visible near the centre of the viewport.
    pub fn visible_viewport_range(
        &self,
        viewport_height: usize,
        total_items: usize,
    ) -> (usize, usize) {
        let selected = self.state.selected_index;
        let half = viewport_height / 2;
        let start = if selected > half {
            (selected - half).min(total_items.saturating_sub(viewport_height))
        } else {
            0
        };
        let end = (start + viewport_height).min(total_items);
        (start, end)
    }

    fn title(&self) -> String {
        let visible = self.state.visible_atoms().len();
        let total = self.state.graph.len();
        if self.state.search.is_filtering() {
            format!(" Atoms ({visible}/{total}) ")
        } else {
            format!(" Atoms ({total}) ")
        }
    }
}

impl Widget for AtomList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let focused = self.state.ui_mode == UiMode::Normal;
        let title = self.title();
        let block = styles::panel_block(&title, focused).title_alignment(Alignment::Left);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        // Reserve the top row for the inline search bar while searching.
        let (search_row, list_area) = if self.state.search.is_active {
            let search = Rect {
                height: 1,
                ..inner
            };
            let rest = Rect {
                y: inner.y + 1,
                height: inner.height.saturating_sub(1),
                ..inner
            };
            (Some(search), rest)
        } else {
            (None, inner)
        };

        if let Some(row) = search_row {
            super::SearchInput::new(&self.state.search).render(row, buf);
        }

        let visible = self.state.visible_atoms();
        if visible.is_empty() {
            let msg = if self.state.search.is_filtering() {
                "No atoms match"
            } else {
                "No atoms in snapshot"
            };
            if list_area.height > 0 {
                buf.set_string(list_area.x + 1, list_area.y, msg, styles::text_muted());
            }
            return;
        }

        let viewport_height = list_area.height as usize;
        let total = visible.len();
        let selected = self.state.selected_index;
        let (start, end) = self.visible_viewport_range(viewport_height, total);

        for (offset, node) in visible[start..end].iter().enumerate() {
            let y = list_area.y + offset as u16;
            if y >= list_area.bottom() {
                break;
            }

            let is_selected = start + offset == selected;
            let name = node.display_name();
            let type_name = node.type_name();
            let line = format!("{name}  [{type_name}]");

            if is_selected {
                let sel_bg = Style::default().bg(palette::SELECTED_ROW_BG);
                for x in list_area.x..list_area.right() {
                    if let Some(cell) = buf.cell_mut((x, y)) {
                        cell.set_style(sel_bg);
                    }
                }
            }

            let style = if is_selected {
                styles::accent_bold()
            } else {
                styles::text_primary()
            };

            let max_w = list_area.width as usize;
            let display_line = truncate_str(&line, max_w);
            buf.set_string(list_area.x, y, &display_line, style);
        }

        // Scroll indicator on the right edge when content overflows
        if total > viewport_height && viewport_height > 0 {
            let scroll_x = list_area.right().saturating_sub(1);
            let thumb_y = list_area.y
                + ((selected * viewport_height / total) as u16)
                    .min(list_area.height.saturating_sub(1));
            if thumb_y < list_area.bottom() {
                if let Some(cell) = buf.cell_mut((scroll_x, thumb_y)) {
                    cell.set_symbol("█").set_fg(palette::BORDER_DIM);
                }
            }
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
