//! Main render/view function (View in TEA pattern)

use atomscope_app::{AppState, UiMode};
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::theme::palette;
use crate::widgets;

/// Width threshold below which the detail panel is hidden.
const WIDE_TERMINAL_THRESHOLD: u16 = 70;

/// Percentage of horizontal space given to the atom list when wide.
const LIST_WIDTH_PCT: u16 = 40;

/// Percentage of horizontal space given to the detail panel when wide.
const DETAIL_WIDTH_PCT: u16 = 60;

/// Render the complete UI.
///
/// Pure rendering: reads state, writes the frame, never mutates state.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    // Fill entire terminal with the background color
    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let [main_area, status_area] =
        Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(area);

    render_main(frame, main_area, state);

    frame.render_widget(widgets::StatusBar::new(state), status_area);

    if state.ui_mode == UiMode::Help {
        frame.render_widget(widgets::HelpOverlay, area);
    }
}

fn render_main(frame: &mut Frame, area: Rect, state: &AppState) {
    // Horizontal split: list | details, details dropped on narrow terminals.
    if area.width >= WIDE_TERMINAL_THRESHOLD {
        let [list_area, detail_area] = Layout::horizontal([
            Constraint::Percentage(LIST_WIDTH_PCT),
            Constraint::Percentage(DETAIL_WIDTH_PCT),
        ])
        .areas(area);
        frame.render_widget(widgets::AtomList::new(state), list_area);
        frame.render_widget(widgets::DetailPanel::new(state), detail_area);
    } else {
        frame.render_widget(widgets::AtomList::new(state), area);
    }
}
