//! Key binding help overlay.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Clear, Paragraph, Widget},
};

use crate::theme::styles;

const BINDINGS: &[(&str, &str)] = &[
    ("j / Down", "select next atom"),
    ("k / Up", "select previous atom"),
    ("g / Home", "jump to first atom"),
    ("G / End", "jump to last atom"),
    ("PgUp / PgDn", "jump ten atoms"),
    ("/", "filter atoms by label"),
    ("Enter", "confirm filter"),
    ("Esc", "dismiss error / clear filter"),
    ("p", "toggle nested atom parsing"),
    ("r", "reload snapshot"),
    ("?", "show this help"),
    ("q / Ctrl-c", "quit"),
];

/// Centered popup listing every key binding.
pub struct HelpOverlay;

impl Widget for HelpOverlay {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let width = 46.min(area.width.saturating_sub(4));
        let height = (BINDINGS.len() as u16 + 4).min(area.height.saturating_sub(2));
        if width == 0 || height == 0 {
            return;
        }

        let x = area.x + (area.width.saturating_sub(width)) / 2;
        let y = area.y + (area.height.saturating_sub(height)) / 2;
        let popup_area = Rect::new(x, y, width, height);

        Clear.render(popup_area, buf);

        let block = styles::modal_block(" Help ");
        let inner = block.inner(popup_area);
        block.render(popup_area, buf);

        let mut lines = Vec::with_capacity(BINDINGS.len() + 2);
        for (key, action) in BINDINGS {
            lines.push(Line::from(vec![
                Span::styled(format!("{key:>12}"), styles::keybinding()),
                Span::styled(format!("  {action}"), styles::text_primary()),
            ]));
        }
        lines.push(Line::raw(""));
        lines.push(
            Line::from(Span::styled(
                "press any key to close",
                styles::text_muted(),
            ))
            .alignment(Alignment::Center),
        );

        Paragraph::new(lines).render(inner, buf);
    }
}
