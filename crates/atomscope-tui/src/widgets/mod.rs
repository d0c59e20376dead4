//! Custom widget components

mod atom_list;
mod detail_panel;
mod help_overlay;
mod search_input;
mod status_bar;

pub use atom_list::AtomList;
pub use detail_panel::DetailPanel;
pub use help_overlay::HelpOverlay;
pub use search_input::SearchInput;
pub use status_bar::StatusBar;

/// Truncate a string to at most `max_chars` characters (by char count, not bytes).
pub(crate) fn truncate_str(s: &str, max_chars: usize) -> String {
    if max_chars == 0 {
        return String::new();
    }
    let chars: Vec<char> = s.chars().collect();
    if chars.len() <= max_chars {
        s.to_string()
    } else {
        chars[..max_chars].iter().collect()
    }
}
