//! Application state (Model in TEA pattern)

use std::path::PathBuf;

use chrono::{DateTime, Local};

use atomscope_core::{AtomGraph, AtomNode, AtomSnapshot, FormatMode, SearchState};

use crate::config::Settings;

/// Current UI mode/screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiMode {
    /// Normal panel: atom list + detail view
    #[default]
    Normal,

    /// Search input mode - capturing text for the atom list filter
    SearchInput,

    /// Key binding help overlay
    Help,
}

// ─────────────────────────────────────────────────────────────────────────────
// Display Options
// ─────────────────────────────────────────────────────────────────────────────

/// User-configurable display options for the detail panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DisplayOptions {
    /// Whether the "Parsed value" field resolves through nested atom
    /// references to their underlying values (deep-nested mode).
    pub parse_nested_atoms: bool,
}

impl DisplayOptions {
    /// The [`FormatMode`] the "Parsed value" field renders with.
    pub fn format_mode(&self) -> FormatMode {
        if self.parse_nested_atoms {
            FormatMode::DeepNested
        } else {
            FormatMode::Shallow
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// PanelError
// ─────────────────────────────────────────────────────────────────────────────

/// A user-friendly error with an actionable hint, shown in the status bar.
///
/// Created by [`crate::handler::map_load_error`] which maps raw error strings
/// to concise messages the TUI can display without leaking internals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelError {
    /// Short, human-readable description of the problem.
    pub message: String,
    /// Actionable guidance shown next to the message.
    pub hint: String,
}

impl PanelError {
    pub fn new(message: impl Into<String>, hint: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            hint: hint.into(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// AppState
// ─────────────────────────────────────────────────────────────────────────────

/// Complete application state.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Path to the snapshot file being inspected.
    pub snapshot_path: PathBuf,

    /// The loaded atom graph (empty until the first successful load).
    pub graph: AtomGraph,

    /// Current UI mode.
    pub ui_mode: UiMode,

    /// Atom list search filter.
    pub search: SearchState,

    /// Index of the selected atom within the *filtered* list.
    pub selected_index: usize,

    /// Display options (parsed-value mode).
    pub options: DisplayOptions,

    /// Error from the last failed snapshot load, if any.
    pub error: Option<PanelError>,

    /// Whether a snapshot reload is in flight.
    pub loading: bool,

    /// When the current graph was loaded.
    pub loaded_at: Option<DateTime<Local>>,

    /// Name the instrumented application registered, if any.
    pub app_name: Option<String>,

    should_quit: bool,
}

impl AppState {
    pub fn new(snapshot_path: PathBuf) -> Self {
        Self {
            snapshot_path,
            loading: true,
            ..Self::default()
        }
    }

    /// Create state with options derived from loaded settings.
    pub fn with_settings(snapshot_path: PathBuf, settings: &Settings) -> Self {
        let mut state = Self::new(snapshot_path);
        state.options.parse_nested_atoms = settings.display.parse_nested_atoms;
        state
    }

    // ── Quit handling ─────────────────────────────────────────────────────────

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    // ── Atom list ─────────────────────────────────────────────────────────────

    /// Atoms visible under the current search filter, in listing order.
    pub fn visible_atoms(&self) -> Vec<&AtomNode> {
        self.graph
            .nodes()
            .filter(|node| self.search.matches(node.display_name()))
            .collect()
    }

    /// The currently selected atom, if the filtered list is non-empty.
    pub fn selected_atom(&self) -> Option<&AtomNode> {
        self.visible_atoms().get(self.selected_index).copied()
    }

    /// Clamp the selection to the filtered list bounds.
    pub fn clamp_selection(&mut self) {
        let count = self.visible_atoms().len();
        if count == 0 {
            self.selected_index = 0;
        } else if self.selected_index >= count {
            self.selected_index = count - 1;
        }
    }

    pub fn select_previous(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    pub fn select_next(&mut self) {
        let count = self.visible_atoms().len();
        if self.selected_index + 1 < count {
            self.selected_index += 1;
        }
    }

    pub fn select_first(&mut self) {
        self.selected_index = 0;
    }

    pub fn select_last(&mut self) {
        self.selected_index = self.visible_atoms().len().saturating_sub(1);
    }

    pub fn select_page_up(&mut self, page: usize) {
        self.selected_index = self.selected_index.saturating_sub(page.max(1));
    }

    pub fn select_page_down(&mut self, page: usize) {
        let count = self.visible_atoms().len();
        if count == 0 {
            return;
        }
        self.selected_index = (self.selected_index + page.max(1)).min(count - 1);
    }

    // ── Snapshot application ──────────────────────────────────────────────────

    /// Replace the graph with a freshly loaded snapshot.
    ///
    /// Keeps the selection on the same atom id where it survived the reload,
    /// otherwise clamps to the new list bounds.
    pub fn apply_snapshot(&mut self, snapshot: AtomSnapshot) {
        let previously_selected = self.selected_atom().map(|node| node.id);

        self.app_name = snapshot.app_name.clone();
        self.graph = snapshot.into_graph();
        self.loaded_at = Some(Local::now());
        self.loading = false;
        self.error = None;

        if let Some(id) = previously_selected {
            if let Some(index) = self.visible_atoms().iter().position(|n| n.id == id) {
                self.selected_index = index;
                return;
            }
        }
        self.clamp_selection();
    }

    /// Record a failed snapshot load.
    pub fn set_error(&mut self, error: PanelError) {
        self.loading = false;
        self.error = Some(error);
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
