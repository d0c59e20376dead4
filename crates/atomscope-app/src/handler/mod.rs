//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers for UI modes

pub(crate) mod keys;
pub(crate) mod update;


// Re-export main entry point
pub use update::update;

use crate::state::PanelError;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateAction {
    /// Re-read and re-parse the snapshot file in the background
    ReloadSnapshot,
}

/// Result of an update: zero or more follow-up actions for the event loop.
#[derive(Debug, Clone, Default)]
pub struct UpdateResult {
    pub actions: Vec<UpdateAction>,
}

impl UpdateResult {
    /// No follow-up work.
    pub fn none() -> Self {
        Self::default()
    }

    /// A single follow-up action.
    pub fn action(action: UpdateAction) -> Self {
        Self {
            actions: vec![action],
        }
    }
}

/// Map a raw snapshot load error string to a user-friendly [`PanelError`].
///
/// The panel never shows raw serde/IO errors; every failure gets a concise
/// message plus an actionable hint.
pub fn map_load_error(raw: &str) -> PanelError {
    let lowered = raw.to_lowercase();
    if lowered.contains("not found") || lowered.contains("no such file") {
        PanelError::new(
            "Snapshot file is missing",
            "Check that the instrumented app is exporting to this path",
        )
    } else if lowered.contains("json") || lowered.contains("expected") || lowered.contains("eof") {
        PanelError::new(
            "Snapshot file is not valid JSON",
            "The export may have been caught mid-write; press [r] to retry",
        )
    } else {
        PanelError::new(
            "Failed to load snapshot",
            "Press [r] to retry; see the log file for details",
        )
    }
}
