//! Message types for the application (TEA pattern)

use atomscope_core::AtomSnapshot;

use crate::input_key::InputKey;

/// All possible messages/events in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates (freshness display)
    Tick,

    /// Request to quit
    Quit,

    // ─────────────────────────────────────────────────────────
    // Snapshot Messages
    // ─────────────────────────────────────────────────────────
    /// A snapshot load completed (initial load or watcher-triggered reload)
    SnapshotLoaded { snapshot: Box<AtomSnapshot> },

    /// A snapshot load failed
    SnapshotLoadFailed { error: String },

    // ─────────────────────────────────────────────────────────
    // Watcher Messages
    // ─────────────────────────────────────────────────────────
    /// The snapshot file changed on disk (debounced)
    SnapshotFileChanged,

    /// Watcher error occurred
    WatcherError { message: String },
}
