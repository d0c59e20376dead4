//! Main update function - dispatches messages to handlers (TEA pattern)

use tracing::{debug, warn};

use crate::message::Message;
use crate::state::AppState;

use super::{keys, map_load_error, UpdateAction, UpdateResult};

/// Process a message and update state accordingly.
///
/// Returns follow-up actions for the event loop (background snapshot reloads).
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Key(key) => keys::handle_key(state, key),

        Message::Tick => UpdateResult::none(),

        Message::Quit => {
            state.request_quit();
            UpdateResult::none()
        }

        Message::SnapshotLoaded { snapshot } => {
            debug!(
                atoms = snapshot.atom_count(),
                "Snapshot loaded, rebuilding graph"
            );
            state.apply_snapshot(*snapshot);
            UpdateResult::none()
        }

        Message::SnapshotLoadFailed { error } => {
            warn!("Snapshot load failed: {error}");
            state.set_error(map_load_error(&error));
            UpdateResult::none()
        }

        Message::SnapshotFileChanged => {
            debug!("Snapshot file changed on disk, reloading");
            state.loading = true;
            UpdateResult::action(UpdateAction::ReloadSnapshot)
        }

        Message::WatcherError { message } => {
            warn!("Snapshot watcher error: {message}");
            // Watcher failures are non-fatal: the user can still reload manually.
            UpdateResult::none()
        }
    }
}
