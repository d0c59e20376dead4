//! # atomscope-tui - Terminal UI
//!
//! Renders the panel with ratatui and runs the main event loop: draw, poll
//! terminal events, drain the message channel, dispatch follow-up actions
//! (background snapshot loads).

pub mod event;
pub mod render;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub(crate) mod test_utils;

use std::path::{Path, PathBuf};

use tokio::sync::mpsc;

use atomscope_app::config::Settings;
use atomscope_app::watcher::{SnapshotWatcher, WatcherConfig};
use atomscope_app::{update, AppState, Message, UpdateAction};
use atomscope_core::prelude::*;
use atomscope_core::AtomSnapshot;

/// Run the panel against a snapshot file.
///
/// Owns the terminal for its whole lifetime; returns once the user quits.
pub async fn run(snapshot_path: &Path, settings: Settings) -> Result<()> {
    // Install panic hook for terminal restoration
    terminal::install_panic_hook();

    let mut term = ratatui::init();
    let mut state = AppState::with_settings(snapshot_path.to_path_buf(), &settings);

    // Unified message channel: watcher + background loads feed into it.
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);

    // Kick off the initial load in the background so the first frame renders
    // immediately with a loading state.
    spawn_snapshot_load(snapshot_path.to_path_buf(), msg_tx.clone());

    // Start the snapshot file watcher for live reloads
    let mut watcher = if settings.watcher.enabled {
        let mut watcher = SnapshotWatcher::new(
            snapshot_path.to_path_buf(),
            WatcherConfig::new().with_debounce_ms(settings.watcher.debounce_ms),
        );
        if let Err(e) = watcher.start(msg_tx.clone()) {
            warn!("Failed to start snapshot watcher: {e}");
        }
        Some(watcher)
    } else {
        None
    };

    let result = run_loop(&mut term, &mut state, msg_rx, msg_tx, snapshot_path);

    if let Some(ref mut watcher) = watcher {
        watcher.stop();
    }

    ratatui::restore();
    result
}

/// Main event loop
fn run_loop(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    msg_tx: mpsc::Sender<Message>,
    snapshot_path: &Path,
) -> Result<()> {
    while !state.should_quit() {
        // Drain external messages (watcher, background loads)
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg, &msg_tx, snapshot_path);
        }

        // Render
        terminal.draw(|frame| render::view(frame, state))?;

        // Handle terminal events
        if let Some(message) = event::poll()? {
            process_message(state, message, &msg_tx, snapshot_path);
        }
    }

    Ok(())
}

/// Run the update function and dispatch any follow-up actions.
fn process_message(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    snapshot_path: &Path,
) {
    let result = update(state, message);
    for action in result.actions {
        match action {
            UpdateAction::ReloadSnapshot => {
                spawn_snapshot_load(snapshot_path.to_path_buf(), msg_tx.clone());
            }
        }
    }
}

/// Load and parse the snapshot off the event loop thread.
fn spawn_snapshot_load(path: PathBuf, msg_tx: mpsc::Sender<Message>) {
    tokio::task::spawn_blocking(move || {
        let message = match AtomSnapshot::load(&path) {
            Ok(snapshot) => Message::SnapshotLoaded {
                snapshot: Box::new(snapshot),
            },
            Err(e) => Message::SnapshotLoadFailed {
                error: e.to_string(),
            },
        };
        if msg_tx.blocking_send(message).is_err() {
            debug!("Message channel closed before snapshot load finished");
        }
    });
}
