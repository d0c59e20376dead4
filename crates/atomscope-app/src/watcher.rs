//! Snapshot file watcher
//!
//! Watches the exported snapshot file for changes and triggers a debounced
//! reload, so the panel tracks the instrumented application live.

use std::path::PathBuf;
use std::time::Duration;

use notify::RecursiveMode;
use notify_debouncer_full::{new_debouncer, DebounceEventResult};
use tokio::sync::mpsc;
use tracing::{debug, error, warn};

use crate::config::DEFAULT_DEBOUNCE_MS;
use crate::message::Message;

/// Configuration for the snapshot watcher
#[derive(Debug, Clone)]
pub struct WatcherConfig {
    /// Debounce duration
    pub debounce: Duration,
}

impl Default for WatcherConfig {
    fn default() -> Self {
        Self {
            debounce: Duration::from_millis(DEFAULT_DEBOUNCE_MS),
        }
    }
}

impl WatcherConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set debounce duration in milliseconds
    pub fn with_debounce_ms(mut self, ms: u64) -> Self {
        self.debounce = Duration::from_millis(ms);
        self
    }
}

/// Manages watching a single snapshot file
pub struct SnapshotWatcher {
    /// The snapshot file to watch
    snapshot_path: PathBuf,
    /// Configuration
    config: WatcherConfig,
    /// Handle to stop the watcher
    stop_tx: Option<tokio::sync::oneshot::Sender<()>>,
}

impl SnapshotWatcher {
    /// Create a new watcher for the given snapshot file
    pub fn new(snapshot_path: PathBuf, config: WatcherConfig) -> Self {
        Self {
            snapshot_path,
            config,
            stop_tx: None,
        }
    }

    /// Start watching for file changes
    ///
    /// Sends `Message::SnapshotFileChanged` to the channel on each debounced
    /// change batch that touches the snapshot file.
    pub fn start(&mut self, message_tx: mpsc::Sender<Message>) -> Result<(), String> {
        if self.is_running() {
            return Err("Watcher is already running".to_string());
        }

        let snapshot_path = self.snapshot_path.clone();
        let config = self.config.clone();
        let (stop_tx, stop_rx) = tokio::sync::oneshot::channel();

        self.stop_tx = Some(stop_tx);

        // The debouncer is blocking; keep it off the async runtime.
        tokio::task::spawn_blocking(move || {
            Self::run_watcher(snapshot_path, config, message_tx, stop_rx);
        });

        Ok(())
    }

    /// Stop the watcher
    pub fn stop(&mut self) {
        if let Some(tx) = self.stop_tx.take() {
            let _ = tx.send(());
        }
    }

    /// Check if the watcher is running
    pub fn is_running(&self) -> bool {
        self.stop_tx.is_some()
    }

    /// Internal: run the blocking watcher
    fn run_watcher(
        snapshot_path: PathBuf,
        config: WatcherConfig,
        message_tx: mpsc::Sender<Message>,
        mut stop_rx: tokio::sync::oneshot::Receiver<()>,
    ) {
        let tx_clone = message_tx.clone();
        let watched_file = snapshot_path.clone();

        let debouncer_result = new_debouncer(
            config.debounce,
            None, // No tick rate override
            move |result: DebounceEventResult| match result {
                Ok(events) => {
                    // Exporters typically write-then-rename, so match on the
                    // file name rather than the exact path.
                    let touched = events.iter().any(|event| {
                        event
                            .paths
                            .iter()
                            .any(|path| path.file_name() == watched_file.file_name())
                    });
                    if touched {
                        debug!("Snapshot file changed on disk");
                        let _ = tx_clone.blocking_send(Message::SnapshotFileChanged);
                    }
                }
                Err(errors) => {
                    for err in errors {
                        warn!("Snapshot watcher error: {err:?}");
                        let _ = tx_clone.blocking_send(Message::WatcherError {
                            message: err.to_string(),
                        });
                    }
                }
            },
        );

        let mut debouncer = match debouncer_result {
            Ok(d) => d,
            Err(e) => {
                error!("Failed to create snapshot watcher: {e}");
                let _ = message_tx.blocking_send(Message::WatcherError {
                    message: format!("Failed to create watcher: {e}"),
                });
                return;
            }
        };

        // Watch the parent directory: write-then-rename replaces the inode,
        // so watching the file itself loses the subscription after one write.
        let watch_dir = snapshot_path
            .parent()
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."));

        if let Err(e) = debouncer.watch(&watch_dir, RecursiveMode::NonRecursive) {
            error!("Failed to watch {}: {e}", watch_dir.display());
            let _ = message_tx.blocking_send(Message::WatcherError {
                message: format!("Failed to watch {}: {e}", watch_dir.display()),
            });
            return;
        }

        debug!("Snapshot watcher started on {}", watch_dir.display());

        // Block until stopped; the debouncer callback does the work.
        loop {
            match stop_rx.try_recv() {
                Ok(()) | Err(tokio::sync::oneshot::error::TryRecvError::Closed) => break,
                Err(tokio::sync::oneshot::error::TryRecvError::Empty) => {
                    std::thread::sleep(Duration::from_millis(100));
                }
            }
        }

        debug!("Snapshot watcher stopped");
    }
}
