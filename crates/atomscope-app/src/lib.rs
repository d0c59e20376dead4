//! # atomscope-app - Application State and Update Logic
//!
//! The TEA-style engine of the panel: [`state::AppState`] is the model,
//! [`message::Message`] the event vocabulary, and [`handler::update`] the
//! update function. The crate stays independent of any terminal library —
//! keyboard input arrives as the abstract [`InputKey`] — so the engine can be
//! driven from tests (or a future non-TUI frontend) without crossterm.
//!
//! Also hosts the panel's configuration loading ([`config`]) and the snapshot
//! file watcher ([`watcher`]).

pub mod config;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod state;
pub mod watcher;

// Re-export handler types for event loop integration
pub use handler::{update, UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use state::{AppState, DisplayOptions, PanelError, UiMode};
