//! Configuration loading for atomscope
//!
//! Settings live in `.atomscope/config.toml` next to the snapshot file. A
//! missing file is not an error — everything has a sensible default — and a
//! malformed file logs a warning and falls back to defaults rather than
//! blocking the panel.
//!
//! ```toml
//! [display]
//! parse_nested_atoms = true
//!
//! [watcher]
//! enabled = true
//! debounce_ms = 500
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

const CONFIG_FILENAME: &str = "config.toml";
const ATOMSCOPE_DIR: &str = ".atomscope";

/// Default debounce for the snapshot file watcher, in milliseconds.
pub const DEFAULT_DEBOUNCE_MS: u64 = 500;

// ─────────────────────────────────────────────────────────────────────────────
// Settings
// ─────────────────────────────────────────────────────────────────────────────

/// Global application settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    pub display: DisplaySettings,
    pub watcher: WatcherSettings,
}

/// Detail panel display settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Whether the "Parsed value" field resolves nested atom references
    /// through to their underlying values.
    pub parse_nested_atoms: bool,
}

/// Snapshot file watcher settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct WatcherSettings {
    /// Whether to watch the snapshot file and reload on change.
    pub enabled: bool,

    /// Debounce window for change events, in milliseconds.
    pub debounce_ms: u64,
}

impl Default for WatcherSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Loading
// ─────────────────────────────────────────────────────────────────────────────

/// Load settings for the given snapshot path.
///
/// Looks for `.atomscope/config.toml` in the snapshot file's directory.
pub fn load_settings(snapshot_path: &Path) -> Settings {
    let dir = snapshot_path.parent().unwrap_or_else(|| Path::new("."));
    let config_path = dir.join(ATOMSCOPE_DIR).join(CONFIG_FILENAME);

    let contents = match std::fs::read_to_string(&config_path) {
        Ok(contents) => contents,
        Err(_) => return Settings::default(),
    };

    match toml::from_str(&contents) {
        Ok(settings) => settings,
        Err(e) => {
            warn!(
                "Ignoring malformed config at {}: {e}",
                config_path.display()
            );
            Settings::default()
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn write_config(dir: &Path, contents: &str) -> std::path::PathBuf {
        let config_dir = dir.join(ATOMSCOPE_DIR);
        std::fs::create_dir_all(&config_dir).unwrap();
        std::fs::write(config_dir.join(CONFIG_FILENAME), contents).unwrap();
        dir.join("atoms.json")
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert!(!settings.display.parse_nested_atoms);
        assert!(settings.watcher.enabled);
        assert_eq!(settings.watcher.debounce_ms, DEFAULT_DEBOUNCE_MS);
    }

    #[test]
    fn test_missing_config_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = load_settings(&dir.path().join("atoms.json"));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_load_full_config() {
        let dir = tempfile::tempdir().unwrap();
        let snapshot_path = write_config(
            dir.path(),
            r#"
            [display]
            parse_nested_atoms = true

            [watcher]
            enabled = false
            debounce_ms = 250
            "#,
        );
        let settings = load_settings(&snapshot_path);
        assert!(settings.display.parse_nested_atoms);
        assert!(!settings.watcher.enabled);
        assert_eq!(settings.watcher.debounce_ms, 250);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let snapshot_path = write_config(
            dir.path(),
            r#"
            [display]
            parse_nested_atoms = true
            "#,
        );
        let settings = load_settings(&snapshot_path);
        assert!(settings.display.parse_nested_atoms);
        assert!(settings.watcher.enabled);
    }

    #[test]
    fn test_malformed_config_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let snapshot_path = write_config(dir.path(), "display = 12");
        let settings = load_settings(&snapshot_path);
        assert_eq!(settings, Settings::default());
    }
}
