//! # Atom Snapshot Wire Format
//!
//! The JSON document an instrumented application exports through its devtools
//! hook: schema version, a little provenance metadata, and the atom list.
//!
//! The JSON fields use camelCase (hook convention); serde maps them to Rust's
//! snake_case fields via `#[serde(rename_all = "camelCase")]`. Unknown fields
//! are ignored (no `deny_unknown_fields`) so older panels keep reading newer
//! exports.
//!
//! Example document:
//!
//! ```json
//! {
//!   "schemaVersion": 1,
//!   "appName": "shop-frontend",
//!   "capturedAt": "2026-08-20T10:15:00Z",
//!   "atoms": [
//!     {
//!       "id": 1,
//!       "debugLabel": "countAtom",
//!       "value": {"kind": "number", "value": 0},
//!       "dependents": [2]
//!     }
//!   ]
//! }
//! ```

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result, ResultExt};
use crate::graph::{AtomGraph, AtomNode};
use crate::value::{AtomId, AtomValue};

/// The snapshot schema version this panel understands.
pub const SNAPSHOT_SCHEMA_VERSION: u32 = 1;

// ============================================================================
// SnapshotNode
// ============================================================================

/// One atom as it appears in the exported document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotNode {
    /// Snapshot-scoped atom id.
    pub id: AtomId,

    /// Optional human-assigned name.
    #[serde(default)]
    pub debug_label: Option<String>,

    /// The atom's current value.
    pub value: AtomValue,

    /// Ids of atoms derived from this one.
    #[serde(default)]
    pub dependents: Vec<AtomId>,
}

// ============================================================================
// AtomSnapshot
// ============================================================================

/// A full state-graph export from the instrumented application.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AtomSnapshot {
    /// Wire schema version.
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Name the application registered with the hook, if any.
    #[serde(default)]
    pub app_name: Option<String>,

    /// When the hook captured this snapshot.
    #[serde(default)]
    pub captured_at: Option<DateTime<Utc>>,

    /// The exported atoms.
    #[serde(default)]
    pub atoms: Vec<SnapshotNode>,
}

fn default_schema_version() -> u32 {
    SNAPSHOT_SCHEMA_VERSION
}

impl AtomSnapshot {
    /// Parse a snapshot from its JSON text.
    ///
    /// A newer schema version is accepted with a warning; unknown value kinds
    /// inside it decode to `Opaque` and render as a generic fallback.
    pub fn parse(json: &str) -> Result<Self> {
        let snapshot: AtomSnapshot = serde_json::from_str(json)?;
        if snapshot.schema_version > SNAPSHOT_SCHEMA_VERSION {
            tracing::warn!(
                "Snapshot schema version {} is newer than supported {}",
                snapshot.schema_version,
                SNAPSHOT_SCHEMA_VERSION
            );
        }
        Ok(snapshot)
    }

    /// Load and parse a snapshot file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::snapshot_not_found(path));
        }
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read snapshot {}", path.display()))?;
        Self::parse(&json)
    }

    /// Number of atoms in the document.
    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    /// Build the id-indexed [`AtomGraph`] from this document.
    pub fn into_graph(self) -> AtomGraph {
        let mut graph = AtomGraph::new();
        for node in self.atoms {
            graph.insert(AtomNode {
                id: node.id,
                debug_label: node.debug_label,
                value: node.value,
                dependents: node.dependents,
            });
        }
        graph
    }
}

// ============================================================================
// Tests
// ============================================================================
