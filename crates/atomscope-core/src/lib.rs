//! # atomscope-core - Core Domain Types
//!
//! Foundation crate for atomscope. Provides the runtime value model, the
//! value formatter, the atom graph, the snapshot wire format, search
//! filtering, and error handling.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, chrono, thiserror, regex, tracing).
//!
//! ## Public API
//!
//! ### Value Model (`value`)
//! - [`AtomValue`] - Tagged union over the runtime value kinds an atom can hold
//! - [`AtomId`] - Identifier of an atom within a snapshot
//!
//! ### Formatting (`format`)
//! - [`FormatMode`] - Shallow vs deep-nested rendering of atom references
//! - [`format_value()`] - Pure (value, mode) -> display string function
//! - [`AtomResolver`] - Capability to resolve an atom reference to its value
//!
//! ### Atom Graph (`graph`)
//! - [`AtomNode`] - A single atom: label, value, dependents
//! - [`AtomGraph`] - Id-indexed store over the snapshot's atoms
//!
//! ### Snapshots (`snapshot`)
//! - [`AtomSnapshot`] - The JSON document exported by an instrumented app
//!
//! ### Search (`search`)
//! - [`SearchState`] - Query/active state for the atom list filter
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use atomscope_core::prelude::*;
//! ```

pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
pub mod search;
pub mod snapshot;
pub mod value;

/// Prelude for common imports used throughout all atomscope crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use error::{Error, Result, ResultExt};
pub use format::{format_value, AtomResolver, FormatMode, ATOM_PLACEHOLDER, MAX_RESOLVE_DEPTH};
pub use graph::{AtomGraph, AtomNode, UNLABELED_PLACEHOLDER};
pub use search::SearchState;
pub use snapshot::{AtomSnapshot, SnapshotNode, SNAPSHOT_SCHEMA_VERSION};
pub use value::{AtomId, AtomValue};
