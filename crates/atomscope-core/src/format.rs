//! # Value Formatter
//!
//! Maps an [`AtomValue`] plus a [`FormatMode`] to a display string for the
//! detail panel's "Raw value" / "Parsed value" fields.
//!
//! Formatting is a pure function of its inputs: no hidden state, no side
//! effects, total over every value kind. A diagnostic panel must never crash
//! while rendering arbitrary application state, so there is no error type —
//! unrecognized kinds degrade to a generic fallback string.
//!
//! ## Atom references
//!
//! A [`AtomValue::AtomRef`] renders as the fixed [`ATOM_PLACEHOLDER`] in
//! [`FormatMode::Shallow`], and resolves through the referenced atom to its
//! current value in [`FormatMode::DeepNested`]. Resolution goes through the
//! [`AtomResolver`] capability supplied by the atom graph.
//!
//! The exporting hook assumes an acyclic reference graph, but a live
//! application can hand us anything: deep resolution therefore carries a
//! visited set plus a depth cap of [`MAX_RESOLVE_DEPTH`]. A revisited atom,
//! a dangling reference, or a cap overflow falls back to the shallow
//! placeholder instead of failing.

use std::collections::HashSet;
use std::sync::OnceLock;

use regex::Regex;

use crate::value::{AtomId, AtomValue};

/// Placeholder rendered for an atom reference in shallow mode (and for
/// unresolvable references in deep-nested mode).
pub const ATOM_PLACEHOLDER: &str = "[atom]";

/// Fallback rendering for value kinds this version does not recognize.
pub const OPAQUE_FALLBACK: &str = "<opaque>";

/// Maximum depth of atom-reference resolution in deep-nested mode.
///
/// Real dependency chains in instrumented apps are a handful of levels deep;
/// the cap only exists so a pathological chain cannot stack-overflow the
/// panel.
pub const MAX_RESOLVE_DEPTH: usize = 64;

// ============================================================================
// FormatMode
// ============================================================================

/// How atom references embedded in a value are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormatMode {
    /// Render an atom reference as the fixed [`ATOM_PLACEHOLDER`].
    #[default]
    Shallow,

    /// Resolve through atom references to their current values before
    /// rendering (finite recursion, cycle-guarded).
    DeepNested,
}

// ============================================================================
// AtomResolver
// ============================================================================

/// Capability to resolve an atom reference to the referenced atom's current
/// value. Implemented by [`crate::graph::AtomGraph`].
pub trait AtomResolver {
    /// The current value of the atom with the given id, or `None` if the id
    /// is not present in the graph (a dangling reference).
    fn resolve(&self, id: AtomId) -> Option<&AtomValue>;
}

/// A resolver over nothing: every reference is dangling.
///
/// Useful when formatting a value outside the context of a graph (primitives
/// render identically either way).
#[derive(Debug, Clone, Copy, Default)]
pub struct NoResolver;

impl AtomResolver for NoResolver {
    fn resolve(&self, _id: AtomId) -> Option<&AtomValue> {
        None
    }
}

// ============================================================================
// format_value
// ============================================================================

/// Format a value for display.
///
/// Top-level text renders verbatim; text nested inside lists and records is
/// JSON-quoted so composite renderings stay unambiguous.
pub fn format_value(value: &AtomValue, mode: FormatMode, resolver: &dyn AtomResolver) -> String {
    let mut visited = HashSet::new();
    render(value, mode, resolver, &mut visited, 0, true)
}

fn render(
    value: &AtomValue,
    mode: FormatMode,
    resolver: &dyn AtomResolver,
    visited: &mut HashSet<AtomId>,
    depth: usize,
    top_level: bool,
) -> String {
    match value {
        AtomValue::Null => "null".to_string(),
        AtomValue::Undefined => "undefined".to_string(),
        AtomValue::Boolean { value } => value.to_string(),
        AtomValue::Number { value } => format_number(*value),
        AtomValue::BigInt { digits } => digits.clone(),
        AtomValue::Text { value } => {
            if top_level {
                value.clone()
            } else {
                quote_text(value)
            }
        }
        AtomValue::Symbol { description } => {
            format!("Symbol({})", description.as_deref().unwrap_or(""))
        }
        AtomValue::Function { source } => compact_source(source),
        AtomValue::List { items } => {
            let rendered: Vec<String> = items
                .iter()
                .map(|item| render(item, mode, resolver, visited, depth, false))
                .collect();
            format!("[{}]", rendered.join(", "))
        }
        AtomValue::Record { entries } => {
            let rendered: Vec<String> = entries
                .iter()
                .map(|(key, val)| {
                    format!(
                        "{}: {}",
                        quote_text(key),
                        render(val, mode, resolver, visited, depth, false)
                    )
                })
                .collect();
            format!("{{{}}}", rendered.join(", "))
        }
        AtomValue::AtomRef { id } => match mode {
            FormatMode::Shallow => ATOM_PLACEHOLDER.to_string(),
            FormatMode::DeepNested => {
                // Cycle/depth guard: a revisited id or an over-deep chain
                // degrades to the placeholder rather than recursing forever.
                if depth >= MAX_RESOLVE_DEPTH || !visited.insert(*id) {
                    return ATOM_PLACEHOLDER.to_string();
                }
                let rendered = match resolver.resolve(*id) {
                    Some(target) => {
                        render(target, mode, resolver, visited, depth + 1, top_level)
                    }
                    None => ATOM_PLACEHOLDER.to_string(),
                };
                // A DAG may reach the same atom along two sibling branches;
                // only a path back through an ancestor is a cycle.
                visited.remove(id);
                rendered
            }
        },
        AtomValue::Opaque => OPAQUE_FALLBACK.to_string(),
    }
}

/// Render a number the way the source runtime prints it: integral finite
/// values without a fractional part, non-finite values as `NaN` / `Infinity`.
fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string()
    } else if n.fract() == 0.0 && n.abs() < 9.0e15 {
        format!("{}", n as i64)
    } else {
        format!("{n}")
    }
}

/// JSON-quote a text fragment for embedding in a composite rendering.
fn quote_text(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_else(|_| format!("\"{s}\""))
}

/// Collapse whitespace runs in a function's source text to single spaces.
///
/// Function sources arrive with the original file's indentation and line
/// breaks; the panel renders them compactly (whitespace-insensitive).
fn compact_source(source: &str) -> String {
    static WHITESPACE_RUN: OnceLock<Regex> = OnceLock::new();
    let re = WHITESPACE_RUN.get_or_init(|| Regex::new(r"\s+").expect("static regex is valid"));
    re.replace_all(source.trim(), " ").into_owned()
}

// ============================================================================
// Tests
// ============================================================================
