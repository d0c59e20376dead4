//! # Runtime Value Model
//!
//! Domain types representing the runtime values attached to atoms, as exported
//! by the state library's devtools hook.
//!
//! These types are shared between the snapshot layer (which parses the exported
//! JSON) and the TUI layer (which renders values), which is why they live in
//! `atomscope-core` rather than in the app crate.
//!
//! ## Key Types
//!
//! - [`AtomValue`] — Closed sum type over the value kinds a dynamic runtime can
//!   attach to an atom (primitives, composites, and atom references)
//! - [`AtomId`] — Identifier of an atom within a snapshot
//!
//! The wire encoding is internally tagged by `kind`, e.g.
//! `{"kind": "number", "value": 123}` or
//! `{"kind": "atom", "id": 3}`. Unknown kinds decode to [`AtomValue::Opaque`]
//! so parsing is total over whatever a future hook version exports.

use serde::{Deserialize, Serialize};

// ============================================================================
// AtomId
// ============================================================================

/// Identifier of an atom within a snapshot.
///
/// Assigned by the devtools hook in the instrumented application; stable for
/// the lifetime of one snapshot but not across snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AtomId(pub u64);

impl std::fmt::Display for AtomId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "atom:{}", self.0)
    }
}

impl From<u64> for AtomId {
    fn from(raw: u64) -> Self {
        AtomId(raw)
    }
}

// ============================================================================
// AtomValue
// ============================================================================

/// A runtime value attached to an atom.
///
/// Covers the value kinds a dynamic runtime can produce: primitives, text,
/// arbitrary-precision integers, symbols, functions, ordered lists, keyed
/// records, and references to other atoms. Record entries preserve the order
/// in which the hook exported them so rendering stays deterministic.
///
/// The enum is closed: an exhaustive `match` over it (as in
/// [`crate::format::format_value`]) is checked by the compiler, so adding a
/// kind here flags every dispatch site that needs updating.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum AtomValue {
    /// The null value.
    #[serde(rename = "null")]
    Null,

    /// The undefined/missing value.
    #[serde(rename = "undefined")]
    Undefined,

    /// A boolean.
    #[serde(rename = "boolean")]
    Boolean { value: bool },

    /// A double-precision number.
    #[serde(rename = "number")]
    Number { value: f64 },

    /// An arbitrary-precision integer, carried as its decimal digit string
    /// (optionally sign-prefixed). Kept as text so no precision is lost.
    #[serde(rename = "bigint")]
    BigInt { digits: String },

    /// A text string.
    #[serde(rename = "string")]
    Text { value: String },

    /// A symbolic identifier with an optional description.
    #[serde(rename = "symbol")]
    Symbol {
        #[serde(default)]
        description: Option<String>,
    },

    /// A function, carried as its source text.
    #[serde(rename = "function")]
    Function { source: String },

    /// An ordered list of values.
    #[serde(rename = "array")]
    List { items: Vec<AtomValue> },

    /// A keyed record. Entries are `(key, value)` pairs in export order.
    #[serde(rename = "object")]
    Record { entries: Vec<(String, AtomValue)> },

    /// A reference to another atom in the same snapshot. Resolves to that
    /// atom's current value in deep-nested formatting mode.
    #[serde(rename = "atom")]
    AtomRef { id: AtomId },

    /// A value kind this version does not recognize. Decoded from any unknown
    /// `kind` tag so snapshot parsing never fails on newer hook output.
    #[serde(other)]
    Opaque,
}

impl AtomValue {
    /// The short lowercase type identifier reported in the detail panel
    /// (`number`, `object`, `array`, ...).
    pub fn type_name(&self) -> &'static str {
        match self {
            AtomValue::Null => "null",
            AtomValue::Undefined => "undefined",
            AtomValue::Boolean { .. } => "boolean",
            AtomValue::Number { .. } => "number",
            AtomValue::BigInt { .. } => "bigint",
            AtomValue::Text { .. } => "string",
            AtomValue::Symbol { .. } => "symbol",
            AtomValue::Function { .. } => "function",
            AtomValue::List { .. } => "array",
            AtomValue::Record { .. } => "object",
            AtomValue::AtomRef { .. } => "atom",
            AtomValue::Opaque => "unknown",
        }
    }

    /// Whether this value is a primitive (renders identically in both
    /// formatting modes).
    pub fn is_primitive(&self) -> bool {
        matches!(
            self,
            AtomValue::Null
                | AtomValue::Undefined
                | AtomValue::Boolean { .. }
                | AtomValue::Number { .. }
                | AtomValue::BigInt { .. }
                | AtomValue::Text { .. }
                | AtomValue::Symbol { .. }
        )
    }

    // ── Convenience constructors (mostly for tests and fixtures) ─────────────

    pub fn boolean(value: bool) -> Self {
        AtomValue::Boolean { value }
    }

    pub fn number(value: f64) -> Self {
        AtomValue::Number { value }
    }

    pub fn bigint(digits: impl Into<String>) -> Self {
        AtomValue::BigInt {
            digits: digits.into(),
        }
    }

    pub fn text(value: impl Into<String>) -> Self {
        AtomValue::Text {
            value: value.into(),
        }
    }

    pub fn symbol(description: impl Into<String>) -> Self {
        AtomValue::Symbol {
            description: Some(description.into()),
        }
    }

    pub fn function(source: impl Into<String>) -> Self {
        AtomValue::Function {
            source: source.into(),
        }
    }

    pub fn list(items: Vec<AtomValue>) -> Self {
        AtomValue::List { items }
    }

    pub fn record(entries: Vec<(String, AtomValue)>) -> Self {
        AtomValue::Record { entries }
    }

    pub fn atom_ref(id: impl Into<AtomId>) -> Self {
        AtomValue::AtomRef { id: id.into() }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_deserialize() {
        let json = r#"{"kind": "number", "value": 123}"#;
        let value: AtomValue = serde_json::from_str(json).unwrap();
        assert_eq!(value, AtomValue::number(123.0));
    }

    #[test]
    fn test_string_deserialize() {
        let json = r#"{"kind": "string", "value": "hello"}"#;
        let value: AtomValue = serde_json::from_str(json).unwrap();
        assert_eq!(value, AtomValue::text("hello"));
    }

    #[test]
    fn test_null_and_undefined_deserialize() {
        let null: AtomValue = serde_json::from_str(r#"{"kind": "null"}"#).unwrap();
        assert_eq!(null, AtomValue::Null);

        let undefined: AtomValue = serde_json::from_str(r#"{"kind": "undefined"}"#).unwrap();
        assert_eq!(undefined, AtomValue::Undefined);
    }

    #[test]
    fn test_symbol_description_optional() {
        let with: AtomValue =
            serde_json::from_str(r#"{"kind": "symbol", "description": "token"}"#).unwrap();
        assert_eq!(with, AtomValue::symbol("token"));

        let without: AtomValue = serde_json::from_str(r#"{"kind": "symbol"}"#).unwrap();
        assert_eq!(without, AtomValue::Symbol { description: None });
    }

    #[test]
    fn test_record_preserves_entry_order() {
        let json = r#"{
            "kind": "object",
            "entries": [
                ["zebra", {"kind": "number", "value": 1}],
                ["apple", {"kind": "number", "value": 2}]
            ]
        }"#;
        let value: AtomValue = serde_json::from_str(json).unwrap();
        let AtomValue::Record { entries } = value else {
            panic!("expected record");
        };
        assert_eq!(entries[0].0, "zebra");
        assert_eq!(entries[1].0, "apple");
    }

    #[test]
    fn test_atom_ref_deserialize() {
        let json = r#"{"kind": "atom", "id": 7}"#;
        let value: AtomValue = serde_json::from_str(json).unwrap();
        assert_eq!(value, AtomValue::atom_ref(7u64));
    }

    #[test]
    fn test_unknown_kind_decodes_to_opaque() {
        // A future hook version may export kinds we do not know about.
        let json = r#"{"kind": "weakRef"}"#;
        let value: AtomValue = serde_json::from_str(json).unwrap();
        assert_eq!(value, AtomValue::Opaque);
    }

    #[test]
    fn test_roundtrip_nested_composite() {
        let value = AtomValue::record(vec![
            ("items".to_string(), AtomValue::list(vec![
                AtomValue::number(1.0),
                AtomValue::atom_ref(2u64),
            ])),
            ("label".to_string(), AtomValue::text("cart")),
        ]);
        let json = serde_json::to_string(&value).unwrap();
        let back: AtomValue = serde_json::from_str(&json).unwrap();
        assert_eq!(back, value);
    }

    #[test]
    fn test_type_names() {
        assert_eq!(AtomValue::Null.type_name(), "null");
        assert_eq!(AtomValue::Undefined.type_name(), "undefined");
        assert_eq!(AtomValue::boolean(true).type_name(), "boolean");
        assert_eq!(AtomValue::number(1.5).type_name(), "number");
        assert_eq!(AtomValue::bigint("9").type_name(), "bigint");
        assert_eq!(AtomValue::text("s").type_name(), "string");
        assert_eq!(AtomValue::symbol("s").type_name(), "symbol");
        assert_eq!(AtomValue::function("() => 1").type_name(), "function");
        assert_eq!(AtomValue::list(vec![]).type_name(), "array");
        assert_eq!(AtomValue::record(vec![]).type_name(), "object");
        assert_eq!(AtomValue::atom_ref(1u64).type_name(), "atom");
        assert_eq!(AtomValue::Opaque.type_name(), "unknown");
    }

    #[test]
    fn test_is_primitive() {
        assert!(AtomValue::Null.is_primitive());
        assert!(AtomValue::number(0.0).is_primitive());
        assert!(AtomValue::symbol("s").is_primitive());
        assert!(!AtomValue::list(vec![]).is_primitive());
        assert!(!AtomValue::record(vec![]).is_primitive());
        assert!(!AtomValue::atom_ref(0u64).is_primitive());
        assert!(!AtomValue::function("f").is_primitive());
    }

    #[test]
    fn test_atom_id_display() {
        assert_eq!(AtomId(42).to_string(), "atom:42");
    }
}
