//! # Atom Graph
//!
//! Id-indexed store over the atoms in one snapshot: each [`AtomNode`] carries
//! its debug label, current value, and dependent atoms. The graph implements
//! [`AtomResolver`] so the formatter can chase atom references through it.
//!
//! Listing order is sorted by id, which keeps the panel's atom list stable
//! across re-renders and re-loads of the same snapshot.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::format::AtomResolver;
use crate::value::{AtomId, AtomValue};

/// Display name used for atoms without a debug label.
pub const UNLABELED_PLACEHOLDER: &str = "<unlabeled>";

// ============================================================================
// AtomNode
// ============================================================================

/// A single atom in the state graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtomNode {
    /// Snapshot-scoped identifier.
    pub id: AtomId,

    /// Optional human-assigned name. Absent by default; the hook only exports
    /// one when the application set it.
    pub debug_label: Option<String>,

    /// The atom's current value.
    pub value: AtomValue,

    /// Atoms whose values are derived from this one.
    pub dependents: Vec<AtomId>,
}

impl AtomNode {
    /// Display name: the debug label, or [`UNLABELED_PLACEHOLDER`] when absent.
    pub fn display_name(&self) -> &str {
        self.debug_label.as_deref().unwrap_or(UNLABELED_PLACEHOLDER)
    }

    /// Short lowercase identifier of the value's kind (`number`, `object`, ...).
    pub fn type_name(&self) -> &'static str {
        self.value.type_name()
    }

    /// Whether any atom derives from this one.
    pub fn has_dependents(&self) -> bool {
        !self.dependents.is_empty()
    }
}

// ============================================================================
// AtomGraph
// ============================================================================

/// All atoms of one snapshot, indexed by id.
#[derive(Debug, Clone, Default)]
pub struct AtomGraph {
    nodes: BTreeMap<AtomId, AtomNode>,
}

impl AtomGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a node, replacing any previous node with the same id.
    pub fn insert(&mut self, node: AtomNode) {
        self.nodes.insert(node.id, node);
    }

    /// Look up a node by id.
    pub fn get(&self, id: AtomId) -> Option<&AtomNode> {
        self.nodes.get(&id)
    }

    /// Number of atoms in the graph.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All nodes in listing order (sorted by id).
    pub fn nodes(&self) -> impl Iterator<Item = &AtomNode> {
        self.nodes.values()
    }

    /// Nodes whose display name contains `query` (case-insensitive), in
    /// listing order. An empty query matches everything.
    pub fn search(&self, query: &str) -> Vec<&AtomNode> {
        let needle = query.to_lowercase();
        self.nodes()
            .filter(|node| node.display_name().to_lowercase().contains(&needle))
            .collect()
    }

    /// The dependent nodes of `id`, in the order the atom listed them.
    ///
    /// Dependents referencing ids absent from the graph are skipped; the hook
    /// can export a dependent that was garbage-collected between passes.
    pub fn dependents_of(&self, id: AtomId) -> Vec<&AtomNode> {
        match self.get(id) {
            Some(node) => node
                .dependents
                .iter()
                .filter_map(|dep| self.nodes.get(dep))
                .collect(),
            None => Vec::new(),
        }
    }
}

impl AtomResolver for AtomGraph {
    fn resolve(&self, id: AtomId) -> Option<&AtomValue> {
        self.nodes.get(&id).map(|node| &node.value)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::{format_value, FormatMode};

    fn make_node(id: u64, label: Option<&str>, value: AtomValue) -> AtomNode {
        AtomNode {
            id: AtomId(id),
            debug_label: label.map(str::to_string),
            value,
            dependents: vec![],
        }
    }

    fn make_graph() -> AtomGraph {
        let mut graph = AtomGraph::new();
        graph.insert(make_node(2, Some("countAtom"), AtomValue::number(0.0)));
        graph.insert(make_node(1, Some("userAtom"), AtomValue::text("ada")));
        graph.insert(make_node(3, None, AtomValue::boolean(true)));
        graph
    }

    #[test]
    fn test_display_name_uses_label() {
        let node = make_node(1, Some("countAtom"), AtomValue::number(0.0));
        assert_eq!(node.display_name(), "countAtom");
    }

    #[test]
    fn test_display_name_placeholder_when_unlabeled() {
        let node = make_node(1, None, AtomValue::number(0.0));
        assert_eq!(node.display_name(), UNLABELED_PLACEHOLDER);
    }

    #[test]
    fn test_nodes_listed_sorted_by_id() {
        let graph = make_graph();
        let ids: Vec<u64> = graph.nodes().map(|n| n.id.0).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_insert_replaces_same_id() {
        let mut graph = make_graph();
        graph.insert(make_node(2, Some("countAtom"), AtomValue::number(7.0)));
        assert_eq!(graph.len(), 3);
        assert_eq!(
            graph.get(AtomId(2)).unwrap().value,
            AtomValue::number(7.0)
        );
    }

    #[test]
    fn test_search_case_insensitive_substring() {
        let graph = make_graph();
        let hits = graph.search("COUNT");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].display_name(), "countAtom");
    }

    #[test]
    fn test_search_matches_placeholder_name() {
        let graph = make_graph();
        let hits = graph.search("unlabeled");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, AtomId(3));
    }

    #[test]
    fn test_search_empty_query_matches_all() {
        let graph = make_graph();
        assert_eq!(graph.search("").len(), 3);
    }

    #[test]
    fn test_search_no_match() {
        let graph = make_graph();
        assert!(graph.search("missing").is_empty());
    }

    #[test]
    fn test_dependents_of_skips_dangling_ids() {
        let mut graph = AtomGraph::new();
        let mut base = make_node(1, Some("base"), AtomValue::number(1.0));
        base.dependents = vec![AtomId(2), AtomId(99)];
        graph.insert(base);
        graph.insert(make_node(2, Some("derived"), AtomValue::number(2.0)));

        let deps = graph.dependents_of(AtomId(1));
        assert_eq!(deps.len(), 1);
        assert_eq!(deps[0].display_name(), "derived");
    }

    #[test]
    fn test_dependents_of_unknown_atom_is_empty() {
        let graph = make_graph();
        assert!(graph.dependents_of(AtomId(99)).is_empty());
    }

    #[test]
    fn test_graph_resolves_for_formatter() {
        let mut graph = AtomGraph::new();
        graph.insert(make_node(1, Some("inner"), AtomValue::number(5.0)));
        graph.insert(make_node(2, Some("outer"), AtomValue::atom_ref(1u64)));

        let outer = graph.get(AtomId(2)).unwrap();
        assert_eq!(
            format_value(&outer.value, FormatMode::DeepNested, &graph),
            "5"
        );
    }
}
