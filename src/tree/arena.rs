//! Node and edge storage.
//!
//! The arena owns every node and edge in the tree and hands out small
//! integer handles ([`NodeId`], [`EdgeId`]) instead of references.
//! Handles survive arena growth, so suffix links and children maps can
//! cross-reference freely; everything is released at once when the tree
//! is dropped. Nothing is ever deleted individually: construction
//! interleaves edge splits with suffix-link writes whose targets may be
//! mutated again later, so per-node reclamation has no natural point.

use std::collections::{BTreeMap, BTreeSet};

use super::key::Key;
use super::types::{EdgeId, NodeId};

/// A tree node: outgoing edges keyed by their first element, an optional
/// suffix link, and the payload identifiers recorded against this node.
#[derive(Debug)]
pub(crate) struct Node<E, I> {
    /// Outgoing edges, keyed by the first element of each edge label.
    /// Key order doubles as the deterministic harvest order.
    pub(crate) children: BTreeMap<E, EdgeId>,
    /// Suffix link; `None` for the root and for fresh leaves.
    pub(crate) suffix: Option<NodeId>,
    /// Payload identifiers. Sorted by construction: identifiers are
    /// non-decreasing across insertions, so appends preserve order.
    pub(crate) data: Vec<I>,
    /// Distinct identifiers reachable from this node; meaningful only
    /// while the tree-level count freshness flag is set.
    pub(crate) result_count: usize,
}

/// A labelled edge. The label is a view into a stored input sequence and
/// is never empty once set; splits shrink it from the front.
#[derive(Debug)]
pub(crate) struct Edge<E> {
    pub(crate) label: Key<E>,
    pub(crate) dest: NodeId,
}

/// Owner of all nodes and edges.
#[derive(Debug)]
pub(crate) struct NodeArena<E, I> {
    nodes: Vec<Node<E, I>>,
    edges: Vec<Edge<E>>,
}

impl<E: Ord + Clone, I: Ord + Clone> NodeArena<E, I> {
    pub(crate) fn new() -> Self {
        Self {
            nodes: Vec::new(),
            edges: Vec::new(),
        }
    }

    pub(crate) fn fresh_node(&mut self) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(Node {
            children: BTreeMap::new(),
            suffix: None,
            data: Vec::new(),
            result_count: 0,
        });
        id
    }

    pub(crate) fn fresh_edge(&mut self, label: Key<E>, dest: NodeId) -> EdgeId {
        debug_assert!(!label.is_empty());
        let id = EdgeId(self.edges.len() as u32);
        self.edges.push(Edge { label, dest });
        id
    }

    pub(crate) fn node(&self, id: NodeId) -> &Node<E, I> {
        &self.nodes[id.0 as usize]
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node<E, I> {
        &mut self.nodes[id.0 as usize]
    }

    pub(crate) fn edge(&self, id: EdgeId) -> &Edge<E> {
        &self.edges[id.0 as usize]
    }

    pub(crate) fn edge_mut(&mut self, id: EdgeId) -> &mut Edge<E> {
        &mut self.edges[id.0 as usize]
    }

    pub(crate) fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// The outgoing edge of `node` whose label starts with `first`.
    pub(crate) fn child(&self, node: NodeId, first: &E) -> Option<EdgeId> {
        self.node(node).children.get(first).copied()
    }

    /// Register `edge` under `node`, keyed by `first`. Replaces any
    /// previous edge under the same key.
    pub(crate) fn attach(&mut self, node: NodeId, first: E, edge: EdgeId) {
        self.node_mut(node).children.insert(first, edge);
    }

    fn contains(&self, node: NodeId, id: &I) -> bool {
        self.node(node).data.binary_search(id).is_ok()
    }

    /// Record `id` against `node` and every ancestor along the suffix
    /// chain that does not already hold it. Stops at the first node that
    /// does: its own chain was saturated when the identifier first
    /// reached it.
    pub(crate) fn add_ref(&mut self, node: NodeId, id: I) {
        let mut cur = Some(node);
        while let Some(n) = cur {
            if self.contains(n, &id) {
                break;
            }
            self.node_mut(n).data.push(id.clone());
            cur = self.node(n).suffix;
        }
    }

    /// Gather at most `cap` identifiers from the subtree under `node`
    /// (all of them for a negative `cap`). Depth-first, in children-map
    /// key order.
    pub(crate) fn harvest(&self, node: NodeId, cap: i32) -> BTreeSet<I> {
        let mut out = BTreeSet::new();
        self.harvest_into(node, cap, &mut out);
        out
    }

    fn harvest_into(&self, node: NodeId, cap: i32, out: &mut BTreeSet<I>) {
        let reached = |out: &BTreeSet<I>| cap >= 0 && out.len() >= cap as usize;

        let node = self.node(node);
        for id in &node.data {
            if reached(out) {
                return;
            }
            out.insert(id.clone());
        }
        for eid in node.children.values() {
            if reached(out) {
                return;
            }
            self.harvest_into(self.edge(*eid).dest, cap, out);
        }
    }

    /// Post-order recount of the whole subtree under `node`: every node's
    /// `result_count` is set to the number of distinct identifiers
    /// reachable from it. Returns the count at `node`.
    pub(crate) fn refresh_counts(&mut self, node: NodeId) -> usize {
        self.count_subtree(node).len()
    }

    fn count_subtree(&mut self, node: NodeId) -> BTreeSet<I> {
        let mut set: BTreeSet<I> = self.node(node).data.iter().cloned().collect();

        let dests: Vec<NodeId> = self
            .node(node)
            .children
            .values()
            .map(|eid| self.edge(*eid).dest)
            .collect();
        for dest in dests {
            set.extend(self.count_subtree(dest));
        }

        self.node_mut(node).result_count = set.len();
        set
    }
}
