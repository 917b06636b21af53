//! Substring search over the tree.
//!
//! A query is answered in two steps. The *descent* walks from the root,
//! matching the query against edge labels element by element; if the walk
//! survives the whole query, the edge it ends on points at the locus
//! node. The *harvest* then gathers identifiers from the locus's subtree,
//! depth-first in children-map key order, optionally stopping at a cap.
//!
//! Searching never mutates the tree, so any number of concurrent
//! searches may run against a tree that is not being inserted into.

use std::collections::BTreeSet;

use crate::trace::{debug_log, trace_log};

use super::build::SuffixTree;
use super::key::elem_eq;
use super::types::{CountedResults, NodeId, TreeError};

impl<E: Ord + Clone, I: Ord + Clone> SuffixTree<E, I> {
    /// All identifiers whose sequence contains `q` as a substring.
    ///
    /// An empty query matches nothing.
    pub fn search(&self, q: &[E]) -> BTreeSet<I> {
        self.search_capped(q, -1)
    }

    /// Like [`search`](Self::search), but stops harvesting once `cap`
    /// identifiers have been gathered. A negative `cap` means unbounded.
    pub fn search_capped(&self, q: &[E], cap: i32) -> BTreeSet<I> {
        let out = match self.search_node(q) {
            Some(node) => self.arena.harvest(node, cap),
            None => BTreeSet::new(),
        };
        trace_log!("search: q_len={} cap={} hits={}", q.len(), cap, out.len());
        out
    }

    /// Like [`search_capped`](Self::search_capped), but also reports the
    /// exact number of matching identifiers, read from the counts cached
    /// by [`compute_count`](Self::compute_count).
    ///
    /// Fails with [`TreeError::CountNotComputed`] if `compute_count` has
    /// not run since the last `put`.
    pub fn search_with_count(&self, q: &[E], cap: i32) -> Result<CountedResults<I>, TreeError> {
        if !self.counts_fresh {
            return Err(TreeError::CountNotComputed);
        }

        Ok(match self.search_node(q) {
            Some(node) => CountedResults {
                total: self.arena.node(node).result_count,
                matches: self.arena.harvest(node, cap),
            },
            None => CountedResults {
                total: 0,
                matches: BTreeSet::new(),
            },
        })
    }

    /// Recompute every node's cached result count and return the root's,
    /// i.e. the number of distinct identifiers in the tree. Must be
    /// re-run after any `put` before counted searches are allowed again.
    pub fn compute_count(&mut self) -> usize {
        let root = self.root;
        let total = self.arena.refresh_counts(root);
        self.counts_fresh = true;
        debug_log!("compute_count: total={}", total);
        total
    }

    /// Descend from the root along `q`. Returns the locus node when the
    /// whole query matches a root-anchored path, `None` otherwise. An
    /// empty query never assigns a locus.
    fn search_node(&self, q: &[E]) -> Option<NodeId> {
        let mut node = self.root;
        let mut i = 0;

        while i < q.len() {
            let eid = self.arena.child(node, &q[i])?;
            let edge = self.arena.edge(eid);
            let label = &edge.label;

            let overlap = label.len().min(q.len() - i);
            for k in 0..overlap {
                if !elem_eq(&q[i + k], label.at(k)) {
                    return None;
                }
            }

            if label.len() < q.len() - i {
                node = edge.dest;
                i += label.len();
            } else {
                // q ends on this edge; its destination holds the payloads
                return Some(edge.dest);
            }
        }

        None
    }
}
