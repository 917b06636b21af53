//! On-line suffix tree construction.
//!
//! Construction follows Ukkonen's on-line algorithm, generalized so that
//! many independent sequences share one tree. Each call to
//! [`SuffixTree::put`] walks the new sequence element by element,
//! maintaining an active point `(node, text)`: `node` is the deepest
//! explicit node on the path of everything inserted so far, `text` the
//! remainder that hangs off it. Three helpers drive the walk:
//!
//! - `canonize` re-anchors a `(node, view)` pair at the deepest explicit
//!   node reachable by whole edge labels.
//! - `test_and_split` decides whether the next element is already present
//!   at the active point, splitting an edge mid-label when it is not.
//! - `update` threads the new element through every suffix of the text
//!   read so far, following suffix links instead of restarting from the
//!   root, which is what makes construction amortised linear.
//!
//! The generalization shows up in `update`: unlike the single-string
//! algorithm, a deeper node may already exist where a leaf is wanted,
//! because earlier sequences put it there. In that case the existing node
//! is adopted instead of creating a new leaf.

use std::sync::Arc;

use crate::trace::debug_log;

use super::arena::NodeArena;
use super::key::Key;
use super::types::{NodeId, TreeError};

/// A generalized suffix tree over element type `E`, mapping substrings to
/// identifiers of type `I`.
///
/// Elements need a total order; equality is derived from it. Identifiers
/// need a total order and cheap cloning, and must be supplied in
/// non-decreasing order across calls to [`put`](Self::put).
#[derive(Debug)]
pub struct SuffixTree<E, I> {
    pub(crate) arena: NodeArena<E, I>,
    pub(crate) root: NodeId,
    /// The most recently created leaf of the current insertion; target of
    /// the next inter-leaf suffix link. Reset to the root by every `put`.
    active_leaf: NodeId,
    last_id: Option<I>,
    /// Set by `compute_count`, cleared by `put`.
    pub(crate) counts_fresh: bool,
}

impl<E: Ord + Clone, I: Ord + Clone> SuffixTree<E, I> {
    /// An empty tree with its root allocated.
    pub fn new() -> Self {
        let mut arena = NodeArena::new();
        let root = arena.fresh_node();
        Self {
            arena,
            root,
            active_leaf: root,
            last_id: None,
            counts_fresh: false,
        }
    }

    /// Number of nodes currently allocated, the root included.
    pub fn node_count(&self) -> usize {
        self.arena.node_count()
    }

    /// Index `key` under `id`: afterwards, `search(q)` contains `id` for
    /// every non-empty substring `q` of `key`.
    ///
    /// The sequence is copied into shared storage owned by the tree.
    /// Identifiers must be non-decreasing across calls; an out-of-order
    /// id fails with [`TreeError::InvalidInsertOrder`] and leaves the
    /// tree untouched. Cached result counts go stale (see
    /// [`compute_count`](Self::compute_count)).
    pub fn put(&mut self, key: impl Into<Arc<[E]>>, id: I) -> Result<(), TreeError> {
        if let Some(last) = &self.last_id {
            if id < *last {
                return Err(TreeError::InvalidInsertOrder);
            }
        }
        self.last_id = Some(id.clone());
        self.counts_fresh = false;

        let full = Key::new(key.into());

        self.active_leaf = self.root;
        let mut node = self.root;
        let mut text = full.substr_len(0, 0);

        for i in 0..full.len() {
            // text covers key[..=i]; its start was advanced by canonize
            text = text.extended();

            let (n, t) = self.update(node, &text, full.substr(i), &id);
            let (n, t) = self.canonize(n, t);
            node = n;
            text = t;
        }

        if self.arena.node(self.active_leaf).suffix.is_none()
            && self.active_leaf != self.root
            && self.active_leaf != node
        {
            self.arena.node_mut(self.active_leaf).suffix = Some(node);
        }

        debug_log!("put: key_len={} nodes={}", full.len(), self.node_count());
        Ok(())
    }

    /// Re-anchor `(node, view)` at the deepest explicit node: follow
    /// outgoing edges while a whole edge label is a prefix of `view`,
    /// stripping each matched label from the front.
    pub(crate) fn canonize(&self, mut node: NodeId, mut view: Key<E>) -> (NodeId, Key<E>) {
        while !view.is_empty() {
            let Some(eid) = self.arena.child(node, view.at(0)) else {
                break;
            };
            let edge = self.arena.edge(eid);
            if !view.has_prefix(&edge.label) {
                break;
            }
            view = view.substr(edge.label.len());
            node = edge.dest;
        }
        (node, view)
    }

    /// Test whether the position `part + t` already exists below `input`,
    /// materializing an explicit node for it when it does not.
    ///
    /// Returns `(endpoint, node)`: `endpoint` is true when `part + t` is
    /// already present (explicitly or implicitly), and `node` is where the
    /// caller should hang a new leaf otherwise. `remainder` is the whole
    /// yet-unwritten tail of the sequence being inserted, used to label
    /// edges; `id` is recorded when an existing destination or a split
    /// turns out to spell exactly the inserted suffix.
    fn test_and_split(
        &mut self,
        input: NodeId,
        part: Key<E>,
        t: &E,
        remainder: &Key<E>,
        id: &I,
    ) -> (bool, NodeId) {
        let (node, str_) = self.canonize(input, part);

        if !str_.is_empty() {
            // the locus sits mid-label on the edge starting with str_[0]
            let eid = self
                .arena
                .child(node, str_.at(0))
                .expect("canonized remainder must start an existing edge");
            let k = str_.len();
            let label = &self.arena.edge(eid).label;
            debug_assert!(label.has_prefix(&str_));

            if label.len() > k && super::key::elem_eq(label.at(k), t) {
                // part + t is an implicit position on this edge
                return (true, node);
            }

            // split: the existing edge keeps the tail, a new edge takes
            // the matched head
            let tail = label.substr(k);
            let new_node = self.arena.fresh_node();
            let new_edge = self.arena.fresh_edge(str_.clone(), new_node);
            self.arena.edge_mut(eid).label = tail.clone();
            self.arena.attach(new_node, tail.at(0).clone(), eid);
            self.arena.attach(node, str_.at(0).clone(), new_edge);
            (false, new_node)
        } else {
            let Some(eid) = self.arena.child(node, t) else {
                // no t-transition from node
                return (false, node);
            };
            let label = self.arena.edge(eid).label.clone();

            if *remainder == label {
                // the whole remaining suffix already exists
                let dest = self.arena.edge(eid).dest;
                self.arena.add_ref(dest, id.clone());
                (true, node)
            } else if remainder.has_prefix(&label) {
                (true, node)
            } else if label.has_prefix(remainder) {
                // the remaining suffix ends inside this edge: split, and
                // the new interior node carries the id
                let new_node = self.arena.fresh_node();
                self.arena.add_ref(new_node, id.clone());

                let tail = label.substr(remainder.len());
                let new_edge = self.arena.fresh_edge(remainder.clone(), new_node);
                self.arena.edge_mut(eid).label = tail.clone();
                self.arena.attach(new_node, tail.at(0).clone(), eid);
                self.arena.attach(node, t.clone(), new_edge);
                (false, node)
            } else {
                // shares a shorter prefix only; nothing to do here
                (true, node)
            }
        }
    }

    /// Thread the newest element of the insertion (the last element of
    /// `part`) through every suffix of the text read so far, creating
    /// leaves and suffix links until an endpoint is reached.
    ///
    /// Returns the active point for the text read so far: the deepest
    /// explicit node on its path and the remainder hanging off that node.
    fn update(&mut self, input: NodeId, part: &Key<E>, rest: Key<E>, id: &I) -> (NodeId, Key<E>) {
        debug_assert!(!part.is_empty());
        let new_ch = part.at(part.len() - 1).clone();

        let mut input = input;
        let mut tmp = part.clone();
        let mut old_root = self.root;

        let (mut endpoint, mut node) =
            self.test_and_split(input, part.drop_last(), &new_ch, &rest, id);

        while !endpoint {
            // a deeper node may already exist here, put there by an
            // earlier sequence; adopt it instead of growing a leaf
            let leaf = match self.arena.child(node, &new_ch) {
                Some(eid) => self.arena.edge(eid).dest,
                None => {
                    let leaf = self.arena.fresh_node();
                    self.arena.add_ref(leaf, id.clone());
                    let edge = self.arena.fresh_edge(rest.clone(), leaf);
                    self.arena.attach(node, new_ch.clone(), edge);
                    leaf
                }
            };

            if self.active_leaf != self.root {
                self.arena.node_mut(self.active_leaf).suffix = Some(leaf);
            }
            self.active_leaf = leaf;

            if old_root != self.root {
                self.arena.node_mut(old_root).suffix = Some(node);
            }
            old_root = node;

            match self.arena.node(input).suffix {
                None => {
                    debug_assert_eq!(input, self.root);
                    tmp = tmp.substr(1);
                }
                Some(sfx) => {
                    let (n, str_) = self.canonize(sfx, tmp.drop_last());
                    input = n;
                    // the element just past str_ in the backing buffer is
                    // new_ch, so growing the view re-appends it
                    tmp = str_.extended();
                }
            }

            let (e, n) = self.test_and_split(input, tmp.drop_last(), &new_ch, &rest, id);
            endpoint = e;
            node = n;
        }

        if old_root != self.root {
            self.arena.node_mut(old_root).suffix = Some(node);
        }

        (input, tmp)
    }
}

impl<E: Ord + Clone, I: Ord + Clone> Default for SuffixTree<E, I> {
    fn default() -> Self {
        Self::new()
    }
}
