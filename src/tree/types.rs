use std::collections::BTreeSet;
use thiserror::Error;

/// Stable handle to a node in the arena.
///
/// Handles index into growable storage, so they survive arena growth and
/// may be stored freely (children maps, suffix links) without any
/// ownership discipline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) u32);

/// Stable handle to an edge in the arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EdgeId(pub(crate) u32);

/// Errors surfaced by the suffix tree engine.
///
/// Both kinds are precondition violations raised before any mutation; the
/// tree is left exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TreeError {
    /// Identifiers must be non-decreasing across calls to `put`.
    #[error("insert id is less than a previously inserted one")]
    InvalidInsertOrder,

    /// `compute_count` has not run since the last `put`.
    #[error("result counts are stale; call compute_count() after the last put")]
    CountNotComputed,
}

/// Result of a counted search: the exact number of identifiers matching
/// the query anywhere in the tree, plus a bounded sample of them.
///
/// `total` is read from counts cached by
/// [`SuffixTree::compute_count`](crate::tree::SuffixTree::compute_count);
/// `matches` is harvested on the fly, so `matches.len() <= total` whenever
/// a cap is in effect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountedResults<I> {
    /// Number of distinct identifiers reachable from the query locus.
    pub total: usize,
    /// At most `cap` of those identifiers (all of them for a negative cap).
    pub matches: BTreeSet<I>,
}
