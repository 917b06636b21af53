//! # SFXI - Generalized Suffix Tree Index
//!
//! SFXI is an in-memory substring index: it maps a growing collection of
//! input sequences to integer identifiers and answers, for any query
//! sequence, the set of identifiers whose sequence contains the query as a
//! substring. Lookups run in time proportional to the query length,
//! independent of how much has been indexed.
//!
//! ## Architecture
//!
//! The crate is organized into these main modules:
//!
//! - [`tree`] - The generic suffix tree engine (arena, key views,
//!   on-line construction, search)
//! - [`text`] - A byte-oriented document layer on top of the engine
//!   (case folding, binary detection, bitmap results, query caching)
//!
//! ## Quick Start
//!
//! ```
//! use sfxi::tree::SuffixTree;
//!
//! let mut tree: SuffixTree<u8, u32> = SuffixTree::new();
//! tree.put("bethesdahomeforboys".as_bytes(), 26).unwrap();
//! tree.put("bethesda".as_bytes(), 27).unwrap();
//!
//! let hits = tree.search("bethesda".as_bytes());
//! assert!(hits.contains(&26) && hits.contains(&27));
//! ```
//!
//! ## Performance
//!
//! Construction is on-line (Ukkonen-style) and amortised linear in the
//! input length: each `put` threads new suffixes through the existing tree
//! using suffix links, so many sequences share one structure. Edge labels
//! are offset views into shared buffers, never copies, which keeps edge
//! splits O(1). Search is a single root-to-locus descent followed by a
//! bounded harvest of the subtree's identifiers.

pub mod text;
pub mod tree;

mod trace;
