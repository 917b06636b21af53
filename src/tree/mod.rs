//! The generalized suffix tree engine.
//!
//! This module provides the core index structure:
//!
//! - [`key`] - Offset-based views into stored input sequences
//! - [`arena`] - Node and edge storage with stable handles
//! - [`build`] - On-line (Ukkonen-style) construction
//! - [`search`] - Locus descent and payload harvesting
//! - [`types`] - Handles, errors, and result types
//!
//! ## Structure
//!
//! The tree is a set of nodes connected by labelled edges. Labels are
//! views into the inserted sequences, never copies, and no two edges
//! leaving the same node start with the same element. A path of edge
//! labels read from the root spells a substring of at least one inserted
//! sequence; the identifiers of all sequences containing that substring
//! are reachable from the path's end node.
//!
//! Multiple independent sequences share one tree: every call to
//! [`SuffixTree::put`] carries its own identifier, and identifiers must be
//! non-decreasing across calls. All mutation happens inside `put`;
//! searches only read.
//!
//! ## Usage
//!
//! ```
//! use sfxi::tree::SuffixTree;
//!
//! let mut tree: SuffixTree<u8, u32> = SuffixTree::new();
//! tree.put("libertypike".as_bytes(), 0).unwrap();
//!
//! assert_eq!(tree.search("rtypi".as_bytes()).into_iter().collect::<Vec<_>>(), vec![0]);
//! assert!(tree.search("ypikefra".as_bytes()).is_empty());
//! ```

pub mod arena;
pub mod build;
pub mod key;
pub mod search;
pub mod types;

pub use build::SuffixTree;
pub use key::Key;
pub use types::{CountedResults, EdgeId, NodeId, TreeError};
