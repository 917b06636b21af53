//! Byte-oriented document indexing on top of the suffix tree.
//!
//! This module adapts the generic engine to the common case: documents
//! are byte buffers identified by a [`DocId`], queries are byte strings,
//! and results are compressed doc-id bitmaps.
//!
//! - [`index`] - The [`TextIndex`] itself (ingestion, search, caching)
//! - [`types`] - Doc ids, configuration, and metadata snapshots
//!
//! ## Usage
//!
//! ```
//! use sfxi::text::TextIndex;
//!
//! let mut index = TextIndex::new();
//! index.add_document(1, b"fn main() { println!(\"hello\"); }").unwrap();
//! index.add_document(2, b"fn helper() {}").unwrap();
//!
//! let hits = index.search(b"fn ");
//! assert!(hits.contains(1) && hits.contains(2));
//! ```

pub mod index;
pub mod types;

pub use index::TextIndex;
pub use types::{DocId, TextIndexConfig, TextIndexMeta};
