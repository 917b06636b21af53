//! The document index.
//!
//! [`TextIndex`] wraps a `SuffixTree<u8, DocId>` with the plumbing a
//! document search wants: content filtering (empty, over-sized, and
//! likely-binary documents are excluded), optional ASCII case folding,
//! parallel batch preparation, bitmap results, and an LRU cache of
//! recent unbounded queries. Insertion invalidates the cache; the
//! engine's non-decreasing doc-id rule applies unchanged.

use ahash::AHashMap;
use lru::LruCache;
use rayon::prelude::*;
use roaring::RoaringBitmap;
use std::num::NonZeroUsize;

use crate::trace::debug_log;
use crate::tree::{CountedResults, SuffixTree, TreeError};

use super::types::{DocId, TextIndexConfig, TextIndexMeta};

/// Outcome of preparing one document for indexing.
enum Prepared {
    /// Folded content ready for the tree, plus the original size.
    Index { content: Vec<u8>, size: u64 },
    /// Empty content; nothing to index, not worth counting.
    Skip,
    /// Over-sized or binary; counted against `excluded_count`.
    Exclude,
}

/// A substring index over byte documents.
pub struct TextIndex {
    tree: SuffixTree<u8, DocId>,
    config: TextIndexConfig,
    /// Indexed documents and their original sizes.
    docs: AHashMap<DocId, u64>,
    excluded: u32,
    total_text_size: u64,
    /// Unbounded query results, keyed by the folded query.
    cache: LruCache<Vec<u8>, RoaringBitmap>,
}

impl TextIndex {
    pub fn new() -> Self {
        Self::with_config(TextIndexConfig::default())
    }

    pub fn with_config(config: TextIndexConfig) -> Self {
        let cache_size =
            NonZeroUsize::new(config.query_cache_size).unwrap_or(NonZeroUsize::MIN);
        Self {
            tree: SuffixTree::new(),
            config,
            docs: AHashMap::new(),
            excluded: 0,
            total_text_size: 0,
            cache: LruCache::new(cache_size),
        }
    }

    /// Add a document to the index.
    ///
    /// Returns `Ok(true)` if the document was indexed, `Ok(false)` if it
    /// was skipped (empty, too large, or binary). Doc ids must be
    /// non-decreasing across calls, mirroring the engine's insert rule.
    pub fn add_document(&mut self, doc_id: DocId, content: &[u8]) -> Result<bool, TreeError> {
        match prepare(&self.config, content) {
            Prepared::Skip => Ok(false),
            Prepared::Exclude => {
                self.excluded += 1;
                debug_log!("add_document: doc_id={} excluded", doc_id);
                Ok(false)
            }
            Prepared::Index { content, size } => {
                self.insert(doc_id, content, size)?;
                Ok(true)
            }
        }
    }

    /// Add a batch of documents.
    ///
    /// Folding and filtering run in parallel; insertion stays sequential
    /// (the engine is single-writer). Returns the number of documents
    /// actually indexed.
    pub fn add_documents(&mut self, batch: Vec<(DocId, Vec<u8>)>) -> Result<usize, TreeError> {
        let config = self.config.clone();
        let prepared: Vec<(DocId, Prepared)> = batch
            .into_par_iter()
            .map(|(doc_id, content)| (doc_id, prepare(&config, &content)))
            .collect();

        let mut added = 0;
        for (doc_id, prep) in prepared {
            match prep {
                Prepared::Skip => {}
                Prepared::Exclude => self.excluded += 1,
                Prepared::Index { content, size } => {
                    self.insert(doc_id, content, size)?;
                    added += 1;
                }
            }
        }
        debug_log!("add_documents: added={} excluded={}", added, self.excluded);
        Ok(added)
    }

    fn insert(&mut self, doc_id: DocId, folded: Vec<u8>, size: u64) -> Result<(), TreeError> {
        self.tree.put(folded, doc_id)?;
        // re-adding an id replaces its size in the bookkeeping
        if let Some(old) = self.docs.insert(doc_id, size) {
            self.total_text_size -= old;
        }
        self.total_text_size += size;
        self.cache.clear();
        Ok(())
    }

    /// All documents containing `q` as a substring.
    ///
    /// Results for recent queries come from the LRU cache; the cache is
    /// cleared whenever a document is added.
    pub fn search(&mut self, q: &[u8]) -> RoaringBitmap {
        let q = self.fold_query(q);
        if let Some(hit) = self.cache.get(&q) {
            return hit.clone();
        }

        let bitmap: RoaringBitmap = self.tree.search(&q).into_iter().collect();
        self.cache.put(q, bitmap.clone());
        bitmap
    }

    /// Like [`search`](Self::search), but stops after `cap` documents
    /// (negative means unbounded). Capped results bypass the cache.
    pub fn search_capped(&self, q: &[u8], cap: i32) -> RoaringBitmap {
        let q = self.fold_query(q);
        self.tree.search_capped(&q, cap).into_iter().collect()
    }

    /// Counted search; requires [`compute_count`](Self::compute_count)
    /// to have run since the last insertion.
    pub fn search_with_count(
        &self,
        q: &[u8],
        cap: i32,
    ) -> Result<CountedResults<DocId>, TreeError> {
        let q = self.fold_query(q);
        self.tree.search_with_count(&q, cap)
    }

    /// Refresh the engine's cached result counts; returns the number of
    /// distinct documents reachable in the tree.
    pub fn compute_count(&mut self) -> usize {
        self.tree.compute_count()
    }

    pub fn doc_count(&self) -> usize {
        self.docs.len()
    }

    pub fn contains_doc(&self, doc_id: DocId) -> bool {
        self.docs.contains_key(&doc_id)
    }

    /// Snapshot of the index's bookkeeping.
    pub fn meta(&self) -> TextIndexMeta {
        TextIndexMeta {
            doc_count: self.docs.len() as u32,
            excluded_count: self.excluded,
            total_text_size: self.total_text_size,
            case_insensitive: self.config.case_insensitive,
        }
    }

    fn fold_query(&self, q: &[u8]) -> Vec<u8> {
        if self.config.case_insensitive {
            q.iter().map(|b| b.to_ascii_lowercase()).collect()
        } else {
            q.to_vec()
        }
    }
}

impl Default for TextIndex {
    fn default() -> Self {
        Self::new()
    }
}

fn prepare(config: &TextIndexConfig, content: &[u8]) -> Prepared {
    if content.is_empty() {
        return Prepared::Skip;
    }
    if content.len() as u64 > config.max_doc_size {
        return Prepared::Exclude;
    }
    if config.skip_binary && is_likely_binary(content) {
        return Prepared::Exclude;
    }

    let folded = if config.case_insensitive {
        content.iter().map(|b| b.to_ascii_lowercase()).collect()
    } else {
        content.to_vec()
    };
    Prepared::Index {
        content: folded,
        size: content.len() as u64,
    }
}

/// Heuristic binary detection over the first 8KB: any null byte, or more
/// than 10% of bytes outside printable ASCII, whitespace, and UTF-8
/// sequence ranges.
fn is_likely_binary(content: &[u8]) -> bool {
    let sample = &content[..content.len().min(8192)];

    if sample.contains(&0) {
        return true;
    }

    let non_text = sample
        .iter()
        .filter(|&&b| {
            !((0x20..=0x7E).contains(&b)
                || b == b'\n'
                || b == b'\r'
                || b == b'\t'
                || b >= 0x80)
        })
        .count();

    non_text > sample.len() / 10
}
