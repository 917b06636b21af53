//! Types for the document text layer.

use serde::{Deserialize, Serialize};

/// Unique identifier for a document in the index
pub type DocId = u32;

/// Configuration for document ingestion and querying
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextIndexConfig {
    /// Fold content and queries to ASCII lowercase (default: true)
    pub case_insensitive: bool,
    /// Maximum document size to index (bytes, default: 10MB);
    /// larger documents are excluded
    pub max_doc_size: u64,
    /// Exclude documents that look binary (default: true)
    pub skip_binary: bool,
    /// Number of query results kept in the LRU cache (default: 256)
    pub query_cache_size: usize,
}

impl Default for TextIndexConfig {
    fn default() -> Self {
        Self {
            case_insensitive: true,
            max_doc_size: 10 * 1024 * 1024, // 10MB
            skip_binary: true,
            query_cache_size: 256,
        }
    }
}

/// Point-in-time snapshot of what the index holds
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TextIndexMeta {
    /// Number of documents indexed
    pub doc_count: u32,
    /// Number of documents excluded (too large, binary)
    pub excluded_count: u32,
    /// Total size of indexed document content, before folding
    pub total_text_size: u64,
    /// Whether the index was built case-insensitive
    pub case_insensitive: bool,
}
