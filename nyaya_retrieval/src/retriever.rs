//! Token-overlap candidate retrieval over the statute corpus.

use std::sync::Arc;

use nyaya_core::Document;
use nyaya_corpus::CorpusStore;
use rayon::prelude::*;
use tracing::debug;

/// Scans the corpus for documents sharing at least one token with the query.
pub struct Retriever {
    corpus: Arc<CorpusStore>,
}

impl Retriever {
    #[must_use]
    pub const fn new(corpus: Arc<CorpusStore>) -> Self {
        Self { corpus }
    }

    /// Candidate documents for `query`, in corpus order, at most `top_k`.
    ///
    /// A document qualifies when any whitespace token of the lowercased
    /// query occurs as a substring of its lowercased title or content.
    /// Parallel filtering keeps the original document order.
    #[must_use]
    pub fn retrieve(&self, query: &str, top_k: usize) -> Vec<Document> {
        let query_lower = query.to_lowercase();
        let tokens: Vec<&str> = query_lower.split_whitespace().collect();
        if tokens.is_empty() {
            return Vec::new();
        }

        let mut candidates: Vec<Document> = self
            .corpus
            .documents()
            .par_iter()
            .filter(|document| {
                let text = document.search_text();
                tokens.iter().any(|token| text.contains(token))
            })
            .cloned()
            .collect();
        candidates.truncate(top_k);

        debug!(
            "Retrieved {} candidates for query: {}",
            candidates.len(),
            query
        );
        candidates
    }

    #[must_use]
    pub fn corpus(&self) -> &CorpusStore {
        &self.corpus
    }
}
