//! Rule-based relevance ranking applied after candidate retrieval.
//!
//! The ranker never adds documents. It scores what the retriever found,
//! reorders by score, and keeps the best [`MAX_RANKED`].

use nyaya_core::{Document, ScoredDocument};

/// Documents kept after ranking.
pub const MAX_RANKED: usize = 4;

/// Document-side condition checked by a boost rule.
#[derive(Debug, Clone, Copy)]
enum RuleTarget {
    DomainEquals(&'static str),
    SourceContains(&'static str),
}

impl RuleTarget {
    fn matches(self, document: &Document) -> bool {
        match self {
            Self::DomainEquals(domain) => document.domain == domain,
            Self::SourceContains(fragment) => document.source.contains(fragment),
        }
    }
}

/// Query keyword, document condition, and the boost applied when both hold.
const BOOST_RULES: &[(&str, RuleTarget, i32)] = &[
    ("police", RuleTarget::DomainEquals("Criminal Procedure"), 3),
    ("arrest", RuleTarget::DomainEquals("Criminal Procedure"), 2),
    ("cyber", RuleTarget::DomainEquals("Cyber Law"), 3),
    ("privacy", RuleTarget::SourceContains("Constitution"), 3),
];

/// Trait for ranking retrieved candidates against a query.
pub trait DocumentRanker: Send + Sync {
    /// Score and reorder candidates, keeping at most [`MAX_RANKED`].
    fn rank(&self, candidates: Vec<Document>, query: &str) -> Vec<ScoredDocument>;
}

/// Keyword-and-domain heuristic ranker.
///
/// Boosts are additive across rules. Sorting is stable, so equally scored
/// documents keep their retrieval order.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleBasedRanker;

impl RuleBasedRanker {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn score(document: &Document, query_lower: &str) -> i32 {
        let mut score = 0;
        for &(keyword, target, boost) in BOOST_RULES {
            if query_lower.contains(keyword) && target.matches(document) {
                score += boost;
            }
        }
        score
    }
}

impl DocumentRanker for RuleBasedRanker {
    fn rank(&self, candidates: Vec<Document>, query: &str) -> Vec<ScoredDocument> {
        let query_lower = query.to_lowercase();
        let mut scored: Vec<ScoredDocument> = candidates
            .into_iter()
            .map(|document| ScoredDocument {
                score: Self::score(&document, &query_lower),
                document,
            })
            .collect();
        scored.sort_by(|a, b| b.score.cmp(&a.score));
        scored.truncate(MAX_RANKED);
        scored
    }
}
