//! Keyword expansion for retrieval recall.

use nyaya_corpus::LexiconStore;
use std::sync::Arc;

/// Appends domain synonyms when a trigger keyword occurs in the query.
///
/// Rules fire on substring matches against the original query and apply
/// in map-defined order. Expansion is strictly additive and NOT
/// idempotent: re-running on its own output re-fires the same triggers,
/// so the pipeline invokes it exactly once per query.
pub struct KeywordExpander {
    lexicon: Arc<LexiconStore>,
}

impl KeywordExpander {
    #[must_use]
    pub const fn new(lexicon: Arc<LexiconStore>) -> Self {
        Self { lexicon }
    }

    /// Append space-joined synonyms for every trigger found in `query`.
    #[must_use]
    pub fn expand(&self, query: &str) -> String {
        let mut expanded = query.to_string();
        for rule in self.lexicon.synonym_rules() {
            if query.contains(&rule.trigger) {
                expanded.push(' ');
                expanded.push_str(&rule.synonyms.join(" "));
            }
        }
        expanded
    }
}
