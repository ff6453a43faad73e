//! Hinglish/English query classification.

use nyaya_corpus::LexiconStore;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Lexicon hits required before a query counts as Hinglish. A single
/// loanword inside an otherwise English sentence must not flip the label.
pub const HINGLISH_HIT_THRESHOLD: usize = 2;

#[expect(clippy::expect_used, reason = "Hardcoded pattern is known valid")]
static ALPHABETIC_RUN: Lazy<Regex> = Lazy::new(|| {
    Regex::new("[a-zA-Z]+").expect("Hardcoded regex pattern must compile")
});

/// The detected language of a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Language {
    #[default]
    English = 0,
    Hinglish = 1,
}

impl Language {
    #[must_use]
    pub const fn as_str(&self) -> &str {
        match self {
            Self::English => "english",
            Self::Hinglish => "hinglish",
        }
    }
}

/// Counts how many alphabetic runs of the query belong to the Hinglish
/// vocabulary.
///
/// Runs on the raw query, before translation: the translator replaces
/// exactly the tokens being counted, so translated text would always
/// report English.
pub struct LanguageDetector {
    lexicon: Arc<LexiconStore>,
}

impl LanguageDetector {
    #[must_use]
    pub const fn new(lexicon: Arc<LexiconStore>) -> Self {
        Self { lexicon }
    }

    /// Number of alphabetic runs present in the Hinglish vocabulary.
    #[must_use]
    pub fn lexicon_hits(&self, text: &str) -> usize {
        let lower = text.to_lowercase();
        ALPHABETIC_RUN
            .find_iter(&lower)
            .filter(|run| self.lexicon.contains(run.as_str()))
            .count()
    }

    #[must_use]
    pub fn detect(&self, text: &str) -> Language {
        if self.lexicon_hits(text) >= HINGLISH_HIT_THRESHOLD {
            Language::Hinglish
        } else {
            Language::English
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn detector() -> LanguageDetector {
        LanguageDetector::new(Arc::new(
            LexiconStore::bundled().expect("bundled lexicon must load"),
        ))
    }

    #[test]
    fn hinglish_query_detected() {
        let d = detector();
        // bina, kar, hai, kya are all vocabulary hits.
        assert_eq!(
            d.lexicon_hits("police bina warrant phone check kar sakti hai kya"),
            4
        );
        assert_eq!(
            d.detect("police bina warrant phone check kar sakti hai kya"),
            Language::Hinglish
        );
    }

    #[test]
    fn zero_hits_is_english() {
        let d = detector();
        assert_eq!(
            d.lexicon_hits("Can police search my phone without a warrant?"),
            0
        );
        assert_eq!(
            d.detect("Can police search my phone without a warrant?"),
            Language::English
        );
    }

    #[test]
    fn one_hit_stays_english() {
        let d = detector();
        assert_eq!(d.lexicon_hits("what is jamanat in criminal cases"), 1);
        assert_eq!(
            d.detect("what is jamanat in criminal cases"),
            Language::English
        );
    }

    #[test]
    fn threshold_hits_flip_to_hinglish() {
        let d = detector();
        assert_eq!(d.lexicon_hits("jamanat kaise milti hai"), 3);
        assert_eq!(d.detect("jamanat kaise milti hai"), Language::Hinglish);
    }

    #[test]
    fn punctuation_does_not_hide_hits() {
        let d = detector();
        // Tokenization is on alphabetic runs, so "hai?" still counts.
        assert_eq!(d.detect("saza kya hai?"), Language::Hinglish);
    }

    #[test]
    #[expect(clippy::unwrap_used, reason = "Test failure should panic with context")]
    fn language_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&Language::Hinglish).unwrap(),
            "\"hinglish\""
        );
        assert_eq!(Language::English.as_str(), "english");
    }
}
