//! Load-once store for the Hinglish vocabulary and keyword-synonym map.

use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;
use tracing::info;

pub const LEXICON_FILE: &str = "hinglish_words.json";
pub const SYNONYM_FILE: &str = "keyword_synonyms.json";

/// Errors raised while loading lexicon files. Fatal at startup.
#[derive(Debug, Error)]
pub enum LexiconError {
    #[error("cannot read lexicon file '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("lexicon file '{path}' is malformed: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("synonym list for '{trigger}' in '{path}' is not an array of strings: {source}")]
    BadSynonyms {
        path: String,
        trigger: String,
        #[source]
        source: serde_json::Error,
    },
}

/// One trigger keyword and the synonym phrases appended when it fires.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynonymRule {
    pub trigger: String,
    pub synonyms: Vec<String>,
}

/// Hinglish→English token map plus the ordered keyword-synonym rules.
#[derive(Debug, Clone)]
pub struct LexiconStore {
    entries: HashMap<String, String>,
    synonym_rules: Vec<SynonymRule>,
}

impl LexiconStore {
    /// Load `hinglish_words.json` and `keyword_synonyms.json` from a directory.
    pub fn load_dir(dir: &Path) -> Result<Self, LexiconError> {
        let lexicon_path = dir.join(LEXICON_FILE);
        let lexicon = std::fs::read_to_string(&lexicon_path).map_err(|source| {
            LexiconError::Read {
                path: lexicon_path.display().to_string(),
                source,
            }
        })?;

        let synonym_path = dir.join(SYNONYM_FILE);
        let synonyms = std::fs::read_to_string(&synonym_path).map_err(|source| {
            LexiconError::Read {
                path: synonym_path.display().to_string(),
                source,
            }
        })?;

        Self::from_sources(&lexicon, &synonyms)
    }

    /// Load the lexicon compiled into the binary.
    pub fn bundled() -> Result<Self, LexiconError> {
        Self::from_sources(
            include_str!("../data/hinglish_words.json"),
            include_str!("../data/keyword_synonyms.json"),
        )
    }

    fn from_sources(lexicon_json: &str, synonyms_json: &str) -> Result<Self, LexiconError> {
        let entries: HashMap<String, String> =
            serde_json::from_str(lexicon_json).map_err(|source| LexiconError::Parse {
                path: LEXICON_FILE.to_string(),
                source,
            })?;

        // serde_json is built with `preserve_order`, so iterating the map
        // yields rules in file order. Expansion applies them in that order.
        let raw_rules: serde_json::Map<String, serde_json::Value> =
            serde_json::from_str(synonyms_json).map_err(|source| LexiconError::Parse {
                path: SYNONYM_FILE.to_string(),
                source,
            })?;

        let mut synonym_rules = Vec::with_capacity(raw_rules.len());
        for (trigger, value) in raw_rules {
            let synonyms: Vec<String> =
                serde_json::from_value(value).map_err(|source| LexiconError::BadSynonyms {
                    path: SYNONYM_FILE.to_string(),
                    trigger: trigger.clone(),
                    source,
                })?;
            synonym_rules.push(SynonymRule { trigger, synonyms });
        }

        info!(
            "Loaded {} lexicon entries and {} synonym rules",
            entries.len(),
            synonym_rules.len()
        );

        Ok(Self {
            entries,
            synonym_rules,
        })
    }

    /// English equivalent of a lowercase Hinglish token, if mapped.
    #[must_use]
    pub fn translate(&self, token: &str) -> Option<&str> {
        self.entries.get(token).map(String::as_str)
    }

    /// Whether a token is part of the Hinglish vocabulary.
    #[must_use]
    pub fn contains(&self, token: &str) -> bool {
        self.entries.contains_key(token)
    }

    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// Synonym rules in map-defined order.
    #[must_use]
    pub fn synonym_rules(&self) -> &[SynonymRule] {
        &self.synonym_rules
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn bundled_lexicon_loads() {
        let store = LexiconStore::bundled().expect("bundled lexicon must load");
        assert!(store.entry_count() > 0);
        assert_eq!(store.translate("bina"), Some("without"));
        assert_eq!(store.translate("kya"), Some("what"));
        assert!(store.contains("hai"));
        // English legal terms must not appear in the Hinglish vocabulary.
        assert!(!store.contains("police"));
        assert!(!store.contains("warrant"));
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn synonym_rules_keep_file_order() {
        let store = LexiconStore::bundled().expect("bundled lexicon must load");
        let triggers: Vec<&str> = store
            .synonym_rules()
            .iter()
            .map(|r| r.trigger.as_str())
            .collect();
        assert_eq!(
            triggers,
            vec!["police", "phone", "arrest", "warrant", "cyber", "privacy"]
        );
        assert_eq!(
            store.synonym_rules()[0].synonyms,
            vec!["investigating officer", "law enforcement"]
        );
    }

    #[test]
    fn malformed_synonym_value_is_fatal() {
        let result = LexiconStore::from_sources("{}", r#"{"police": "not-an-array"}"#);
        assert!(
            matches!(result, Err(LexiconError::BadSynonyms { trigger, .. }) if trigger == "police")
        );
    }

    #[test]
    fn non_object_lexicon_is_fatal() {
        let result = LexiconStore::from_sources("[1,2,3]", "{}");
        assert!(matches!(result, Err(LexiconError::Parse { path, .. }) if path == LEXICON_FILE));
    }
}
