//! Hinglish to English query normalization.

use nyaya_corpus::LexiconStore;
use std::sync::Arc;

/// Token-wise Hinglish replacement.
///
/// Lowercases the text, strips the punctuation characters `?` `!` `.`,
/// splits on whitespace and swaps each token for its lexicon mapping.
/// Tokens absent from the lexicon pass through unchanged, so pure English
/// input survives the pass intact.
pub struct Translator {
    lexicon: Arc<LexiconStore>,
}

impl Translator {
    #[must_use]
    pub const fn new(lexicon: Arc<LexiconStore>) -> Self {
        Self { lexicon }
    }

    /// Normalize a raw query. Pure and total: never fails, absent lexicon
    /// entries are not errors.
    #[must_use]
    pub fn normalize(&self, text: &str) -> String {
        let cleaned = text.to_lowercase().replace(['?', '!', '.'], "");
        let translated: Vec<&str> = cleaned
            .split_whitespace()
            .map(|token| self.lexicon.translate(token).unwrap_or(token))
            .collect();
        translated.join(" ")
    }
}
