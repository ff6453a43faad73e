//! The end-to-end question pipeline.
//!
//! Stages run in a fixed order: language detection on the raw text,
//! normalization, keyword expansion, intent classification, retrieval,
//! ranking, prompt assembly. Retrieval and ranking see the expanded
//! query; the prompt carries the raw one.

use std::sync::Arc;

use nyaya_conversation::{HistoryConfig, HistoryWindow};
use nyaya_core::{
    ANSWER_SYSTEM_PROMPT, AnswerProvider, ConversationTurn, DocumentRef, PipelineConfig,
};
use nyaya_corpus::{CorpusStore, LexiconStore};
use nyaya_nlp::{
    Intent, IntentClassifier, KeywordExpander, Language, LanguageDetector, Translator,
};
use serde::Serialize;
use tracing::{debug, info};

use crate::prompt::PromptBuilder;
use crate::ranker::{DocumentRanker, RuleBasedRanker};
use crate::retriever::Retriever;

/// A user question after query understanding.
#[derive(Debug, Clone, Serialize)]
pub struct Query {
    /// Verbatim user input.
    pub raw_text: String,
    /// Lowercased, punctuation-stripped, lexicon-translated form.
    pub normalized_text: String,
    /// Normalized form with synonym groups appended.
    pub expanded_text: String,
    pub detected_language: Language,
    pub intent: Intent,
}

/// Everything the pipeline produced for one question.
#[derive(Debug, Clone, Serialize)]
pub struct AskReport {
    pub query: String,
    pub detected_language: Language,
    pub intent: Intent,
    /// Title and source of each document the prompt was grounded on.
    pub selected_documents: Vec<DocumentRef>,
    pub prompt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
}

/// Runs the pipeline over a shared lexicon and corpus.
pub struct QueryEngine {
    translator: Translator,
    detector: LanguageDetector,
    expander: KeywordExpander,
    classifier: IntentClassifier,
    retriever: Retriever,
    ranker: Box<dyn DocumentRanker>,
    prompt_builder: PromptBuilder,
    history_window: HistoryWindow,
    top_k: usize,
}

impl QueryEngine {
    #[must_use]
    pub fn new(
        lexicon: Arc<LexiconStore>,
        corpus: Arc<CorpusStore>,
        config: &PipelineConfig,
    ) -> Self {
        Self {
            translator: Translator::new(Arc::clone(&lexicon)),
            detector: LanguageDetector::new(Arc::clone(&lexicon)),
            expander: KeywordExpander::new(lexicon),
            classifier: IntentClassifier::new(),
            retriever: Retriever::new(corpus),
            ranker: Box::new(RuleBasedRanker::new()),
            prompt_builder: PromptBuilder::new(),
            history_window: HistoryWindow::with_config(
                HistoryConfig::default().with_max_turns(config.history_turns),
            ),
            top_k: config.top_k,
        }
    }

    /// Replace the default rule-based ranker.
    #[must_use]
    pub fn with_ranker<R>(mut self, ranker: R) -> Self
    where
        R: DocumentRanker + 'static,
    {
        self.ranker = Box::new(ranker);
        self
    }

    /// Override how many candidates retrieval keeps.
    #[must_use]
    pub const fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    /// Override how many history turns the prompt transcript may carry.
    #[must_use]
    pub fn with_history_turns(mut self, turns: usize) -> Self {
        self.history_window =
            HistoryWindow::with_config(HistoryConfig::default().with_max_turns(turns));
        self
    }

    /// Query understanding only: detection, normalization, expansion, intent.
    ///
    /// Detection runs on the raw text. Normalization would erase the
    /// Hinglish tokens detection counts.
    #[must_use]
    pub fn understand(&self, raw_query: &str) -> Query {
        let detected_language = self.detector.detect(raw_query);
        let normalized_text = self.translator.normalize(raw_query);
        let expanded_text = self.expander.expand(&normalized_text);
        let intent = self.classifier.classify(&expanded_text);

        debug!("Normalized query: {}", normalized_text);
        info!(
            "Detected language: {}, intent: {} for query: {}",
            detected_language.as_str(),
            intent.as_str(),
            raw_query
        );

        Query {
            raw_text: raw_query.to_string(),
            normalized_text,
            expanded_text,
            detected_language,
            intent,
        }
    }

    /// Run everything short of answer generation.
    #[must_use]
    pub fn analyze(&self, raw_query: &str, history: &[ConversationTurn]) -> AskReport {
        let query = self.understand(raw_query);

        let candidates = self.retriever.retrieve(&query.expanded_text, self.top_k);
        let ranked = self.ranker.rank(candidates, &query.expanded_text);
        info!("Selected {} documents for query: {}", ranked.len(), raw_query);

        let window = self.history_window.select(history);
        let prompt = self.prompt_builder.build(
            &query.raw_text,
            query.detected_language,
            query.intent,
            window,
            &ranked,
        );

        let selected_documents = ranked
            .iter()
            .map(|scored| DocumentRef::from(&scored.document))
            .collect();

        AskReport {
            query: query.raw_text,
            detected_language: query.detected_language,
            intent: query.intent,
            selected_documents,
            prompt,
            answer: None,
        }
    }

    /// Full pipeline: analyze, then generate an answer through `provider`.
    pub async fn ask(
        &self,
        provider: &dyn AnswerProvider,
        model: &str,
        raw_query: &str,
        history: &[ConversationTurn],
    ) -> anyhow::Result<AskReport> {
        let mut report = self.analyze(raw_query, history);

        let messages = [
            ConversationTurn::system(ANSWER_SYSTEM_PROMPT),
            ConversationTurn::user(report.prompt.clone()),
        ];
        let response = provider.complete(&messages, model).await?;
        report.answer = Some(response.content);
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[expect(clippy::unwrap_used, reason = "Test failure should panic with context")]
    fn engine() -> QueryEngine {
        QueryEngine::new(
            Arc::new(LexiconStore::bundled().unwrap()),
            Arc::new(CorpusStore::bundled().unwrap()),
            &PipelineConfig::default(),
        )
    }

    #[test]
    fn understand_stages_feed_each_other() {
        let query = engine().understand("Police bina warrant phone check kar sakti hai kya?");

        assert_eq!(query.detected_language, Language::Hinglish);
        assert_eq!(
            query.normalized_text,
            "police without warrant phone check do sakti is what"
        );
        assert!(query.expanded_text.starts_with(&query.normalized_text));
        assert!(query.expanded_text.contains("investigating officer"));
        assert_eq!(query.intent, Intent::PolicePowers);
    }

    #[test]
    fn analyze_fills_the_report() {
        let report = engine().analyze("Can police search my phone without a warrant?", &[]);

        assert_eq!(report.detected_language, Language::English);
        assert_eq!(report.intent, Intent::LegalityCheck);
        assert_eq!(report.selected_documents.len(), 4);
        assert_eq!(
            report.selected_documents[0].title,
            "When police may arrest without warrant"
        );
        assert!(report.prompt.contains("Do not give legal advice."));
        assert!(report.answer.is_none());
    }

    #[test]
    fn history_is_windowed_before_prompting() {
        let history: Vec<ConversationTurn> = (0..10)
            .map(|i| ConversationTurn::user(format!("question number {i}")))
            .collect();
        let report = engine().analyze("what is theft", &history);

        assert!(!report.prompt.contains("question number 3"));
        assert!(report.prompt.contains("question number 4"));
        assert!(report.prompt.contains("question number 9"));
    }

    #[test]
    fn top_k_override_caps_retrieval() {
        let report = engine().with_top_k(1).analyze("what is theft", &[]);

        assert_eq!(report.selected_documents.len(), 1);
    }

    #[test]
    fn history_turns_override_narrows_window() {
        let history: Vec<ConversationTurn> = (0..10)
            .map(|i| ConversationTurn::user(format!("question number {i}")))
            .collect();
        let report = engine()
            .with_history_turns(2)
            .analyze("what is theft", &history);

        assert!(!report.prompt.contains("question number 7"));
        assert!(report.prompt.contains("question number 8"));
        assert!(report.prompt.contains("question number 9"));
    }
}
