//! Prompt assembly for the answering model.
//!
//! The prompt always carries the raw user question, never the normalized
//! or expanded form. Expansion helps retrieval; the model should see what
//! the user actually asked.

use nyaya_core::{ConversationTurn, ScoredDocument};
use nyaya_nlp::{Intent, Language};

const ENGLISH_DIRECTIVE: &str = "Answer in simple English.";
const HINGLISH_DIRECTIVE: &str = "The user asked in Hinglish. Answer in simple English and keep \
                                  familiar Hindi legal terms where they aid understanding.";

/// Assembles the grounded prompt from the pipeline's outputs.
#[derive(Debug, Clone, Copy, Default)]
pub struct PromptBuilder;

impl PromptBuilder {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Render the full prompt.
    ///
    /// Sections appear in a fixed order: persona, question category,
    /// transcript (only when history is non-empty), user question,
    /// retrieved provisions, answering constraints. The provisions header
    /// is kept even when nothing was retrieved.
    #[must_use]
    pub fn build(
        &self,
        query: &str,
        language: Language,
        intent: Intent,
        history: &[ConversationTurn],
        documents: &[ScoredDocument],
    ) -> String {
        let transcript = Self::render_transcript(history);
        let context = Self::render_context(documents);
        let category = intent.as_str();
        let directive = language_directive(language);

        format!(
            "You are an Indian legal information assistant.\n\nQuestion category: {category}\n\n{transcript}User Question:\n{query}\n\nRelevant Legal Provisions:\n{context}\n\nExplain the legal position in simple language.\nDo not give legal advice.\nDo not invent sections.\n{directive}\n"
        )
    }

    fn render_transcript(history: &[ConversationTurn]) -> String {
        if history.is_empty() {
            return String::new();
        }
        let lines: Vec<String> = history
            .iter()
            .map(|turn| format!("{}: {}", turn.role.transcript_label(), turn.content))
            .collect();
        format!("Conversation so far:\n{}\n\n", lines.join("\n"))
    }

    fn render_context(documents: &[ScoredDocument]) -> String {
        let blocks: Vec<String> = documents
            .iter()
            .map(|scored| {
                let doc = &scored.document;
                format!("\n{}\nSource: {}\n{}\n", doc.title, doc.source, doc.content)
            })
            .collect();
        blocks.join("\n")
    }
}

const fn language_directive(language: Language) -> &'static str {
    match language {
        Language::English => ENGLISH_DIRECTIVE,
        Language::Hinglish => HINGLISH_DIRECTIVE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nyaya_core::Document;

    fn scored(title: &str, source: &str, content: &str) -> ScoredDocument {
        ScoredDocument {
            document: Document {
                section_id: "1".to_string(),
                title: title.to_string(),
                source: source.to_string(),
                domain: "Criminal Law".to_string(),
                content: content.to_string(),
            },
            score: 0,
        }
    }

    #[test]
    #[expect(clippy::unwrap_used, reason = "Test failure should panic with context")]
    fn renders_sections_in_order() {
        let docs = [scored(
            "Theft",
            "Indian Penal Code, 1860",
            "Whoever intends to take dishonestly any movable property.",
        )];
        let prompt = PromptBuilder::new().build(
            "What is theft?",
            Language::English,
            Intent::GeneralLegalQuery,
            &[],
            &docs,
        );

        assert!(prompt.starts_with("You are an Indian legal information assistant.\n"));
        assert!(prompt.contains("Question category: general_legal_query\n"));
        assert!(prompt.contains("User Question:\nWhat is theft?\n"));
        assert!(prompt.contains("\nTheft\nSource: Indian Penal Code, 1860\nWhoever intends"));
        assert!(prompt.contains("Do not give legal advice.\n"));
        assert!(prompt.ends_with("Answer in simple English.\n"));

        let category = prompt.find("Question category:").unwrap();
        let question = prompt.find("User Question:").unwrap();
        let provisions = prompt.find("Relevant Legal Provisions:").unwrap();
        assert!(category < question && question < provisions);
    }

    #[test]
    fn transcript_renders_labelled_turns() {
        let history = [
            ConversationTurn::user("can police arrest me at night"),
            ConversationTurn::assistant("Yes, arrest powers are not limited to daytime."),
        ];
        let prompt = PromptBuilder::new().build(
            "what about searches?",
            Language::English,
            Intent::PolicePowers,
            &history,
            &[],
        );

        assert!(prompt.contains(
            "Conversation so far:\nUser: can police arrest me at night\nAssistant: Yes, arrest powers are not limited to daytime.\n\n"
        ));
    }

    #[test]
    fn transcript_omitted_without_history() {
        let prompt = PromptBuilder::new().build(
            "what is theft",
            Language::English,
            Intent::GeneralLegalQuery,
            &[],
            &[],
        );
        assert!(!prompt.contains("Conversation so far:"));
    }

    #[test]
    fn empty_retrieval_keeps_provisions_header() {
        let prompt = PromptBuilder::new().build(
            "zzz",
            Language::English,
            Intent::GeneralLegalQuery,
            &[],
            &[],
        );
        assert!(prompt.contains("Relevant Legal Provisions:\n\n\nExplain the legal position"));
    }

    #[test]
    fn hinglish_gets_its_own_directive() {
        let prompt = PromptBuilder::new().build(
            "police bina warrant ghar me aa sakti hai kya",
            Language::Hinglish,
            Intent::PolicePowers,
            &[],
            &[],
        );
        assert!(prompt.contains("The user asked in Hinglish."));
        assert!(!prompt.ends_with("Answer in simple English.\n"));
    }

    #[test]
    fn raw_question_is_preserved_verbatim() {
        let prompt = PromptBuilder::new().build(
            "Police bina warrant phone check kar sakti hai kya?",
            Language::Hinglish,
            Intent::PolicePowers,
            &[],
            &[],
        );
        assert!(prompt.contains("User Question:\nPolice bina warrant phone check kar sakti hai kya?\n"));
    }

    #[test]
    fn same_inputs_render_the_same_prompt() {
        let docs = [scored("Theft", "Indian Penal Code, 1860", "Whoever intends.")];
        let history = [ConversationTurn::user("earlier question")];
        let build = || {
            PromptBuilder::new().build(
                "what is theft",
                Language::English,
                Intent::GeneralLegalQuery,
                &history,
                &docs,
            )
        };
        assert_eq!(build(), build());
    }
}
