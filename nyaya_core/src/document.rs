//! Statute documents and the scored records produced by ranking.

use serde::{Deserialize, Serialize};

/// One statutory provision from a corpus file.
///
/// Immutable once loaded. Identity is `(source, section_id)`: the same
/// section number reappears across acts, so neither field alone is unique.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Document {
    /// Section or article number within the parent act, e.g. "41" or "Article 21".
    #[serde(rename = "section")]
    pub section_id: String,
    pub title: String,
    /// Parent act, e.g. "Code of Criminal Procedure, 1973".
    pub source: String,
    /// Legal domain label, e.g. "Criminal Procedure".
    pub domain: String,
    pub content: String,
}

impl Document {
    #[must_use]
    pub fn identity(&self) -> (&str, &str) {
        (&self.source, &self.section_id)
    }

    /// Text the retriever matches against: lowercased title and content.
    #[must_use]
    pub fn search_text(&self) -> String {
        format!("{} {}", self.title, self.content).to_lowercase()
    }
}

/// A retrieved document together with its heuristic relevance score.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredDocument {
    pub document: Document,
    pub score: i32,
}

/// Compact reference reported back to the caller in place of full text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DocumentRef {
    pub title: String,
    pub source: String,
}

impl From<&Document> for DocumentRef {
    fn from(doc: &Document) -> Self {
        Self {
            title: doc.title.clone(),
            source: doc.source.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Document {
        Document {
            section_id: "41".to_string(),
            title: "When police may arrest without warrant".to_string(),
            source: "Code of Criminal Procedure, 1973".to_string(),
            domain: "Criminal Procedure".to_string(),
            content: "Any police officer may arrest without an order from a Magistrate."
                .to_string(),
        }
    }

    #[test]
    #[expect(clippy::unwrap_used, reason = "Test failure should panic with context")]
    fn section_field_renames() {
        let doc: Document = serde_json::from_str(
            r#"{"section":"302","title":"Punishment for murder","source":"Indian Penal Code, 1860","domain":"Criminal Law","content":"Whoever commits murder shall be punished."}"#,
        )
        .unwrap();
        assert_eq!(doc.section_id, "302");
        let json = serde_json::to_string(&doc).unwrap();
        assert!(json.contains("\"section\":\"302\""));
        assert!(!json.contains("section_id"));
    }

    #[test]
    fn identity_is_source_and_section() {
        let doc = sample();
        assert_eq!(doc.identity(), ("Code of Criminal Procedure, 1973", "41"));
    }

    #[test]
    fn search_text_is_lowercased_title_plus_content() {
        let doc = sample();
        let text = doc.search_text();
        assert!(text.starts_with("when police may arrest without warrant any police"));
        assert!(!text.contains("Magistrate"));
        assert!(text.contains("magistrate"));
    }

    #[test]
    fn document_ref_drops_body() {
        let doc = sample();
        let r = DocumentRef::from(&doc);
        assert_eq!(r.title, doc.title);
        assert_eq!(r.source, doc.source);
    }
}
