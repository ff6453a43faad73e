//! Load-once store for the statute corpora.
//!
//! Five JSON files, one per act, loaded in a fixed order at process start
//! and never mutated afterwards. Retrieval depends on that order: candidates
//! are returned in corpus load order, not by similarity.

use nyaya_core::Document;
use std::path::Path;
use thiserror::Error;
use tracing::{info, warn};

/// Corpus files in load order. The retriever reports matches in this order,
/// so reordering the list changes retrieval output.
pub const CORPUS_FILES: &[&str] = &[
    "ipc.json",
    "crpc.json",
    "evidence_act.json",
    "it_act.json",
    "constitution.json",
];

/// Errors raised while loading corpus files. All are fatal at startup:
/// the process must not serve requests over a partial corpus.
#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("cannot read corpus file '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("corpus file '{path}' is not a JSON array of documents: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// All statute documents, in load order.
#[derive(Debug, Clone)]
pub struct CorpusStore {
    documents: Vec<Document>,
    source_counts: Vec<(String, usize)>,
}

impl CorpusStore {
    /// Load the five corpus files from a directory.
    ///
    /// A missing or unreadable file is fatal. A record inside a file that
    /// does not deserialize as a [`Document`] is skipped with a warning so
    /// one bad entry cannot take down the whole corpus.
    pub fn load_dir(dir: &Path) -> Result<Self, CorpusError> {
        let mut contents = Vec::with_capacity(CORPUS_FILES.len());
        for name in CORPUS_FILES {
            let path = dir.join(name);
            let content = std::fs::read_to_string(&path).map_err(|source| CorpusError::Read {
                path: path.display().to_string(),
                source,
            })?;
            contents.push(content);
        }

        let sources: Vec<(&str, &str)> = CORPUS_FILES
            .iter()
            .copied()
            .zip(contents.iter().map(String::as_str))
            .collect();
        Self::from_sources(&sources)
    }

    /// Load the corpora compiled into the binary.
    pub fn bundled() -> Result<Self, CorpusError> {
        Self::from_sources(&[
            ("ipc.json", include_str!("../data/ipc.json")),
            ("crpc.json", include_str!("../data/crpc.json")),
            ("evidence_act.json", include_str!("../data/evidence_act.json")),
            ("it_act.json", include_str!("../data/it_act.json")),
            ("constitution.json", include_str!("../data/constitution.json")),
        ])
    }

    fn from_sources(sources: &[(&str, &str)]) -> Result<Self, CorpusError> {
        let mut documents = Vec::new();
        let mut source_counts = Vec::with_capacity(sources.len());

        for (name, content) in sources {
            let records: Vec<serde_json::Value> =
                serde_json::from_str(content).map_err(|source| CorpusError::Parse {
                    path: (*name).to_string(),
                    source,
                })?;

            let before = documents.len();
            for (index, record) in records.into_iter().enumerate() {
                match serde_json::from_value::<Document>(record) {
                    Ok(doc) => documents.push(doc),
                    Err(e) => {
                        warn!("Skipping malformed record {index} in '{name}': {e}");
                    }
                }
            }
            source_counts.push(((*name).to_string(), documents.len() - before));
        }

        info!(
            "Loaded {} documents from {} corpus files",
            documents.len(),
            sources.len()
        );

        Ok(Self {
            documents,
            source_counts,
        })
    }

    /// All documents, in load order.
    #[must_use]
    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Per-file document counts, in load order.
    #[must_use]
    pub fn source_counts(&self) -> &[(String, usize)] {
        &self.source_counts
    }
}
