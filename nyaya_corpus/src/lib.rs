#![warn(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

pub mod lexicon;
pub mod store;

pub use lexicon::{LEXICON_FILE, LexiconError, LexiconStore, SYNONYM_FILE, SynonymRule};
pub use store::{CORPUS_FILES, CorpusError, CorpusStore};

/// Data files compiled into the binary. `nyaya init` exports these verbatim
/// so a deployment can edit them and point `corpus.data_dir` at the copies.
pub const BUNDLED_FILES: &[(&str, &str)] = &[
    ("ipc.json", include_str!("../data/ipc.json")),
    ("crpc.json", include_str!("../data/crpc.json")),
    ("evidence_act.json", include_str!("../data/evidence_act.json")),
    ("it_act.json", include_str!("../data/it_act.json")),
    ("constitution.json", include_str!("../data/constitution.json")),
    ("hinglish_words.json", include_str!("../data/hinglish_words.json")),
    ("keyword_synonyms.json", include_str!("../data/keyword_synonyms.json")),
];
