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

pub mod expander;
pub mod intent;
pub mod language;
pub mod translator;

pub use expander::KeywordExpander;
pub use intent::{Intent, IntentClassifier};
pub use language::{HINGLISH_HIT_THRESHOLD, Language, LanguageDetector};
pub use translator::Translator;
