//! Retrieval and prompt assembly for legal question answering.
//!
//! This crate turns a user question into a grounded prompt:
//! - Query understanding (language detection, normalization, expansion, intent)
//! - Token-overlap candidate retrieval over the statute corpus
//! - Rule-based relevance ranking
//! - Prompt assembly with conversation context

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

pub mod engine;
pub mod prompt;
pub mod ranker;
pub mod retriever;

pub use engine::{AskReport, Query, QueryEngine};
pub use prompt::PromptBuilder;
pub use ranker::{DocumentRanker, MAX_RANKED, RuleBasedRanker};
pub use retriever::Retriever;
