//! Answer generation backends.
//!
//! Providers implement [`nyaya_core::AnswerProvider`] and only move
//! messages over the wire. Prompt assembly happens upstream.

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

pub mod openai;
pub mod retry;

pub use openai::OpenAiProvider;
pub use retry::retry_with_backoff;
