#![deny(
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

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub mod document;
pub mod pipeline;

pub use document::{Document, DocumentRef, ScoredDocument};
pub use pipeline::PipelineConfig;

/// System preamble sent with every generation request.
pub const ANSWER_SYSTEM_PROMPT: &str = "You are an Indian legal information assistant. \
Explain laws in simple and neutral language. \
Do not give legal advice. \
Do not invent sections. \
Do not provide explanations for things outside Indian law. \
For questions unrelated to law, simply say: please ask me law related questions.";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
    System,
}

impl Role {
    /// Label used when rendering a transcript line.
    #[must_use]
    pub const fn transcript_label(&self) -> &'static str {
        match self {
            Self::User => "User",
            Self::Assistant => "Assistant",
            Self::System => "System",
        }
    }
}

/// One caller-supplied message in a conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationTurn {
    pub role: Role,
    pub content: String,
}

impl ConversationTurn {
    #[must_use]
    pub const fn new(role: Role, content: String) -> Self {
        Self { role, content }
    }

    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content.into())
    }

    #[must_use]
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content.into())
    }

    #[must_use]
    pub fn system(content: impl Into<String>) -> Self {
        Self::new(Role::System, content.into())
    }
}

#[derive(Debug, Clone)]
pub struct GenerationResponse {
    pub content: String,
    pub usage: Option<Usage>,
}

#[derive(Debug, Clone)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

/// Outbound answer generation. The pipeline assembles the full prompt;
/// implementations only move messages over the wire.
#[async_trait]
pub trait AnswerProvider: Send + Sync {
    async fn complete(
        &self,
        messages: &[ConversationTurn],
        model: &str,
    ) -> anyhow::Result<GenerationResponse>;
    fn default_model(&self) -> &str;
}
