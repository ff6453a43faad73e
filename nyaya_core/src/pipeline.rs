//! Pipeline tuning knobs shared across the workspace.

use serde::{Deserialize, Serialize};

/// Retrieval and conversation-window configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Candidates the retriever keeps before ranking.
    #[serde(default = "default_top_k")]
    pub top_k: usize,
    /// Conversation turns included in the prompt transcript.
    #[serde(default = "default_history_turns")]
    pub history_turns: usize,
}

const fn default_top_k() -> usize {
    8
}
const fn default_history_turns() -> usize {
    6
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            top_k: 8,
            history_turns: 6,
        }
    }
}
