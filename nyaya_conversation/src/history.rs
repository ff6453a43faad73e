//! Bounded windows over conversation history.
//!
//! History is caller-supplied and read-only. The window is applied at the
//! moment history is consumed, so callers may hold longer transcripts
//! without affecting what the prompt sees.

use nyaya_core::ConversationTurn;

/// Configuration for the history window.
#[derive(Debug, Clone, Copy)]
pub struct HistoryConfig {
    /// Most recent turns included in the prompt transcript.
    pub max_turns: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self { max_turns: 6 }
    }
}

impl HistoryConfig {
    #[must_use]
    pub const fn with_max_turns(mut self, max: usize) -> Self {
        self.max_turns = max;
        self
    }
}

/// A sliding window that keeps the most recent turns in order.
#[derive(Debug, Clone, Default)]
pub struct HistoryWindow {
    config: HistoryConfig,
}

impl HistoryWindow {
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: HistoryConfig::default(),
        }
    }

    #[must_use]
    pub const fn with_config(config: HistoryConfig) -> Self {
        Self { config }
    }

    /// The trailing `max_turns` turns, chronological order preserved.
    #[must_use]
    pub fn select<'a>(&self, turns: &'a [ConversationTurn]) -> &'a [ConversationTurn] {
        let start = turns.len().saturating_sub(self.config.max_turns);
        &turns[start..]
    }

    #[must_use]
    pub const fn config(&self) -> &HistoryConfig {
        &self.config
    }
}
