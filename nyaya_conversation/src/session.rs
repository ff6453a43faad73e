//! In-memory conversation sessions for the interactive chat flow.

use chrono::{DateTime, Utc};
use nyaya_core::{ConversationTurn, Role};
use uuid::Uuid;

/// A single chat session holding its transcript in memory.
///
/// Sessions are not persisted. Each interactive run starts fresh and the
/// transcript is discarded when the process exits.
#[derive(Debug, Clone)]
pub struct ConversationSession {
    pub id: Uuid,
    pub turns: Vec<ConversationTurn>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Default for ConversationSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ConversationSession {
    #[must_use]
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            turns: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn add_turn(&mut self, role: Role, content: impl Into<String>) {
        self.turns.push(ConversationTurn::new(role, content.into()));
        self.updated_at = Utc::now();
    }

    /// The trailing `n` turns, oldest first.
    #[must_use]
    pub fn last_n_turns(&self, n: usize) -> &[ConversationTurn] {
        let start = self.turns.len().saturating_sub(n);
        &self.turns[start..]
    }

    #[must_use]
    pub fn turn_count(&self) -> usize {
        self.turns.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn clear(&mut self) {
        self.turns.clear();
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_session_is_empty() {
        let session = ConversationSession::new();
        assert!(session.is_empty());
        assert_eq!(session.turn_count(), 0);
    }

    #[test]
    fn add_turn_appends_and_touches_timestamp() {
        let mut session = ConversationSession::new();
        let created = session.updated_at;

        session.add_turn(Role::User, "what is section 420");
        session.add_turn(Role::Assistant, "section 420 covers cheating");

        assert_eq!(session.turn_count(), 2);
        assert_eq!(session.turns[0].role, Role::User);
        assert_eq!(session.turns[1].content, "section 420 covers cheating");
        assert!(session.updated_at >= created);
    }

    #[test]
    fn last_n_turns_takes_the_tail() {
        let mut session = ConversationSession::new();
        for i in 0..5 {
            session.add_turn(Role::User, format!("question {i}"));
        }

        let tail = session.last_n_turns(2);
        assert_eq!(tail.len(), 2);
        assert_eq!(tail[0].content, "question 3");
        assert_eq!(tail[1].content, "question 4");

        assert_eq!(session.last_n_turns(100).len(), 5);
    }

    #[test]
    fn clear_resets_transcript() {
        let mut session = ConversationSession::new();
        session.add_turn(Role::User, "hello");
        session.clear();
        assert!(session.is_empty());
    }

    #[test]
    fn sessions_get_distinct_ids() {
        let a = ConversationSession::new();
        let b = ConversationSession::new();
        assert_ne!(a.id, b.id);
    }
}
