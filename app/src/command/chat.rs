//! Multi-turn conversation command.
//!
//! Unlike the `ask` command, each turn here sees a windowed transcript of
//! the session, so follow-up questions stay grounded in what was already
//! discussed.

use std::io::Write;

use nyaya_conversation::ConversationSession;
use nyaya_core::Role;
use tracing::info;

use super::{CommandStrategy, init_components};

/// Input parameters for the Chat command.
#[derive(Debug, Clone)]
pub struct ChatInput {
    /// Send a single message instead of starting the interactive loop.
    pub message: Option<String>,
    /// Optional model override.
    pub model: Option<String>,
    /// Optional override for how many past turns each prompt carries.
    pub history_limit: Option<usize>,
}

/// Strategy for an interactive session on stdin/stdout.
#[derive(Debug, Clone, Copy)]
pub struct ChatStrategy;

impl CommandStrategy for ChatStrategy {
    type Input = ChatInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let mut common = init_components()?;
        if let Some(limit) = input.history_limit {
            common.engine = common.engine.with_history_turns(limit);
        }

        let model = input
            .model
            .unwrap_or_else(|| common.config.generation.model.clone());

        if let Some(message) = input.message {
            let report = common
                .engine
                .ask(&common.provider, &model, &message, &[])
                .await?;
            if let Some(answer) = report.answer {
                println!("{answer}");
            }
            return Ok(());
        }

        let mut session = ConversationSession::new();
        info!("Starting chat session: {}", session.id);

        println!("nyaya legal assistant. Type 'exit' to quit.\n");

        loop {
            print!("> ");
            std::io::stdout().flush()?;

            let mut line = String::new();
            if std::io::stdin().read_line(&mut line)? == 0 {
                break;
            }
            let question = line.trim();

            if question == "exit" {
                break;
            }
            if question.is_empty() {
                continue;
            }

            match common
                .engine
                .ask(&common.provider, &model, question, &session.turns)
                .await
            {
                Ok(report) => {
                    if let Some(answer) = report.answer {
                        println!("\n{answer}\n");
                        session.add_turn(Role::User, question);
                        session.add_turn(Role::Assistant, answer);
                    }
                }
                Err(e) => eprintln!("Error: {e}"),
            }
        }

        info!("Chat ended after {} turns", session.turn_count());
        Ok(())
    }
}
