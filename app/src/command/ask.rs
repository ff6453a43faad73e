//! Single-question command.

use nyaya_retrieval::AskReport;
use tracing::info;

use super::{CommandStrategy, init_components};

/// Input parameters for the Ask command.
#[derive(Debug, Clone)]
pub struct AskInput {
    /// The question, in English or Hinglish.
    pub question: String,
    /// Optional model override.
    pub model: Option<String>,
    /// Optional override for how many documents retrieval keeps.
    pub top_k: Option<usize>,
    /// Assemble and print the prompt without calling the provider.
    pub prompt_only: bool,
    /// Print the full report as JSON.
    pub json: bool,
}

/// Strategy for executing one pipeline pass over a single question.
#[derive(Debug, Clone, Copy)]
pub struct AskStrategy;

impl CommandStrategy for AskStrategy {
    type Input = AskInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let mut common = init_components()?;
        if let Some(top_k) = input.top_k {
            common.engine = common.engine.with_top_k(top_k);
        }

        let model = input
            .model
            .unwrap_or_else(|| common.config.generation.model.clone());

        // Without a key the pipeline still runs, it just stops at the prompt.
        let prompt_only = input.prompt_only || !common.config.has_api_key();
        if prompt_only && !input.prompt_only {
            info!("No API key configured, printing the assembled prompt");
        }

        let report = if prompt_only {
            common.engine.analyze(&input.question, &[])
        } else {
            common
                .engine
                .ask(&common.provider, &model, &input.question, &[])
                .await?
        };

        if input.json {
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            print_report(&report);
        }

        Ok(())
    }
}

fn print_report(report: &AskReport) {
    println!("Language: {}", report.detected_language.as_str());
    println!("Intent: {}", report.intent.as_str());
    if report.selected_documents.is_empty() {
        println!("Provisions: none matched");
    } else {
        println!("Provisions:");
        for doc in &report.selected_documents {
            println!("  - {} ({})", doc.title, doc.source);
        }
    }
    println!();

    match &report.answer {
        Some(answer) => println!("{answer}"),
        None => println!("{}", report.prompt),
    }
}
