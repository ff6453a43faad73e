use nyaya_config::Config;

use super::{CommandStrategy, load_stores};

/// Strategy for displaying configuration and corpus information.
///
/// Outputs the masked API key, generation and pipeline settings, and a
/// per-source document count for whichever corpus the config points at.
#[derive(Debug, Clone, Copy)]
pub struct InfoStrategy;

impl CommandStrategy for InfoStrategy {
    type Input = ();

    async fn execute(&self, _input: Self::Input) -> anyhow::Result<()> {
        let config = Config::load()?;

        println!("=== nyaya Configuration ===\n");

        println!("API Key:");
        let api_key = &config.providers.openai.api_key;
        if api_key.len() > 8 {
            let masked = format!("{}...{}", &api_key[..4], &api_key[api_key.len() - 4..]);
            println!("  OpenAI: {masked}");
        } else {
            println!("  OpenAI: ***");
        }
        println!();

        println!("Generation:");
        println!("  Model: {}", config.generation.model);
        println!("  Max Tokens: {}", config.generation.max_tokens);
        println!("  Temperature: {}", config.generation.temperature);
        println!();

        println!("Pipeline:");
        println!("  Retrieval Top K: {}", config.pipeline.top_k);
        println!("  History Turns: {}", config.pipeline.history_turns);
        println!();

        println!("Corpus:");
        match config.corpus.data_dir {
            Some(ref dir) => println!("  Data Dir: {}", dir.display()),
            None => println!("  Data Dir: (bundled)"),
        }
        let (lexicon, corpus) = load_stores(&config)?;
        println!("  Documents: {}", corpus.len());
        for (source, count) in corpus.source_counts() {
            println!("    {source}: {count}");
        }
        println!("  Lexicon Entries: {}", lexicon.entry_count());
        println!("  Synonym Rules: {}", lexicon.synonym_rules().len());

        Ok(())
    }
}
