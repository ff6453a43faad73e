//! Static strategy pattern for CLI commands.
//!
//! Each command is a separate type implementing [`CommandStrategy`], so
//! dispatch is monomorphized and every command stays independently
//! readable and testable.

use std::sync::Arc;

use nyaya_config::Config;
use nyaya_corpus::{CorpusStore, LexiconStore};
use nyaya_providers::OpenAiProvider;
use nyaya_retrieval::QueryEngine;
use tracing::info;

mod ask;
mod chat;
mod info;
mod init;
mod version;

pub use ask::{AskInput, AskStrategy};
pub use chat::{ChatInput, ChatStrategy};
pub use info::InfoStrategy;
pub use init::InitStrategy;
pub use version::VersionStrategy;

/// Components shared by the commands that run the pipeline.
pub struct CommonComponents {
    pub config: Config,
    pub engine: QueryEngine,
    pub provider: OpenAiProvider,
}

/// Load config and data, then assemble the engine and provider.
fn init_components() -> anyhow::Result<CommonComponents> {
    let config = Config::load()?;

    let (lexicon, corpus) = load_stores(&config)?;
    info!(
        "Loaded {} documents and {} lexicon entries",
        corpus.len(),
        lexicon.entry_count()
    );

    let engine = QueryEngine::new(Arc::clone(&lexicon), Arc::clone(&corpus), &config.pipeline);
    let provider = OpenAiProvider::new(config.providers.openai.api_key.clone())
        .with_temperature(config.generation.temperature)
        .with_max_tokens(config.generation.max_tokens);

    Ok(CommonComponents {
        config,
        engine,
        provider,
    })
}

/// Open the configured data directory, falling back to bundled data.
fn load_stores(config: &Config) -> anyhow::Result<(Arc<LexiconStore>, Arc<CorpusStore>)> {
    match &config.corpus.data_dir {
        Some(dir) => {
            info!("Loading corpus from {}", dir.display());
            Ok((
                Arc::new(LexiconStore::load_dir(dir)?),
                Arc::new(CorpusStore::load_dir(dir)?),
            ))
        }
        None => Ok((
            Arc::new(LexiconStore::bundled()?),
            Arc::new(CorpusStore::bundled()?),
        )),
    }
}

/// Core trait defining the contract for all command strategies.
///
/// Each strategy defines its own input type via the associated type, so
/// parameters are passed without boxing or runtime casting.
pub trait CommandStrategy: Send + Sync + 'static {
    /// The input type this strategy accepts.
    type Input;

    /// Execute the command with the given input.
    async fn execute(&self, input: Self::Input) -> anyhow::Result<()>;
}
