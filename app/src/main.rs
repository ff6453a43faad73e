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

mod command;

use clap::{Parser, Subcommand};
use command::{
    AskInput, AskStrategy, ChatInput, ChatStrategy, CommandStrategy, InfoStrategy, InitStrategy,
    VersionStrategy,
};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "nyaya")]
#[command(about = "Indian legal information assistant", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Ask a single legal question
    Ask {
        /// The question to ask
        question: String,

        /// Model to use
        #[arg(short = 'M', long)]
        model: Option<String>,

        /// How many documents retrieval may keep
        #[arg(long)]
        top_k: Option<usize>,

        /// Print the assembled prompt instead of calling the provider
        #[arg(long)]
        prompt_only: bool,

        /// Print the full report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Hold a multi-turn conversation
    Chat {
        /// Send a single message and exit
        #[arg(short = 'm', long)]
        message: Option<String>,

        /// Model to use
        #[arg(short = 'M', long)]
        model: Option<String>,

        /// How many past turns each prompt carries
        #[arg(long)]
        history_limit: Option<usize>,
    },
    /// Initialize configuration and export bundled data
    Init,
    /// Show configuration and corpus summary
    Info,
    /// Show version
    Version,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();

    match cli.command {
        Commands::Ask {
            question,
            model,
            top_k,
            prompt_only,
            json,
        } => {
            AskStrategy
                .execute(AskInput {
                    question,
                    model,
                    top_k,
                    prompt_only,
                    json,
                })
                .await
        }
        Commands::Chat {
            message,
            model,
            history_limit,
        } => {
            ChatStrategy
                .execute(ChatInput {
                    message,
                    model,
                    history_limit,
                })
                .await
        }
        Commands::Init => InitStrategy.execute(()).await,
        Commands::Info => InfoStrategy.execute(()).await,
        Commands::Version => VersionStrategy.execute(()).await,
    }
}
