use nyaya_config::Config;
use nyaya_corpus::BUNDLED_FILES;

use super::CommandStrategy;

/// Strategy for initializing the configuration and local data.
///
/// Creates `~/nyaya/config.json` and exports the bundled statute and
/// lexicon files to `~/nyaya/data/` so they can be edited and pointed
/// at via `corpus.data_dir`.
#[derive(Debug, Clone, Copy)]
pub struct InitStrategy;

impl CommandStrategy for InitStrategy {
    type Input = ();

    async fn execute(&self, _input: Self::Input) -> anyhow::Result<()> {
        let config_path = Config::create_config()?;

        let data_dir = Config::ensure_config_dir()?.join("data");
        std::fs::create_dir_all(&data_dir)?;
        for &(name, content) in BUNDLED_FILES {
            std::fs::write(data_dir.join(name), content)?;
        }

        println!("✅ Created config file at: {}", config_path.display());
        println!("📚 Exported bundled data to: {}", data_dir.display());
        println!();
        println!("📝 Next steps:");
        println!("   1. Edit the config file and add your OpenAI API key");
        println!("   2. Run 'nyaya ask \"your question\"' for a single answer");
        println!("   3. Run 'nyaya chat' for a multi-turn session");
        println!();
        println!("🔧 To use your own statute files, edit the JSON files in the");
        println!("   data directory and set corpus.data_dir in the config.");

        Ok(())
    }
}
