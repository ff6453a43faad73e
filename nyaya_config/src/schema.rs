use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::debug;

// PipelineConfig lives in nyaya_core so the pipeline crates can share it.
use nyaya_core::PipelineConfig;

/// Key value written by `create_config`, recognizably not a real key.
pub const API_KEY_PLACEHOLDER: &str = "your-openai-api-key-here";

const CONFIG_TEMPLATE: &str = r#"{
  "generation": {
    "model": "gpt-4o-mini",
    "max_tokens": 500,
    "temperature": 0.2
  },
  "providers": {
    "openai": {
      "api_key": "your-openai-api-key-here"
    }
  },
  "corpus": {},
  "pipeline": {
    "top_k": 8,
    "history_turns": 6
  }
}"#;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Config {
    pub generation: GenerationConfig,
    pub providers: ProvidersConfig,
    #[serde(default)]
    pub corpus: CorpusConfig,
    #[serde(default)]
    pub pipeline: PipelineConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct GenerationConfig {
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct CorpusConfig {
    /// Directory holding the statute and lexicon JSON files. Bundled
    /// data is used when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ProvidersConfig {
    pub openai: ProviderConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ProviderConfig {
    pub api_key: String,
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        let config_dir = dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Cannot find home directory"))?
            .join("nyaya");

        let config_path = config_dir.join("config.json");

        if !config_path.exists() {
            anyhow::bail!(
                "Config file not found at: {}. Please run 'nyaya init' to create config.",
                config_path.display()
            );
        }

        let content = std::fs::read_to_string(&config_path)?;
        let config: Self = serde_json::from_str(&content)?;
        debug!("Loaded config from {}", config_path.display());

        Ok(config)
    }

    pub fn ensure_config_dir() -> anyhow::Result<PathBuf> {
        let config_dir = dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Cannot find home directory"))?
            .join("nyaya");

        std::fs::create_dir_all(&config_dir)?;
        Ok(config_dir)
    }

    pub fn create_config() -> anyhow::Result<PathBuf> {
        let config_dir = Self::ensure_config_dir()?;
        let config_path = config_dir.join("config.json");

        if config_path.exists() {
            anyhow::bail!(
                "Config file already exists at: {}. Please edit it directly.",
                config_path.display()
            );
        }

        std::fs::write(&config_path, CONFIG_TEMPLATE)?;
        Ok(config_path)
    }

    /// Whether a usable API key is present, rather than the template
    /// placeholder or an empty string.
    #[must_use]
    pub fn has_api_key(&self) -> bool {
        let key = self.providers.openai.api_key.trim();
        !key.is_empty() && key != API_KEY_PLACEHOLDER
    }
}
