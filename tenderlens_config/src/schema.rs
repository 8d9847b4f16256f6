use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

use tenderlens_core::SummarizerMode;

const CONFIG_DIR: &str = "tenderlens";
const CONFIG_FILE: &str = "config.json";
const API_KEY_ENV: &str = "OPENROUTER_API_KEY";

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub summarizer: SummarizerConfig,
    #[serde(default)]
    pub providers: ProvidersConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct SummarizerConfig {
    /// Backend used when a query falls through to a full summary.
    #[serde(default)]
    pub mode: SummarizerMode,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct ProvidersConfig {
    #[serde(default)]
    pub openrouter: OpenRouterConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct OpenRouterConfig {
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "OpenRouterConfig::default_base_url")]
    pub base_url: String,
    #[serde(default = "OpenRouterConfig::default_model")]
    pub model: String,
    #[serde(default = "OpenRouterConfig::default_max_tokens")]
    pub max_tokens: u32,
    #[serde(default = "OpenRouterConfig::default_temperature")]
    pub temperature: f32,
    #[serde(default = "OpenRouterConfig::default_referer")]
    pub referer: String,
    #[serde(default = "OpenRouterConfig::default_title")]
    pub title: String,
}

impl Default for OpenRouterConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: Self::default_base_url(),
            model: Self::default_model(),
            max_tokens: Self::default_max_tokens(),
            temperature: Self::default_temperature(),
            referer: Self::default_referer(),
            title: Self::default_title(),
        }
    }
}

impl OpenRouterConfig {
    fn default_base_url() -> String {
        "https://openrouter.ai/api/v1".to_string()
    }

    fn default_model() -> String {
        "openai/gpt-3.5-turbo".to_string()
    }

    const fn default_max_tokens() -> u32 {
        1000
    }

    const fn default_temperature() -> f32 {
        0.3
    }

    fn default_referer() -> String {
        "http://localhost:3000".to_string()
    }

    fn default_title() -> String {
        "PDF Summarizer".to_string()
    }

    /// The configured key, or `OPENROUTER_API_KEY` when the config leaves it blank.
    #[must_use]
    pub fn resolved_api_key(&self) -> Option<String> {
        Self::pick_api_key(&self.api_key, std::env::var(API_KEY_ENV).ok())
    }

    fn pick_api_key(configured: &str, from_env: Option<String>) -> Option<String> {
        let configured = configured.trim();
        if configured.is_empty() {
            from_env.filter(|key| !key.trim().is_empty())
        } else {
            Some(configured.to_string())
        }
    }
}

impl Config {
    pub fn config_dir() -> anyhow::Result<PathBuf> {
        Ok(dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Cannot find home directory"))?
            .join(CONFIG_DIR))
    }

    pub fn config_path() -> anyhow::Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE))
    }

    pub fn load() -> anyhow::Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            anyhow::bail!(
                "Config file not found at: {}. Please run 'tenderlens init' to create config.",
                config_path.display()
            );
        }

        Self::load_from(&config_path)
    }

    /// Like [`Config::load`], but a missing file means built-in defaults.
    pub fn load_or_default() -> anyhow::Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            info!(
                "No config at {}, using defaults (local mode)",
                config_path.display()
            );
            Ok(Self::default())
        }
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Invalid config at {}: {e}", path.display()))?;

        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn ensure_config_dir() -> anyhow::Result<PathBuf> {
        let config_dir = Self::config_dir()?;
        std::fs::create_dir_all(&config_dir)?;
        Ok(config_dir)
    }

    pub fn create_config() -> anyhow::Result<()> {
        let config_dir = Self::ensure_config_dir()?;
        let config_path = config_dir.join(CONFIG_FILE);

        Self::write_template(&config_path)?;

        println!("✅ Created config file at: {}", config_path.display());
        println!();
        println!("📝 Next steps:");
        println!("   1. Keep \"mode\": \"local\" for offline pattern extraction");
        println!("   2. For remote summaries, add your OpenRouter API key and set \"mode\": \"remote\"");
        println!("   3. Run 'tenderlens chat --sample' to try the built-in tender notice");
        println!();
        println!("🔧 Configuration options:");
        println!("   - summarizer.mode: local or remote");
        println!("   - providers.openrouter.model: any OpenRouter model id");
        println!("   - providers.openrouter.api_key: falls back to ${API_KEY_ENV} when empty");
        println!();
        Ok(())
    }

    /// Write the default template, refusing to overwrite an existing file.
    pub fn write_template(config_path: &Path) -> anyhow::Result<()> {
        if config_path.exists() {
            anyhow::bail!(
                "Config file already exists at: {}. Please edit it directly.",
                config_path.display()
            );
        }

        let template = serde_json::to_string_pretty(&Self::default())?;
        std::fs::write(config_path, template)?;
        Ok(())
    }
}
