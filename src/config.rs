//! Runtime configuration: TOML file, then `.env` / environment overrides.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Unknown provider: {0}")]
    UnknownProvider(String),
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub provider: Provider,
    pub generation: GenerationSettings,
    pub document: DocumentSettings,
    pub session: SessionSettings,
}

/// Hosted inference backends. Each variant carries its own settings.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Provider {
    HuggingFace(HuggingFaceConfig),
    OpenAi(OpenAiConfig),
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ProviderKind {
    HuggingFace,
    OpenAi,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct HuggingFaceConfig {
    pub api_key: String,
    pub base_url: String,
    pub models: HuggingFaceModels,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct HuggingFaceModels {
    pub chat: String,
    pub text: String,
    pub qa: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct OpenAiConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    pub models: OpenAiModels,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct OpenAiModels {
    pub chat: String,
    pub advanced: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct GenerationSettings {
    pub timeout_seconds: u64,
    pub retry_attempts: u32,
    pub retry_base_delay_ms: u64,
    pub max_content_items: usize,
    pub default_count: usize,
    pub prompt_text_limit: usize,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct DocumentSettings {
    pub max_file_size: u64,
    pub supported_formats: Vec<String>,
    pub max_text_length: usize,
    pub processing_max_length: usize,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct SessionSettings {
    pub state_dir: PathBuf,
    pub history_capacity: usize,
    pub recent_topics_capacity: usize,
}

impl Default for Provider {
    fn default() -> Self {
        Provider::HuggingFace(HuggingFaceConfig::default())
    }
}

impl Default for HuggingFaceConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: "https://api-inference.huggingface.co/models".to_string(),
            models: HuggingFaceModels::default(),
        }
    }
}

impl Default for HuggingFaceModels {
    fn default() -> Self {
        Self {
            chat: "microsoft/DialoGPT-medium".to_string(),
            text: "gpt2".to_string(),
            qa: "distilbert-base-uncased-distilled-squad".to_string(),
        }
    }
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: "https://api.openai.com/v1".to_string(),
            models: OpenAiModels::default(),
        }
    }
}

impl Default for OpenAiModels {
    fn default() -> Self {
        Self {
            chat: "gpt-3.5-turbo".to_string(),
            advanced: "gpt-4".to_string(),
        }
    }
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            timeout_seconds: 30,
            retry_attempts: 3,
            retry_base_delay_ms: 500,
            max_content_items: 20,
            default_count: 5,
            prompt_text_limit: 2000,
        }
    }
}

impl Default for DocumentSettings {
    fn default() -> Self {
        Self {
            max_file_size: 10 * 1024 * 1024,
            supported_formats: ["pdf", "docx", "txt", "md"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            max_text_length: 50_000,
            processing_max_length: 4000,
        }
    }
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            state_dir: PathBuf::from(".edumorph"),
            history_capacity: 50,
            recent_topics_capacity: 5,
        }
    }
}

impl ProviderKind {
    pub const ALL: [ProviderKind; 2] = [ProviderKind::HuggingFace, ProviderKind::OpenAi];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::HuggingFace => "huggingface",
            ProviderKind::OpenAi => "openai",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProviderKind {
    type Err = ConfigError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.trim().to_lowercase().as_str() {
            "huggingface" | "hugging_face" | "hf" => Ok(ProviderKind::HuggingFace),
            "openai" | "open_ai" => Ok(ProviderKind::OpenAi),
            other => Err(ConfigError::UnknownProvider(other.to_string())),
        }
    }
}

impl Provider {
    pub fn kind(&self) -> ProviderKind {
        match self {
            Provider::HuggingFace(_) => ProviderKind::HuggingFace,
            Provider::OpenAi(_) => ProviderKind::OpenAi,
        }
    }

    /// Builds a provider with default settings from a user-supplied name.
    pub fn select(name: &str) -> Result<Self, ConfigError> {
        Ok(Self::with_defaults(name.parse()?))
    }

    pub fn with_defaults(kind: ProviderKind) -> Self {
        match kind {
            ProviderKind::HuggingFace => Provider::HuggingFace(HuggingFaceConfig::default()),
            ProviderKind::OpenAi => Provider::OpenAi(OpenAiConfig::default()),
        }
    }

    fn set_api_key(&mut self, key: String) {
        match self {
            Provider::HuggingFace(cfg) => cfg.api_key = key,
            Provider::OpenAi(cfg) => cfg.api_key = Some(key),
        }
    }

    fn set_base_url(&mut self, url: String) {
        match self {
            Provider::HuggingFace(cfg) => cfg.base_url = url,
            Provider::OpenAi(cfg) => cfg.base_url = url,
        }
    }

    fn set_chat_model(&mut self, model: String) {
        match self {
            Provider::HuggingFace(cfg) => cfg.models.chat = model,
            Provider::OpenAi(cfg) => cfg.models.chat = model,
        }
    }
}

impl Config {
    /// Reads `path` when it exists, then applies `.env` and process
    /// environment overrides.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();

        let mut config = match path {
            Some(path) if path.exists() => {
                let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                })?;
                info!(path = %path.display(), "Loaded configuration file");
                Self::from_toml(&raw)?
            }
            _ => Self::default(),
        };

        config.apply_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    pub fn from_toml(raw: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(raw)?)
    }

    /// Overlays `EDUMORPH_*` variables looked up through `lookup`.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(name) = lookup("EDUMORPH_PROVIDER") {
            let kind: ProviderKind = name.parse()?;
            if kind != self.provider.kind() {
                self.provider = Provider::with_defaults(kind);
            }
        }
        if let Some(key) = lookup("EDUMORPH_API_KEY") {
            self.provider.set_api_key(key);
        }
        if let Some(url) = lookup("EDUMORPH_BASE_URL") {
            self.provider.set_base_url(url);
        }
        if let Some(model) = lookup("EDUMORPH_MODEL") {
            self.provider.set_chat_model(model);
        }
        if let Some(dir) = lookup("EDUMORPH_STATE_DIR") {
            self.session.state_dir = PathBuf::from(dir);
        }

        debug!(provider = %self.provider.kind(), "Configuration overrides applied");
        Ok(())
    }
}
