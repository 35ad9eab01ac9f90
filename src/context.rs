//! The single application context built at startup and passed to every
//! command. It owns the generator, the per-session state and the
//! collaborator seams.

use crate::analytics::TestAnalytics;
use crate::chat::Chatbot;
use crate::config::{Config, Provider, ProviderKind};
use crate::content::ContentGenerator;
use crate::document::DocumentService;
use crate::history::{ConversationLog, ConversationTurn, SessionStore, HISTORY_KEY};
use crate::llm::{GenerationClient, TextGenerator};
use crate::monitor::Monitor;
use crate::services::{ContentStore, FileStore, Notifier, TracingNotifier};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};

pub const PREFERENCES_KEY: &str = "preferences";

/// Choices made through the CLI that outlive one invocation.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct Preferences {
    pub provider: Option<ProviderKind>,
}

pub struct AppContext {
    config: Config,
    sessions: SessionStore,
    preferences: Preferences,
    pub chatbot: Chatbot,
    pub content: ContentGenerator,
    pub analytics: TestAnalytics,
    pub documents: DocumentService,
    pub monitor: Monitor,
    pub store: Arc<dyn ContentStore>,
    pub notifier: Arc<dyn Notifier>,
}

impl AppContext {
    /// Loads configuration, applies the saved provider choice and builds the
    /// HTTP generation client.
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let mut config = Config::load(config_path).context("Failed to load configuration")?;
        let sessions = SessionStore::new(&config.session.state_dir);
        let preferences: Preferences = sessions.load(PREFERENCES_KEY);
        apply_preference(&mut config, &preferences, |key| std::env::var(key).ok())?;

        let generator = Self::client(&config)?;
        Ok(Self::with_generator(config, generator))
    }

    fn client(config: &Config) -> Result<Arc<dyn TextGenerator>> {
        let client = GenerationClient::new(config.provider.clone(), &config.generation)
            .context("Failed to build generation client")?;
        Ok(Arc::new(client))
    }

    /// Builds the context around an existing generator, restoring session
    /// snapshots from the configured state directory.
    pub fn with_generator(config: Config, generator: Arc<dyn TextGenerator>) -> Self {
        let sessions = SessionStore::new(&config.session.state_dir);
        let preferences = sessions.load(PREFERENCES_KEY);
        let turns: Vec<ConversationTurn> = sessions.load(HISTORY_KEY);
        let log = ConversationLog::from_turns(turns, config.session.history_capacity);
        info!(
            provider = %config.provider.kind(),
            turns = log.len(),
            state_dir = %sessions.dir().display(),
            "Application context ready"
        );

        Self {
            chatbot: Chatbot::new(generator.clone(), &config.session).with_history(log),
            content: ContentGenerator::new(generator.clone(), config.generation.clone()),
            analytics: TestAnalytics::load(generator, &sessions),
            documents: DocumentService::new(config.document.clone()),
            monitor: Monitor::default(),
            store: Arc::new(FileStore::open(sessions.clone())),
            notifier: Arc::new(TracingNotifier),
            config,
            sessions,
            preferences,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn provider(&self) -> ProviderKind {
        self.config.provider.kind()
    }

    /// Switches the remote backend. Unknown names are rejected and leave the
    /// current provider in place.
    pub fn set_provider(&mut self, name: &str) -> Result<ProviderKind> {
        let provider = Provider::select(name)?;
        let kind = provider.kind();
        if kind == self.provider() {
            return Ok(kind);
        }

        self.config.provider = provider;
        let generator = Self::client(&self.config)?;
        self.install_generator(generator);
        self.preferences.provider = Some(kind);
        info!(provider = %kind, "Provider switched");
        Ok(kind)
    }

    fn install_generator(&mut self, generator: Arc<dyn TextGenerator>) {
        self.chatbot.set_generator(generator.clone());
        self.analytics.set_generator(generator.clone());
        self.content = ContentGenerator::new(generator, self.config.generation.clone());
    }

    /// Writes history, analytics and preferences to the state directory.
    pub fn persist(&self) -> Result<()> {
        self.sessions
            .save(HISTORY_KEY, &self.chatbot.history().to_vec())
            .context("Failed to save conversation history")?;
        self.analytics
            .save(&self.sessions)
            .context("Failed to save test analytics")?;
        self.sessions
            .save(PREFERENCES_KEY, &self.preferences)
            .context("Failed to save preferences")?;
        Ok(())
    }
}

/// Swaps in the saved provider when it differs from the configured one and
/// returns the kind it replaced. The configured provider's key, base URL and
/// models only describe that provider, so they are dropped with it.
fn apply_preference<F>(
    config: &mut Config,
    preferences: &Preferences,
    lookup: F,
) -> Result<Option<ProviderKind>>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(kind) = preferences.provider else {
        return Ok(None);
    };
    let configured = config.provider.kind();
    if kind == configured {
        return Ok(None);
    }

    warn!(
        saved = %kind,
        configured = %configured,
        "Saved provider choice overrides the configured provider; its settings are not used"
    );
    config.provider = Provider::with_defaults(kind);
    config
        .apply_overrides(lookup)
        .context("Invalid environment overrides")?;
    Ok(Some(configured))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::testing::ScriptedGenerator;
    use tempfile::TempDir;

    fn config_in(dir: &TempDir) -> Config {
        let mut config = Config::default();
        config.session.state_dir = dir.path().to_path_buf();
        config
    }

    #[tokio::test]
    async fn history_survives_a_restart() {
        let dir = TempDir::new().unwrap();
        let mut ctx = AppContext::with_generator(config_in(&dir), Arc::new(ScriptedGenerator::new()));
        ctx.chatbot.chat("Hello there").await;
        ctx.persist().unwrap();

        let restored =
            AppContext::with_generator(config_in(&dir), Arc::new(ScriptedGenerator::new()));
        assert_eq!(restored.chatbot.history().len(), 1);
        assert_eq!(
            restored.chatbot.history().iter().next().unwrap().user_text,
            "Hello there"
        );
    }

    #[tokio::test]
    async fn provider_switch_is_validated_and_remembered() {
        let dir = TempDir::new().unwrap();
        let mut ctx = AppContext::with_generator(config_in(&dir), Arc::new(ScriptedGenerator::new()));

        assert!(ctx.set_provider("carrier-pigeon").is_err());
        assert_eq!(ctx.provider(), ProviderKind::HuggingFace);

        assert_eq!(ctx.set_provider("openai").unwrap(), ProviderKind::OpenAi);
        ctx.persist().unwrap();

        let saved: Preferences = SessionStore::new(dir.path()).load(PREFERENCES_KEY);
        assert_eq!(saved.provider, Some(ProviderKind::OpenAi));
    }

    #[test]
    fn saved_provider_replaces_configured_one() {
        let mut config = Config::from_toml(
            "[provider]\nkind = \"hugging_face\"\napi_key = \"hf_configured\"\n",
        )
        .unwrap();
        let preferences = Preferences {
            provider: Some(ProviderKind::OpenAi),
        };

        let replaced = apply_preference(&mut config, &preferences, |key| {
            (key == "EDUMORPH_API_KEY").then(|| "sk_env".to_string())
        })
        .unwrap();

        assert_eq!(replaced, Some(ProviderKind::HuggingFace));
        match &config.provider {
            Provider::OpenAi(cfg) => assert_eq!(cfg.api_key.as_deref(), Some("sk_env")),
            other => panic!("unexpected provider {:?}", other),
        }
    }

    #[test]
    fn matching_preference_keeps_configured_settings() {
        let mut config = Config::from_toml(
            "[provider]\nkind = \"hugging_face\"\napi_key = \"hf_configured\"\n",
        )
        .unwrap();
        let preferences = Preferences {
            provider: Some(ProviderKind::HuggingFace),
        };

        assert_eq!(apply_preference(&mut config, &preferences, |_| None).unwrap(), None);
        match &config.provider {
            Provider::HuggingFace(cfg) => assert_eq!(cfg.api_key, "hf_configured"),
            other => panic!("unexpected provider {:?}", other),
        }
    }
}
