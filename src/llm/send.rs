use super::error::GenerationError;
use super::receive::{decode_chat_completion, decode_inference};
use super::{GenerationOptions, ModelRole, TextGenerator};
use crate::config::{GenerationSettings, Provider};
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, instrument, warn};

#[derive(Serialize, Debug)]
struct InferenceRequest<'a> {
    inputs: &'a str,
    parameters: InferenceParameters,
}

#[derive(Serialize, Debug)]
struct InferenceParameters {
    max_length: u32,
    temperature: f32,
    do_sample: bool,
    top_p: f32,
    repetition_penalty: f32,
}

#[derive(Serialize, Debug)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<Message<'a>>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Serialize, Debug)]
struct Message<'a> {
    role: &'static str,
    content: &'a str,
}

/// How many times a transient failure is retried, and how long to wait.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    pub attempts: u32,
    pub base_delay: Duration,
}

impl RetryPolicy {
    pub fn from_settings(settings: &GenerationSettings) -> Self {
        Self {
            attempts: settings.retry_attempts.max(1),
            base_delay: Duration::from_millis(settings.retry_base_delay_ms),
        }
    }

    /// Linear backoff: `base_delay * attempt`.
    pub fn delay_for(&self, attempt: u32) -> Duration {
        self.base_delay * attempt
    }
}

/// HTTP client for the configured hosted inference provider.
pub struct GenerationClient {
    http: Client,
    provider: Provider,
    timeout: Duration,
    retry: RetryPolicy,
}

impl GenerationClient {
    pub fn new(provider: Provider, settings: &GenerationSettings) -> Result<Self, GenerationError> {
        let http = Client::builder()
            .user_agent(concat!("edumorph/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| GenerationError::Network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http,
            provider,
            timeout: Duration::from_secs(settings.timeout_seconds),
            retry: RetryPolicy::from_settings(settings),
        })
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub fn provider(&self) -> &Provider {
        &self.provider
    }

    /// One request bounded by the cancellation timer.
    async fn attempt(
        &self,
        prompt: &str,
        options: &GenerationOptions,
    ) -> Result<String, GenerationError> {
        match tokio::time::timeout(self.timeout, self.send_once(prompt, options)).await {
            Ok(result) => result,
            Err(_) => Err(GenerationError::Timeout {
                after: self.timeout,
            }),
        }
    }

    async fn send_once(
        &self,
        prompt: &str,
        options: &GenerationOptions,
    ) -> Result<String, GenerationError> {
        let request = match &self.provider {
            Provider::HuggingFace(cfg) => {
                let model = match options.model {
                    ModelRole::Chat => &cfg.models.chat,
                    ModelRole::Text => &cfg.models.text,
                };
                let body = InferenceRequest {
                    inputs: prompt,
                    parameters: InferenceParameters {
                        max_length: options.max_length,
                        temperature: options.temperature,
                        do_sample: true,
                        top_p: 0.9,
                        repetition_penalty: 1.1,
                    },
                };
                let mut request = self
                    .http
                    .post(format!("{}/{}", cfg.base_url.trim_end_matches('/'), model))
                    .json(&body);
                if !cfg.api_key.is_empty() {
                    request = request.bearer_auth(&cfg.api_key);
                }
                request
            }
            Provider::OpenAi(cfg) => {
                let api_key = cfg.api_key.as_deref().ok_or_else(|| {
                    GenerationError::MissingCredential {
                        provider: self.provider.kind().to_string(),
                    }
                })?;
                let model = match options.model {
                    ModelRole::Chat => &cfg.models.chat,
                    ModelRole::Text => &cfg.models.advanced,
                };
                let body = ChatRequest {
                    model,
                    messages: vec![Message {
                        role: "user",
                        content: prompt,
                    }],
                    max_tokens: options.max_length,
                    temperature: options.temperature,
                };
                self.http
                    .post(format!(
                        "{}/chat/completions",
                        cfg.base_url.trim_end_matches('/')
                    ))
                    .bearer_auth(api_key)
                    .json(&body)
            }
        };

        let response = request
            .send()
            .await
            .map_err(|e| GenerationError::Network(e.to_string()))?;

        let status = response.status();
        debug!(status = status.as_u16(), provider = %self.provider.kind(), "Generation endpoint responded");
        if !status.is_success() {
            return Err(GenerationError::from_status(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| GenerationError::Network(e.to_string()))?;

        match &self.provider {
            Provider::HuggingFace(_) => decode_inference(&body),
            Provider::OpenAi(_) => decode_chat_completion(&body),
        }
    }
}

#[async_trait]
impl TextGenerator for GenerationClient {
    #[instrument(skip(self, prompt), fields(prompt_len = prompt.len()))]
    async fn generate(
        &self,
        prompt: &str,
        options: &GenerationOptions,
    ) -> Result<String, GenerationError> {
        let attempts = self.retry.attempts.max(1);

        for attempt in 1..=attempts {
            match self.attempt(prompt, options).await {
                Ok(text) => return Ok(text),
                Err(e) if e.is_retryable() && attempt < attempts => {
                    warn!(attempt, attempts, error = %e, "Generation attempt failed, retrying");
                    tokio::time::sleep(self.retry.delay_for(attempt)).await;
                }
                Err(e) => return Err(e),
            }
        }

        Err(GenerationError::Network("retry loop exhausted".to_string()))
    }
}
