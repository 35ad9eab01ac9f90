//! # Remote generation
//!
//! A single outbound call to a hosted text-generation endpoint, wrapped in a
//! cancellation timer and a bounded retry loop.
//!
//! ```text
//! prompt → send.rs (build request, POST, status) → receive.rs (decode body) → text
//! ```
//!
//! Callers depend on the [`TextGenerator`] trait, never on the HTTP client, and
//! treat every error as a signal to substitute local fallback content.

pub mod error;
pub mod receive;
pub mod send;

pub use error::GenerationError;
pub use send::{GenerationClient, RetryPolicy};

use async_trait::async_trait;

/// Which configured model a call should use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelRole {
    Chat,
    Text,
}

#[derive(Debug, Clone)]
pub struct GenerationOptions {
    pub max_length: u32,
    pub temperature: f32,
    pub model: ModelRole,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            max_length: 200,
            temperature: 0.7,
            model: ModelRole::Chat,
        }
    }
}

impl GenerationOptions {
    pub fn chat(max_length: u32, temperature: f32) -> Self {
        Self {
            max_length,
            temperature,
            model: ModelRole::Chat,
        }
    }

    pub fn text(max_length: u32, temperature: f32) -> Self {
        Self {
            max_length,
            temperature,
            model: ModelRole::Text,
        }
    }
}

#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(
        &self,
        prompt: &str,
        options: &GenerationOptions,
    ) -> Result<String, GenerationError>;
}

#[cfg(test)]
pub(crate) mod testing;
