use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum GenerationError {
    #[error("API rate limit exceeded. Please try again later.")]
    RateLimited,

    #[error("AI service temporarily unavailable. Please try again later.")]
    Unavailable,

    #[error("HTTP error! status: {status}")]
    Http { status: u16 },

    #[error("Request timeout - no response within {:?}", .after)]
    Timeout { after: Duration },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Unrecognized response shape from generation endpoint")]
    UnrecognizedShape,

    #[error("Generation endpoint returned no usable text")]
    EmptyText,

    #[error("No API key configured for provider {provider}")]
    MissingCredential { provider: String },
}

impl GenerationError {
    pub(crate) fn from_status(status: u16) -> Self {
        match status {
            429 => GenerationError::RateLimited,
            503 => GenerationError::Unavailable,
            _ => GenerationError::Http { status },
        }
    }

    /// HTTP status carried by the error, when it came from a response.
    pub fn status(&self) -> Option<u16> {
        match self {
            GenerationError::RateLimited => Some(429),
            GenerationError::Unavailable => Some(503),
            GenerationError::Http { status } => Some(*status),
            _ => None,
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, GenerationError::Timeout { .. })
    }

    /// Transient conditions worth another attempt. A timeout is final: the
    /// caller never waits longer than one timeout window.
    pub fn is_retryable(&self) -> bool {
        match self {
            GenerationError::RateLimited
            | GenerationError::Unavailable
            | GenerationError::Network(_) => true,
            GenerationError::Http { status } => (500..=599).contains(status),
            _ => false,
        }
    }
}
