//! Conversation log, per-session user context and snapshot persistence.

pub mod context;
pub mod log;
pub mod snapshot;

pub use context::{ContextUpdate, UserContext};
pub use log::{ConversationLog, ConversationTurn};
pub use snapshot::{SessionStore, ANALYTICS_KEY, HISTORY_KEY};

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HistoryError {
    #[error("Session file {path} could not be accessed: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Session snapshot could not be serialized: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests;
