//! Input analysis ahead of generation.
//!
//! ```text
//! raw text → cleaner (normalize) → router (strategy) + subject (subject, level)
//!          → tokenizer (sentences, key points)
//! ```

pub mod cleaner;
pub mod router;
pub mod subject;
pub mod tokenizer;

pub use cleaner::{Cleaner, CleanerError};
pub use router::{CreativeKind, ProblemKind, Strategy};
pub use subject::{Level, Subject};
pub use tokenizer::{TokenInfo, Tokenizer};

/// Case-sensitive substring membership; callers lowercase first.
pub(crate) fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}

/// Everything the chat pipeline derives from one input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Analysis {
    pub strategy: Strategy,
    pub subject: Subject,
    pub level: Level,
}

impl Analysis {
    pub fn of(input: &str) -> Self {
        Self {
            strategy: Strategy::classify(input),
            subject: Subject::identify(input),
            level: Level::assess(input),
        }
    }
}

#[cfg(test)]
mod tests;
