//! Final polish of the assistant response before it reaches the user.
//!
//! Enhancers run in a fixed order: subject tip, level note, follow-ups.

pub mod context;
pub mod fallback;
pub mod formatter;
pub mod suggestions;
pub mod traits;

pub use fallback::apology;
pub use formatter::{clean, strip_echo};
pub use traits::Enhancer;

use crate::preprocessing::{Level, Subject};
use context::{LevelNote, SubjectTip};
use suggestions::FollowUps;

pub struct PostProcessor {
    enhancers: Vec<Box<dyn Enhancer>>,
}

impl Default for PostProcessor {
    fn default() -> Self {
        Self {
            enhancers: vec![Box::new(SubjectTip), Box::new(LevelNote), Box::new(FollowUps)],
        }
    }
}

impl PostProcessor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enhances `text` using the subject and level inferred from `input`.
    pub fn enhance(&self, text: &str, input: &str) -> String {
        self.enhance_with(text, Subject::identify(input), Level::assess(input))
    }

    pub fn enhance_with(&self, text: &str, subject: Subject, level: Level) -> String {
        self.enhancers
            .iter()
            .fold(text.to_string(), |acc, enhancer| enhancer.apply(&acc, subject, level))
    }
}

#[cfg(test)]
mod tests;
