//! Pluggable post-processing traits.

use crate::preprocessing::{Level, Subject};

/// One step of response enhancement. Returns the text unchanged when it has
/// nothing to add.
pub trait Enhancer: Send + Sync {
    fn apply(&self, text: &str, subject: Subject, level: Level) -> String;
}
