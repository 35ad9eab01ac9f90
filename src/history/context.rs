use crate::preprocessing::{Level, Subject};
use serde::{Deserialize, Serialize};

pub const DEFAULT_RECENT_TOPICS: usize = 5;

/// Mutable per-session view of the learner.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct UserContext {
    pub current_subject: Option<Subject>,
    pub learning_level: Level,
    pub interests: Vec<String>,
    /// Most recent first.
    pub recent_topics: Vec<Subject>,
}

/// Partial update; `None` fields leave the context untouched.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct ContextUpdate {
    pub current_subject: Option<Subject>,
    pub learning_level: Option<Level>,
    pub interests: Option<Vec<String>>,
    pub recent_topics: Option<Vec<Subject>>,
}

impl UserContext {
    /// Folds one input's inferred subject and level into the context.
    pub fn observe(&mut self, subject: Subject, level: Level, recent_capacity: usize) {
        if subject != Subject::General {
            self.current_subject = Some(subject);
        }
        self.learning_level = level;

        self.recent_topics.insert(0, subject);
        self.recent_topics.truncate(recent_capacity);
    }

    pub fn merge(&mut self, update: ContextUpdate) {
        if let Some(subject) = update.current_subject {
            self.current_subject = Some(subject);
        }
        if let Some(level) = update.learning_level {
            self.learning_level = level;
        }
        if let Some(interests) = update.interests {
            self.interests = interests;
        }
        if let Some(topics) = update.recent_topics {
            self.recent_topics = topics;
        }
    }
}
