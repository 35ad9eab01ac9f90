use crate::preprocessing::{Cleaner, Level, Subject};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

pub const DEFAULT_CAPACITY: usize = 50;
const CONTEXT_TURNS: usize = 3;
const CONTEXT_REPLY_CHARS: usize = 100;

/// One completed exchange. Never mutated after creation.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ConversationTurn {
    pub timestamp: DateTime<Utc>,
    pub user_text: String,
    pub assistant_text: String,
    pub subject: Subject,
    pub level: Level,
}

impl ConversationTurn {
    pub fn new(user_text: &str, assistant_text: &str) -> Self {
        Self {
            timestamp: Utc::now(),
            user_text: user_text.to_string(),
            assistant_text: assistant_text.to_string(),
            subject: Subject::identify(user_text),
            level: Level::assess(user_text),
        }
    }
}

/// Bounded, oldest-first log of turns.
#[derive(Debug, Clone)]
pub struct ConversationLog {
    turns: VecDeque<ConversationTurn>,
    capacity: usize,
}

impl Default for ConversationLog {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl ConversationLog {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            turns: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Rebuilds a log from a snapshot, keeping only the newest `capacity` turns.
    pub fn from_turns(turns: Vec<ConversationTurn>, capacity: usize) -> Self {
        let mut log = Self::new(capacity);
        for turn in turns {
            log.push(turn);
        }
        log
    }

    pub fn push(&mut self, turn: ConversationTurn) {
        if self.turns.len() == self.capacity {
            self.turns.pop_front();
        }
        self.turns.push_back(turn);
    }

    pub fn record(&mut self, user_text: &str, assistant_text: &str) {
        self.push(ConversationTurn::new(user_text, assistant_text));
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.turns.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &ConversationTurn> {
        self.turns.iter()
    }

    pub fn to_vec(&self) -> Vec<ConversationTurn> {
        self.turns.iter().cloned().collect()
    }

    /// Prompt context built from the last three turns, empty when there are none.
    pub fn context_window(&self) -> String {
        if self.turns.is_empty() {
            return String::new();
        }

        let skip = self.turns.len().saturating_sub(CONTEXT_TURNS);
        let mut context = String::from("Recent conversation context: ");
        for (index, turn) in self.turns.iter().skip(skip).enumerate() {
            context.push_str(&format!(
                "[{}] User: {} | Assistant: {}... ",
                index + 1,
                turn.user_text,
                Cleaner::truncate(&turn.assistant_text, CONTEXT_REPLY_CHARS)
            ));
        }
        context
    }
}
