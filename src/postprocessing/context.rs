//! Subject and level notes appended to a response.

use crate::postprocessing::traits::Enhancer;
use crate::preprocessing::{Level, Subject};

pub struct SubjectTip;

impl SubjectTip {
    pub fn tip(subject: Subject) -> Option<&'static str> {
        match subject {
            Subject::Mathematics => {
                Some("💡 Math Tip: Practice with similar problems to reinforce your understanding!")
            }
            Subject::Science => {
                Some("🔬 Science Insight: Try to relate this concept to real-world applications!")
            }
            Subject::Engineering => Some(
                "⚙️ Engineering Note: Consider the practical implications and design constraints!",
            ),
            Subject::Literature => {
                Some("📚 Literature Note: Pay attention to themes, symbols, and literary devices!")
            }
            Subject::History => Some(
                "📜 Historical Context: Understanding the timeline and cause-effect relationships is key!",
            ),
            Subject::ComputerScience => {
                Some("💻 Coding Tip: Try implementing this concept in a small project!")
            }
            _ => None,
        }
    }
}

impl Enhancer for SubjectTip {
    fn apply(&self, text: &str, subject: Subject, _level: Level) -> String {
        match Self::tip(subject) {
            Some(tip) => format!("{}\n\n{}", text, tip),
            None => text.to_string(),
        }
    }
}

pub struct LevelNote;

impl LevelNote {
    pub fn note(level: Level) -> Option<&'static str> {
        match level {
            Level::Beginner => Some("🌱 Beginner Friendly: Take your time to understand each step!"),
            Level::Advanced => Some(
                "🚀 Advanced Level: This builds on previous knowledge and prepares you for higher concepts!",
            ),
            Level::Intermediate => None,
        }
    }
}

impl Enhancer for LevelNote {
    fn apply(&self, text: &str, _subject: Subject, level: Level) -> String {
        match Self::note(level) {
            Some(note) => format!("{}\n\n{}", text, note),
            None => text.to_string(),
        }
    }
}
