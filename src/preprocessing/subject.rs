use super::contains_any;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Subject {
    Mathematics,
    Science,
    Engineering,
    Literature,
    History,
    Languages,
    Arts,
    Business,
    ComputerScience,
    General,
}

impl Subject {
    /// Checked in order; the first subject with a matching keyword wins.
    const KEYWORDS: &'static [(Subject, &'static [&'static str])] = &[
        (
            Subject::Mathematics,
            &["math", "algebra", "calculus", "geometry", "trigonometry", "statistics"],
        ),
        (
            Subject::Science,
            &["science", "physics", "chemistry", "biology", "earth science"],
        ),
        (
            Subject::Engineering,
            &["engineering", "mechanical", "electrical", "civil", "computer engineering"],
        ),
        (
            Subject::Literature,
            &["literature", "english", "writing", "poetry", "novel", "essay"],
        ),
        (
            Subject::History,
            &["history", "historical", "ancient", "medieval", "modern"],
        ),
        (
            Subject::Languages,
            &["language", "grammar", "writing", "speaking", "communication"],
        ),
        (
            Subject::Arts,
            &["art", "painting", "music", "dance", "theater", "creative"],
        ),
        (
            Subject::Business,
            &["business", "management", "marketing", "finance", "economics"],
        ),
        (
            Subject::ComputerScience,
            &["programming", "coding", "software", "computer science", "algorithm"],
        ),
    ];

    pub const ALL: [Subject; 10] = [
        Subject::Mathematics,
        Subject::Science,
        Subject::Engineering,
        Subject::Literature,
        Subject::History,
        Subject::Languages,
        Subject::Arts,
        Subject::Business,
        Subject::ComputerScience,
        Subject::General,
    ];

    /// Total: every input maps to one of the subjects, `General` by default.
    pub fn identify(input: &str) -> Self {
        let lower = input.to_lowercase();
        Self::KEYWORDS
            .iter()
            .find(|(_, keywords)| contains_any(&lower, keywords))
            .map(|(subject, _)| *subject)
            .unwrap_or(Subject::General)
    }

    pub fn key(&self) -> &'static str {
        match self {
            Subject::Mathematics => "mathematics",
            Subject::Science => "science",
            Subject::Engineering => "engineering",
            Subject::Literature => "literature",
            Subject::History => "history",
            Subject::Languages => "languages",
            Subject::Arts => "arts",
            Subject::Business => "business",
            Subject::ComputerScience => "computer_science",
            Subject::General => "general",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Subject::Mathematics => "Mathematics",
            Subject::Science => "Science",
            Subject::Engineering => "Engineering",
            Subject::Literature => "Literature",
            Subject::History => "History",
            Subject::Languages => "Languages",
            Subject::Arts => "Arts",
            Subject::Business => "Business",
            Subject::ComputerScience => "Computer Science",
            Subject::General => "General",
        }
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum Level {
    Beginner,
    #[default]
    Intermediate,
    Advanced,
}

impl Level {
    const ADVANCED: &'static [&'static str] =
        &["advanced", "complex", "sophisticated", "graduate", "expert"];
    const BEGINNER: &'static [&'static str] = &["beginner", "basic", "intro", "simple", "elementary"];

    pub fn assess(input: &str) -> Self {
        let lower = input.to_lowercase();
        if contains_any(&lower, Self::ADVANCED) {
            Level::Advanced
        } else if contains_any(&lower, Self::BEGINNER) {
            Level::Beginner
        } else {
            Level::Intermediate
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Beginner => "beginner",
            Level::Intermediate => "intermediate",
            Level::Advanced => "advanced",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
