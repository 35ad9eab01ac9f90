use super::contains_any;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

static ARITHMETIC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\d+\s*[+\-*/]\s*\d+").expect("arithmetic pattern is valid")
});

const PROBLEM_WORDS: &[&str] = &["solve", "equation", "formula", "calculate", "compute"];
const CALCULUS_WORDS: &[&str] = &["derivative", "integral", "limit", "function"];
const GEOMETRY_WORDS: &[&str] = &["angle", "triangle", "circle", "area", "volume"];
const LEARNING_WORDS: &[&str] = &["learn", "study", "understand", "explain", "teach", "how to"];
const QUESTION_WORDS: &[&str] = &["what", "why", "how", "when", "where", "who", "which"];
const CREATIVE_WORDS: &[&str] = &["write", "create", "generate", "story", "poem", "essay", "creative"];
const GREETING_WORDS: &[&str] = &[
    "hello",
    "hi",
    "hey",
    "thanks",
    "thank you",
    "good morning",
    "good afternoon",
];

/// Response strategy chosen for an input. The first matching predicate wins.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    KnowledgeBase,
    LearningPath,
    ProblemSolving,
    Conversational,
    Creative,
    General,
}

impl Strategy {
    pub fn classify(input: &str) -> Self {
        let lower = input.to_lowercase();

        if Self::is_math_problem(&lower) {
            Strategy::ProblemSolving
        } else if contains_any(&lower, LEARNING_WORDS) {
            Strategy::LearningPath
        } else if Self::is_question(&lower) {
            Strategy::KnowledgeBase
        } else if contains_any(&lower, CREATIVE_WORDS) {
            Strategy::Creative
        } else if contains_any(&lower, GREETING_WORDS) {
            Strategy::Conversational
        } else {
            Strategy::General
        }
    }

    pub(crate) fn is_math_problem(lower: &str) -> bool {
        ARITHMETIC.is_match(lower)
            || contains_any(lower, PROBLEM_WORDS)
            || contains_any(lower, CALCULUS_WORDS)
            || contains_any(lower, GEOMETRY_WORDS)
    }

    fn is_question(lower: &str) -> bool {
        let trimmed = lower.trim_start();
        QUESTION_WORDS.iter().any(|word| trimmed.starts_with(word))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::KnowledgeBase => "knowledge_base",
            Strategy::LearningPath => "learning_path",
            Strategy::ProblemSolving => "problem_solving",
            Strategy::Conversational => "conversational",
            Strategy::Creative => "creative",
            Strategy::General => "general",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of problem a problem-solving input poses.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ProblemKind {
    Math,
    Science,
    Programming,
    Logic,
    General,
}

impl ProblemKind {
    const PROGRAMMING: &'static [&'static str] =
        &["code", "program", "algorithm", "debug", "compile", "loop", "array"];
    const SCIENCE: &'static [&'static str] = &[
        "physics",
        "chemistry",
        "biology",
        "force",
        "energy",
        "velocity",
        "acceleration",
        "reaction",
        "molecule",
        "cell",
    ];
    const LOGIC: &'static [&'static str] = &["logic", "puzzle", "riddle", "deduce", "true or false"];

    pub fn identify(input: &str) -> Self {
        let lower = input.to_lowercase();

        if contains_any(&lower, Self::PROGRAMMING) {
            ProblemKind::Programming
        } else if contains_any(&lower, Self::SCIENCE) {
            ProblemKind::Science
        } else if contains_any(&lower, Self::LOGIC) {
            ProblemKind::Logic
        } else if Strategy::is_math_problem(&lower) || contains_any(&lower, &["math", "algebra"]) {
            ProblemKind::Math
        } else {
            ProblemKind::General
        }
    }
}

/// Kind of piece a creative input asks for.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CreativeKind {
    Story,
    Poem,
    Essay,
    Explanation,
    General,
}

impl CreativeKind {
    pub fn identify(input: &str) -> Self {
        let lower = input.to_lowercase();

        if contains_any(&lower, &["story", "tale", "narrative"]) {
            CreativeKind::Story
        } else if contains_any(&lower, &["poem", "poetry", "haiku", "verse"]) {
            CreativeKind::Poem
        } else if contains_any(&lower, &["essay", "article"]) {
            CreativeKind::Essay
        } else if contains_any(&lower, &["explanation", "describe", "illustrate"]) {
            CreativeKind::Explanation
        } else {
            CreativeKind::General
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CreativeKind::Story => "story",
            CreativeKind::Poem => "poem",
            CreativeKind::Essay => "essay",
            CreativeKind::Explanation => "explanation",
            CreativeKind::General => "piece",
        }
    }
}
