//! Keyword heuristics for question topic and difficulty.

use super::types::QuestionType;
use crate::preprocessing::contains_any;

/// Checked in order by [`identify_topic`].
const TOPIC_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "Algebra",
        &["equation", "variable", "solve", "algebra", "polynomial", "quadratic"],
    ),
    (
        "Geometry",
        &["angle", "triangle", "circle", "area", "perimeter", "volume", "shape"],
    ),
    (
        "Calculus",
        &["derivative", "integral", "limit", "function", "calculus", "differentiation"],
    ),
    (
        "Statistics",
        &["mean", "median", "mode", "probability", "distribution", "data"],
    ),
    (
        "Physics",
        &["force", "energy", "motion", "velocity", "acceleration", "mass"],
    ),
    (
        "Chemistry",
        &["molecule", "atom", "reaction", "compound", "element", "chemical"],
    ),
    (
        "Biology",
        &["cell", "organism", "evolution", "genetics", "ecosystem", "species"],
    ),
    (
        "Reading Comprehension",
        &["passage", "main idea", "inference", "comprehension"],
    ),
    (
        "Writing",
        &["essay", "paragraph", "grammar", "sentence", "composition"],
    ),
    (
        "History",
        &["war", "revolution", "ancient", "medieval", "historical"],
    ),
];

const SUBJECT_TOPICS: &[(&str, &[&str])] = &[
    (
        "Mathematics",
        &["Algebra", "Geometry", "Calculus", "Statistics", "Trigonometry"],
    ),
    ("Science", &["Physics", "Chemistry", "Biology", "Earth Science"]),
    (
        "English",
        &["Reading Comprehension", "Writing", "Grammar", "Literature"],
    ),
    (
        "History",
        &["World History", "US History", "Ancient History", "Modern History"],
    ),
    (
        "Social Studies",
        &["Geography", "Civics", "Economics", "Psychology"],
    ),
];

const COMPLEX_WORDS: &[&str] = &[
    "analyze",
    "evaluate",
    "synthesize",
    "compare",
    "contrast",
    "derive",
    "calculate",
];
const SIMPLE_WORDS: &[&str] = &["define", "identify", "list", "name", "state", "what is"];

/// Lowercase keywords for a topic; unknown topics match their own name.
pub fn topic_keywords(topic: &str) -> Vec<String> {
    TOPIC_KEYWORDS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(topic))
        .map(|(_, keywords)| keywords.iter().map(|k| k.to_string()).collect())
        .unwrap_or_else(|| vec![topic.to_lowercase()])
}

/// Topic a question text belongs to, `General` when nothing matches.
pub fn identify_topic(text: &str) -> &'static str {
    let lower = text.to_lowercase();
    TOPIC_KEYWORDS
        .iter()
        .find(|(_, keywords)| contains_any(&lower, keywords))
        .map(|(name, _)| *name)
        .unwrap_or("General")
}

/// Picks one of the requested topics for a question. When no topic's
/// keywords match, topics are assigned round-robin by `index`.
pub fn assign_topic(text: &str, topics: &[String], index: usize) -> String {
    if topics.is_empty() {
        return "General".to_string();
    }

    let lower = text.to_lowercase();
    topics
        .iter()
        .find(|topic| {
            topic_keywords(topic)
                .iter()
                .any(|keyword| lower.contains(keyword.as_str()))
        })
        .unwrap_or(&topics[index % topics.len()])
        .clone()
}

/// Difficulty on a 1..=10 scale from length, question type and verbs used.
pub fn assess_difficulty(text: &str, question_type: QuestionType) -> u8 {
    let mut difficulty: i32 = 5;

    let len = text.chars().count();
    if len > 100 {
        difficulty += 1;
    }
    if len < 30 {
        difficulty -= 1;
    }

    match question_type {
        QuestionType::Essay => difficulty += 2,
        QuestionType::ProblemSolving => difficulty += 1,
        _ => {}
    }

    let lower = text.to_lowercase();
    if contains_any(&lower, COMPLEX_WORDS) {
        difficulty += 2;
    }
    if contains_any(&lower, SIMPLE_WORDS) {
        difficulty -= 1;
    }

    difficulty.clamp(1, 10) as u8
}

/// Standard topics taught under a subject, if it is a known one.
pub fn subject_topics(subject: &str) -> Option<&'static [&'static str]> {
    SUBJECT_TOPICS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(subject))
        .map(|(_, topics)| *topics)
}
