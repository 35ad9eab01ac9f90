//! Marker-based parsing of generated text.
//!
//! The parsers assume the model followed the requested template. Segments
//! missing the expected sub-markers are dropped, never repaired.

use super::taxonomy::{assess_difficulty, assign_topic};
use super::types::{
    ContentItem, ContentType, DocumentQuestion, ItemKind, QuestionType, TestQuestion,
};
use regex::Regex;
use std::sync::LazyLock;

static QUIZ_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\s*Q\d+\s*[:.]").expect("quiz marker is valid"));
static TEST_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Q\d+\.").expect("test marker is valid"));
static OPTION_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-D]\)").expect("option pattern is valid"));
static LEADING_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d*\s*[:.\-]?\s*").expect("number pattern is valid"));
static TITLE_MARKUP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#+\s*|\*\*|\*\s*").expect("markup pattern is valid"));
static TYPE_FIELD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Type:\s*(.+)").expect("type pattern is valid"));
static ANSWER_FIELD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Answer:\s*(.+)").expect("answer pattern is valid"));
static EXPLANATION_FIELD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Explanation:\s*(.+)").expect("explanation pattern is valid"));

const LESSON_MARKER: &str = "## Lesson Note";
const LESSON_SUB_MARKERS: &[&str] = &["### Key Concepts", "### Explanation"];
const FLASHCARD_MARKER: &str = "**Front:**";
const FLASHCARD_SUB_MARKER: &str = "**Back:**";

/// Splits generated text into items for the requested template.
pub fn parse_document_content(text: &str, content_type: ContentType) -> Vec<ContentItem> {
    let kind = content_type.item_kind();
    let segments: Vec<(String, String)> = match content_type {
        ContentType::LessonNotes => text
            .split(LESSON_MARKER)
            .map(str::trim)
            .filter(|segment| LESSON_SUB_MARKERS.iter().any(|m| segment.contains(m)))
            .map(|segment| (lesson_title(segment), segment.to_string()))
            .collect(),
        ContentType::Quiz => QUIZ_MARKER
            .split(text)
            .map(str::trim)
            .filter(|segment| segment.contains("A)") && segment.contains("B)"))
            .enumerate()
            .map(|(index, segment)| (format!("Question {}", index + 1), segment.to_string()))
            .collect(),
        ContentType::Flashcards => text
            .split(FLASHCARD_MARKER)
            .map(str::trim)
            .filter(|segment| segment.contains(FLASHCARD_SUB_MARKER))
            .enumerate()
            .map(|(index, segment)| {
                (
                    format!("Flashcard {}", index + 1),
                    format!("{} {}", FLASHCARD_MARKER, segment),
                )
            })
            .collect(),
        ContentType::Summary => {
            let body = text.trim();
            if body.is_empty() {
                Vec::new()
            } else {
                vec![("Document Summary".to_string(), body.to_string())]
            }
        }
    };

    segments
        .into_iter()
        .enumerate()
        .map(|(index, (title, content))| ContentItem {
            id: index + 1,
            title,
            content,
            kind,
        })
        .collect()
}

fn lesson_title(segment: &str) -> String {
    let first = segment.lines().next().unwrap_or_default().trim();
    let title = LEADING_NUMBER.replace(first, "");
    if title.is_empty() || title.starts_with('#') {
        extract_title(segment)
    } else {
        title.trim().to_string()
    }
}

/// First heading or bold line with its markup removed.
pub fn extract_title(content: &str) -> String {
    content
        .lines()
        .map(str::trim)
        .find(|line| line.starts_with("##") || line.starts_with("**"))
        .map(|line| TITLE_MARKUP.replace_all(line, "").trim().to_string())
        .filter(|title| !title.is_empty())
        .unwrap_or_else(|| "Generated Content".to_string())
}

/// Parses one `Q<n>.` block: a question line, four lettered options and an
/// `Answer:` letter. Anything else yields `None`.
pub fn parse_test_question_block(block: &str, id: usize, topics: &[String]) -> Option<TestQuestion> {
    let lines: Vec<&str> = block
        .trim()
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    if lines.len() < 5 {
        return None;
    }

    let text = lines[0].to_string();
    let mut options = Vec::new();
    let mut correct_answer = None;

    for line in &lines[1..] {
        if OPTION_LINE.is_match(line) {
            options.push(line[2..].trim().to_string());
        } else if let Some(answer) = line.strip_prefix("Answer:") {
            correct_answer = answer
                .trim()
                .chars()
                .next()
                .map(|c| c.to_ascii_uppercase())
                .filter(|c| ('A'..='D').contains(c))
                .map(|c| (c as u8 - b'A') as usize);
        }
    }

    if options.len() < 4 {
        return None;
    }
    options.truncate(4);

    Some(TestQuestion {
        id: format!("q{}", id),
        topic: assign_topic(&text, topics, id.saturating_sub(1)),
        difficulty: assess_difficulty(&text, QuestionType::MultipleChoice),
        question_type: QuestionType::MultipleChoice,
        options,
        correct_answer: correct_answer?,
        text,
    })
}

/// Blocks that parsed, in order, at most `count`. Callers pad the rest.
pub fn parse_test_questions(text: &str, count: usize, topics: &[String]) -> Vec<TestQuestion> {
    let mut questions = Vec::new();
    for block in TEST_MARKER
        .split(text)
        .filter(|block| !block.trim().is_empty())
        .take(count)
    {
        if let Some(question) = parse_test_question_block(block, questions.len() + 1, topics) {
            questions.push(question);
        }
    }
    questions
}

pub fn parse_document_questions(text: &str) -> Vec<DocumentQuestion> {
    QUIZ_MARKER
        .split(text)
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .filter_map(|block| {
            if !ANSWER_FIELD.is_match(block) {
                return None;
            }
            let question = block.lines().next()?.trim().to_string();
            (!question.is_empty()).then_some((question, block))
        })
        .enumerate()
        .map(|(index, (question, block))| DocumentQuestion {
            id: index + 1,
            question,
            question_type: capture(&TYPE_FIELD, block).unwrap_or_else(|| "multiple-choice".into()),
            options: block
                .lines()
                .map(str::trim)
                .filter(|line| OPTION_LINE.is_match(line))
                .map(str::to_string)
                .collect(),
            answer: capture(&ANSWER_FIELD, block).unwrap_or_default(),
            explanation: capture(&EXPLANATION_FIELD, block).unwrap_or_default(),
        })
        .collect()
}

fn capture(pattern: &Regex, block: &str) -> Option<String> {
    pattern
        .captures(block)
        .map(|caps| caps[1].trim().to_string())
}
