//! Deterministic content used whenever generation fails or parses to nothing.

use super::types::{ContentItem, ContentType, DocumentQuestion, QuestionType, TestQuestion};
use crate::preprocessing::{Cleaner, Tokenizer};

const KEY_POINT_FALLBACK_CHARS: usize = 200;

struct BankQuestion {
    text: &'static str,
    options: [&'static str; 4],
    correct_answer: usize,
    topic: &'static str,
    difficulty: u8,
}

const MATHEMATICS_BANK: &[BankQuestion] = &[
    BankQuestion {
        text: "What is the value of x in the equation 2x + 5 = 13?",
        options: ["4", "6", "8", "9"],
        correct_answer: 0,
        topic: "Algebra",
        difficulty: 3,
    },
    BankQuestion {
        text: "Calculate the area of a circle with radius 7 cm.",
        options: ["49π cm²", "14π cm²", "154π cm²", "22π cm²"],
        correct_answer: 2,
        topic: "Geometry",
        difficulty: 4,
    },
    BankQuestion {
        text: "What is the derivative of x²?",
        options: ["x", "2x", "x²", "2x²"],
        correct_answer: 1,
        topic: "Calculus",
        difficulty: 6,
    },
];

const SCIENCE_BANK: &[BankQuestion] = &[
    BankQuestion {
        text: "What is the chemical symbol for water?",
        options: ["H2O", "CO2", "NaCl", "O2"],
        correct_answer: 0,
        topic: "Chemistry",
        difficulty: 2,
    },
    BankQuestion {
        text: "What is the unit of force?",
        options: ["Newton", "Joule", "Watt", "Pascal"],
        correct_answer: 0,
        topic: "Physics",
        difficulty: 4,
    },
];

const ENGLISH_BANK: &[BankQuestion] = &[BankQuestion {
    text: "What is a noun?",
    options: [
        "A word that describes an action",
        "A word that names a person, place, or thing",
        "A word that describes a noun",
        "A word that connects words",
    ],
    correct_answer: 1,
    topic: "Grammar",
    difficulty: 2,
}];

const GENERIC_OPTIONS: [&str; 4] = [
    "A) Basic concept",
    "B) Advanced theory",
    "C) Practical application",
    "D) Historical context",
];

/// Key points of a document, or its opening when no sentence qualifies.
fn key_points_or_opening(text: &str) -> Vec<String> {
    let points = Tokenizer::key_points(text);
    if !points.is_empty() {
        return points;
    }
    let opening = Cleaner::truncate(text.trim(), KEY_POINT_FALLBACK_CHARS);
    if opening.is_empty() {
        Vec::new()
    } else {
        vec![opening.to_string()]
    }
}

pub fn document_content(text: &str, content_type: ContentType, count: usize) -> Vec<ContentItem> {
    key_points_or_opening(text)
        .iter()
        .take(count)
        .enumerate()
        .map(|(index, point)| ContentItem {
            id: index + 1,
            title: format!("Generated {} {}", content_type, index + 1),
            content: content_for(point, content_type),
            kind: content_type.item_kind(),
        })
        .collect()
}

fn content_for(key_point: &str, content_type: ContentType) -> String {
    match content_type {
        ContentType::LessonNotes => format!(
            "## Key Concept\n\n{key_point}\n\n### Explanation\nThis concept is important for understanding the topic. It relates to the main themes discussed in the document.\n\n### Application\nThis concept can be applied in various practical scenarios.\n\n### Summary\nKey takeaway: {key_point}"
        ),
        ContentType::Quiz => format!(
            "**Question:** What is the main idea behind: {key_point}?\n\n**Options:**\nA) Basic concept\nB) Advanced theory\nC) Practical application\nD) Historical context\n\n**Answer:** A\n\n**Explanation:** This question tests understanding of the fundamental concept."
        ),
        ContentType::Flashcards => format!(
            "**Front:** {key_point}\n\n**Back:** This is a key concept from the document that requires understanding and application.\n\n**Example:** This concept can be seen in various real-world scenarios.\n\n**Related:** Related concepts and applications."
        ),
        ContentType::Summary => key_point.to_string(),
    }
}

/// Static bank for the subject, cycled to `count`. Unknown subjects use mathematics.
pub fn test_questions(subject: &str, count: usize) -> Vec<TestQuestion> {
    let bank = match subject.trim().to_lowercase().as_str() {
        "science" => SCIENCE_BANK,
        "english" => ENGLISH_BANK,
        _ => MATHEMATICS_BANK,
    };

    (0..count)
        .map(|i| {
            let base = &bank[i % bank.len()];
            TestQuestion {
                id: format!("q{}", i + 1),
                text: base.text.to_string(),
                question_type: QuestionType::MultipleChoice,
                options: base.options.iter().map(|o| o.to_string()).collect(),
                correct_answer: base.correct_answer,
                topic: base.topic.to_string(),
                difficulty: base.difficulty,
            }
        })
        .collect()
}

/// Placeholder used to pad a partially parsed test.
pub fn placeholder_question(id: usize, topics: &[String]) -> TestQuestion {
    let topic = if topics.is_empty() {
        "General".to_string()
    } else {
        topics[id.saturating_sub(1) % topics.len()].clone()
    };

    TestQuestion {
        id: format!("q{}", id),
        text: format!("Sample question about {}. What is the main concept?", topic),
        question_type: QuestionType::MultipleChoice,
        options: ["Option A", "Option B", "Option C", "Option D"]
            .iter()
            .map(|o| o.to_string())
            .collect(),
        correct_answer: 0,
        topic,
        difficulty: 5,
    }
}

pub fn document_questions(text: &str, count: usize) -> Vec<DocumentQuestion> {
    key_points_or_opening(text)
        .iter()
        .take(count)
        .enumerate()
        .map(|(index, point)| DocumentQuestion {
            id: index + 1,
            question: format!(
                "What is the main concept discussed in: \"{}...\"?",
                Cleaner::truncate(point, 100)
            ),
            question_type: "multiple-choice".to_string(),
            options: GENERIC_OPTIONS.iter().map(|o| o.to_string()).collect(),
            answer: "A".to_string(),
            explanation:
                "This question tests understanding of the fundamental concept from the document."
                    .to_string(),
        })
        .collect()
}

pub fn study_material(topic: &str) -> String {
    format!(
        "Study Material for {}: This is a placeholder. Please refer to your textbooks and class notes for detailed information.",
        topic
    )
}

pub fn study_overview(topic: &str) -> String {
    format!(
        "Here's a basic overview of {}: This topic covers fundamental concepts that are important for understanding the subject matter.",
        topic
    )
}
