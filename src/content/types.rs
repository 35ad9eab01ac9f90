use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Template family requested from a document.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ContentType {
    LessonNotes,
    Quiz,
    Flashcards,
    Summary,
}

impl ContentType {
    pub const ALL: [ContentType; 4] = [
        ContentType::LessonNotes,
        ContentType::Quiz,
        ContentType::Flashcards,
        ContentType::Summary,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::LessonNotes => "lesson-notes",
            ContentType::Quiz => "quiz",
            ContentType::Flashcards => "flashcards",
            ContentType::Summary => "summary",
        }
    }

    pub fn item_kind(&self) -> ItemKind {
        match self {
            ContentType::LessonNotes => ItemKind::LessonNote,
            ContentType::Quiz => ItemKind::QuizQuestion,
            ContentType::Flashcards => ItemKind::Flashcard,
            ContentType::Summary => ItemKind::Summary,
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "lesson-notes" | "lesson_notes" | "notes" => Ok(ContentType::LessonNotes),
            "quiz" => Ok(ContentType::Quiz),
            "flashcards" | "flashcard" => Ok(ContentType::Flashcards),
            "summary" => Ok(ContentType::Summary),
            other => Err(format!(
                "Unknown content type '{}'. Expected one of: lesson-notes, quiz, flashcards, summary",
                other
            )),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ItemKind {
    LessonNote,
    QuizQuestion,
    Flashcard,
    Summary,
}

/// One generated unit of educational material.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ContentItem {
    pub id: usize,
    pub title: String,
    pub content: String,
    pub kind: ItemKind,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct GenerationRequest {
    pub content_type: ContentType,
    pub difficulty: String,
    pub count: usize,
    pub subject: String,
}

impl Default for GenerationRequest {
    fn default() -> Self {
        Self {
            content_type: ContentType::LessonNotes,
            difficulty: "intermediate".to_string(),
            count: 5,
            subject: "General".to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    #[default]
    MultipleChoice,
    TrueFalse,
    ShortAnswer,
    Essay,
    ProblemSolving,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TestQuestion {
    pub id: String,
    pub text: String,
    #[serde(rename = "type", default)]
    pub question_type: QuestionType,
    #[serde(default)]
    pub options: Vec<String>,
    /// Zero-based index into `options`.
    #[serde(default)]
    pub correct_answer: usize,
    pub topic: String,
    /// 1 (very easy) to 10 (very hard).
    pub difficulty: u8,
}

/// Percentages of easy, medium and hard questions.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct DifficultyMix {
    pub easy: u8,
    pub medium: u8,
    pub hard: u8,
}

impl Default for DifficultyMix {
    fn default() -> Self {
        Self {
            easy: 30,
            medium: 50,
            hard: 20,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TestRequest {
    pub subject: String,
    pub topics: Vec<String>,
    pub count: usize,
    pub difficulty: DifficultyMix,
    pub grade_level: String,
}

impl Default for TestRequest {
    fn default() -> Self {
        Self {
            subject: "General".to_string(),
            topics: Vec::new(),
            count: 10,
            difficulty: DifficultyMix::default(),
            grade_level: "High School".to_string(),
        }
    }
}

/// Free-form question extracted from a document, answer kept as written.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DocumentQuestion {
    pub id: usize,
    pub question: String,
    pub question_type: String,
    pub options: Vec<String>,
    pub answer: String,
    pub explanation: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct DocumentQuestionRequest {
    pub difficulty: String,
    pub count: usize,
    pub question_types: Vec<String>,
}

impl Default for DocumentQuestionRequest {
    fn default() -> Self {
        Self {
            difficulty: "intermediate".to_string(),
            count: 5,
            question_types: vec![
                "multiple-choice".to_string(),
                "true-false".to_string(),
                "short-answer".to_string(),
            ],
        }
    }
}
