use crate::content::QuestionType;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------- input ----------

/// A graded test as exported by the quiz front end.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct TestData {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub date: String,
    pub questions: Vec<QuestionRecord>,
    #[serde(default)]
    pub students: Vec<StudentRecord>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct QuestionRecord {
    pub id: String,
    pub text: String,
    #[serde(rename = "type", default)]
    pub question_type: QuestionType,
    #[serde(default)]
    pub correct_answers: u32,
    #[serde(default)]
    pub total_attempts: u32,
    #[serde(default)]
    pub average_time: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct StudentRecord {
    pub id: String,
    pub name: String,
    /// Where result notifications go, when known.
    #[serde(default)]
    pub email: Option<String>,
    pub score: f64,
    #[serde(default)]
    pub time_spent: f64,
    #[serde(default)]
    pub answers: Vec<AnswerRecord>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct AnswerRecord {
    pub question_id: String,
    pub is_correct: bool,
    #[serde(default)]
    pub time_spent: f64,
}

// ---------- output ----------

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct QuestionSummary {
    pub id: String,
    pub text: String,
    pub difficulty: u8,
    pub correct_answers: u32,
    pub total_attempts: u32,
    pub average_time: f64,
}

/// Class-wide results for one topic.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TopicAnalysis {
    pub name: String,
    pub questions: Vec<QuestionSummary>,
    pub average_difficulty: f64,
    pub correct_answers: u32,
    pub incorrect_answers: u32,
    /// Percentage of correct attempts, 0 when nobody attempted.
    pub average_score: f64,
    /// Mean of the per-question average times.
    pub time_spent: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct DifficultyAnalysis {
    pub average: f64,
    /// Difficulty 1..=3.
    pub easy: usize,
    /// Difficulty 4..=7.
    pub medium: usize,
    /// Difficulty 8..=10.
    pub hard: usize,
    pub hardest_question: Option<String>,
}

/// One student's results for one topic.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct StudentTopic {
    pub topic: String,
    pub total_questions: usize,
    pub correct_answers: usize,
    pub average_time: f64,
    pub difficulty: f64,
    pub score: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TopicScore {
    pub topic: String,
    pub score: f64,
    pub label: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum LearningStyle {
    Visual,
    Auditory,
    Kinesthetic,
    ReadingWriting,
    #[default]
    Mixed,
}

impl LearningStyle {
    /// Reads a style out of free text; anything unrecognised is `Mixed`.
    pub fn detect(text: &str) -> Self {
        let lower = text.trim().to_lowercase();
        if lower.contains("visual") {
            LearningStyle::Visual
        } else if lower.contains("auditory") {
            LearningStyle::Auditory
        } else if lower.contains("kinesthetic") {
            LearningStyle::Kinesthetic
        } else if lower.contains("reading") || lower.contains("writing") {
            LearningStyle::ReadingWriting
        } else {
            LearningStyle::Mixed
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LearningStyle::Visual => "visual",
            LearningStyle::Auditory => "auditory",
            LearningStyle::Kinesthetic => "kinesthetic",
            LearningStyle::ReadingWriting => "reading/writing",
            LearningStyle::Mixed => "mixed",
        }
    }
}

impl fmt::Display for LearningStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    High,
    Medium,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StudentRecommendationKind {
    Study,
    Practice,
    LearningStyle,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct StudentRecommendation {
    pub kind: StudentRecommendationKind,
    pub priority: Priority,
    pub topic: Option<String>,
    pub action: String,
    pub resources: Vec<String>,
    pub timeline: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct StudentPerformance {
    pub student_id: String,
    pub student_name: String,
    pub overall_score: f64,
    pub total_questions: usize,
    pub correct_answers: usize,
    pub time_spent: f64,
    pub topics: Vec<StudentTopic>,
    pub strengths: Vec<TopicScore>,
    pub weaknesses: Vec<TopicScore>,
    pub learning_style: LearningStyle,
    pub recommendations: Vec<StudentRecommendation>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DifficultTopic {
    pub topic: String,
    pub average_score: f64,
    pub difficulty: f64,
    pub question_count: usize,
    /// Students scoring under 60 on the topic.
    pub struggling_students: usize,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Insights {
    pub overall_performance: f64,
    pub difficult_topics: Vec<DifficultTopic>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CurriculumRecommendationKind {
    TeachingMethod,
    Resources,
    Assessment,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CurriculumRecommendation {
    pub kind: CurriculumRecommendationKind,
    pub recommendation: String,
    pub topics: Vec<String>,
    pub current_score: Option<f64>,
    pub frequency: Option<String>,
    pub priority: Priority,
    pub timeline: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TestAnalysis {
    pub test_id: String,
    pub test_name: String,
    pub subject: String,
    pub date: String,
    pub total_questions: usize,
    pub total_students: usize,
    pub topics: Vec<TopicAnalysis>,
    pub difficulty: DifficultyAnalysis,
    pub student_performance: Vec<StudentPerformance>,
    pub insights: Insights,
    pub recommendations: Vec<CurriculumRecommendation>,
}

/// A topic's standing across every topic score it has been part of.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ConsolidatedTopic {
    pub topic: String,
    pub count: usize,
    pub total_score: f64,
    pub average_score: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ProgressEntry {
    pub date: DateTime<Utc>,
    pub test_id: String,
    pub score: f64,
    pub topics: Vec<StudentTopic>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct StudentProfile {
    pub id: String,
    pub name: String,
    pub overall_performance: f64,
    pub strengths: Vec<ConsolidatedTopic>,
    pub weaknesses: Vec<ConsolidatedTopic>,
    pub learning_style: LearningStyle,
    pub progress: Vec<ProgressEntry>,
}

/// Running class-wide averages for a topic across analysed tests.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TopicTrend {
    pub topic: String,
    pub tests: usize,
    pub average_score: f64,
    pub average_difficulty: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TestInfo {
    pub name: String,
    pub subject: String,
    pub date: String,
    pub total_questions: usize,
    pub total_students: usize,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Report {
    pub test_info: TestInfo,
    pub topic_analysis: Vec<TopicAnalysis>,
    pub student_performance: Vec<StudentPerformance>,
    pub insights: Insights,
    pub recommendations: Vec<CurriculumRecommendation>,
}
