//! Class-wide views of a test: topics, difficulty spread, insights and
//! curriculum recommendations.

use super::types::{
    CurriculumRecommendation, CurriculumRecommendationKind, DifficultTopic, DifficultyAnalysis,
    Insights, Priority, QuestionRecord, QuestionSummary, StudentPerformance, TopicAnalysis,
};
use crate::content::taxonomy::{assess_difficulty, identify_topic};
use std::cmp::Ordering;

const STRUGGLING_BELOW: f64 = 60.0;
const MAX_DIFFICULT_TOPICS: usize = 5;

const TEACHING_METHODS: &[(&str, &str)] = &[
    ("Algebra", "Use step-by-step problem solving with visual aids and real-world examples"),
    ("Geometry", "Incorporate hands-on activities and geometric software"),
    ("Calculus", "Break down complex concepts into smaller, manageable parts"),
    ("Physics", "Use demonstrations and experiments to illustrate concepts"),
    ("Chemistry", "Focus on molecular models and reaction mechanisms"),
    ("Biology", "Use diagrams, models, and case studies"),
    ("Reading Comprehension", "Practice with various text types and reading strategies"),
    ("Writing", "Provide structured writing templates and peer review"),
    ("History", "Use timelines, primary sources, and cause-effect relationships"),
];

pub(crate) fn by_desc(a: f64, b: f64) -> Ordering {
    b.partial_cmp(&a).unwrap_or(Ordering::Equal)
}

pub(crate) fn by_asc(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

/// Canonical topic and difficulty of a question.
pub fn classify_question(question: &QuestionRecord) -> (&'static str, u8) {
    (
        identify_topic(&question.text),
        assess_difficulty(&question.text, question.question_type),
    )
}

/// Questions grouped by topic, hardest topic first. Topics keep first-seen
/// order among equal difficulty.
pub fn analyze_topics(questions: &[QuestionRecord]) -> Vec<TopicAnalysis> {
    let mut topics: Vec<TopicAnalysis> = Vec::new();

    for question in questions {
        let (topic, difficulty) = classify_question(question);
        let index = match topics.iter().position(|t| t.name == topic) {
            Some(index) => index,
            None => {
                topics.push(TopicAnalysis {
                    name: topic.to_string(),
                    questions: Vec::new(),
                    average_difficulty: 0.0,
                    correct_answers: 0,
                    incorrect_answers: 0,
                    average_score: 0.0,
                    time_spent: 0.0,
                });
                topics.len() - 1
            }
        };

        let entry = &mut topics[index];
        entry.correct_answers += question.correct_answers;
        entry.incorrect_answers += question
            .total_attempts
            .saturating_sub(question.correct_answers);
        entry.time_spent += question.average_time;
        entry.questions.push(QuestionSummary {
            id: question.id.clone(),
            text: question.text.clone(),
            difficulty,
            correct_answers: question.correct_answers,
            total_attempts: question.total_attempts,
            average_time: question.average_time,
        });
    }

    for topic in &mut topics {
        let n = topic.questions.len() as f64;
        topic.average_difficulty =
            topic.questions.iter().map(|q| q.difficulty as f64).sum::<f64>() / n;
        topic.time_spent /= n;
        let attempts = topic.correct_answers + topic.incorrect_answers;
        topic.average_score = if attempts == 0 {
            0.0
        } else {
            topic.correct_answers as f64 * 100.0 / attempts as f64
        };
    }

    topics.sort_by(|a, b| by_desc(a.average_difficulty, b.average_difficulty));
    topics
}

pub fn analyze_difficulty(questions: &[QuestionRecord]) -> DifficultyAnalysis {
    if questions.is_empty() {
        return DifficultyAnalysis::default();
    }

    let mut analysis = DifficultyAnalysis::default();
    let mut hardest: Option<(u8, &str)> = None;
    let mut total = 0u32;

    for question in questions {
        let (_, difficulty) = classify_question(question);
        total += difficulty as u32;
        match difficulty {
            1..=3 => analysis.easy += 1,
            4..=7 => analysis.medium += 1,
            _ => analysis.hard += 1,
        }
        if hardest.map_or(true, |(d, _)| difficulty > d) {
            hardest = Some((difficulty, question.id.as_str()));
        }
    }

    analysis.average = total as f64 / questions.len() as f64;
    analysis.hardest_question = hardest.map(|(_, id)| id.to_string());
    analysis
}

/// Mean of the students' overall scores, 0 for an empty class.
pub fn overall_performance(students: &[StudentPerformance]) -> f64 {
    if students.is_empty() {
        return 0.0;
    }
    students.iter().map(|s| s.overall_score).sum::<f64>() / students.len() as f64
}

/// The lowest-scoring topics with how many students struggled on each.
pub fn difficult_topics(
    topics: &[TopicAnalysis],
    students: &[StudentPerformance],
) -> Vec<DifficultTopic> {
    let mut difficult: Vec<DifficultTopic> = topics
        .iter()
        .map(|topic| DifficultTopic {
            topic: topic.name.clone(),
            average_score: topic.average_score,
            difficulty: topic.average_difficulty,
            question_count: topic.questions.len(),
            struggling_students: students
                .iter()
                .filter(|student| {
                    student
                        .topics
                        .iter()
                        .any(|t| t.topic == topic.name && t.score < STRUGGLING_BELOW)
                })
                .count(),
        })
        .collect();

    difficult.sort_by(|a, b| by_asc(a.average_score, b.average_score));
    difficult.truncate(MAX_DIFFICULT_TOPICS);
    difficult
}

pub fn insights(topics: &[TopicAnalysis], students: &[StudentPerformance]) -> Insights {
    Insights {
        overall_performance: overall_performance(students),
        difficult_topics: difficult_topics(topics, students),
    }
}

pub fn teaching_method(topic: &str) -> &'static str {
    TEACHING_METHODS
        .iter()
        .find(|(name, _)| *name == topic)
        .map(|(_, method)| *method)
        .unwrap_or("Use varied teaching methods and provide additional support")
}

/// One teaching-method entry per difficult topic, then the resource and
/// assessment entries every test gets.
pub fn curriculum_recommendations(difficult: &[DifficultTopic]) -> Vec<CurriculumRecommendation> {
    let mut recommendations: Vec<CurriculumRecommendation> = difficult
        .iter()
        .map(|topic| CurriculumRecommendation {
            kind: CurriculumRecommendationKind::TeachingMethod,
            recommendation: teaching_method(&topic.topic).to_string(),
            topics: vec![topic.topic.clone()],
            current_score: Some(topic.average_score),
            frequency: None,
            priority: Priority::High,
            timeline: "Next 2-3 classes".to_string(),
        })
        .collect();

    recommendations.push(CurriculumRecommendation {
        kind: CurriculumRecommendationKind::Resources,
        recommendation: "Provide additional practice materials for difficult topics".to_string(),
        topics: difficult.iter().map(|t| t.topic.clone()).collect(),
        current_score: None,
        frequency: None,
        priority: Priority::Medium,
        timeline: "Within 1 week".to_string(),
    });

    recommendations.push(CurriculumRecommendation {
        kind: CurriculumRecommendationKind::Assessment,
        recommendation: "Implement formative assessments for difficult topics".to_string(),
        topics: Vec::new(),
        current_score: None,
        frequency: Some("Weekly".to_string()),
        priority: Priority::High,
        timeline: "Immediate".to_string(),
    });

    recommendations
}
