//! Per-student results: topic scores, strengths, weaknesses and study advice.

use super::curriculum::{by_asc, by_desc, classify_question};
use super::types::{
    LearningStyle, Priority, QuestionRecord, StudentRecommendation, StudentRecommendationKind,
    StudentRecord, StudentTopic, TopicScore,
};
use crate::llm::{GenerationOptions, TextGenerator};
use tracing::{debug, warn};

const STRENGTH_FROM: f64 = 80.0;
const WEAKNESS_BELOW: f64 = 60.0;
const PRACTICE_BELOW: f64 = 70.0;
const MAX_LISTED: usize = 3;

const TOPIC_RESOURCES: &[(&str, [&str; 3])] = &[
    ("Algebra", ["Khan Academy Algebra", "Practice worksheets", "Online calculators"]),
    ("Geometry", ["Geometric software", "Shape manipulatives", "Visual proofs"]),
    ("Calculus", ["Graphing calculators", "Step-by-step guides", "Video tutorials"]),
    ("Physics", ["Simulation software", "Lab experiments", "Physics videos"]),
    ("Chemistry", ["Molecular models", "Lab simulations", "Periodic table apps"]),
    ("Biology", ["Microscopes", "Anatomy models", "Interactive diagrams"]),
    (
        "Reading Comprehension",
        ["Reading passages", "Comprehension strategies", "Vocabulary lists"],
    ),
    ("Writing", ["Writing prompts", "Grammar guides", "Peer review forms"]),
    ("History", ["Timeline tools", "Primary sources", "Historical maps"]),
];

const DEFAULT_RESOURCES: [&str; 3] = ["Textbooks", "Online resources", "Practice materials"];

pub fn strength_label(score: f64) -> &'static str {
    if score >= 90.0 {
        "Excellent mastery"
    } else if score >= 80.0 {
        "Strong understanding"
    } else if score >= 70.0 {
        "Good grasp"
    } else {
        "Developing"
    }
}

pub fn weakness_label(score: f64) -> &'static str {
    if score < 40.0 {
        "Needs significant support"
    } else if score < 60.0 {
        "Requires additional practice"
    } else if score < 70.0 {
        "Needs reinforcement"
    } else {
        "Room for improvement"
    }
}

pub fn topic_resources(topic: &str) -> Vec<String> {
    TOPIC_RESOURCES
        .iter()
        .find(|(name, _)| *name == topic)
        .map(|(_, resources)| resources)
        .unwrap_or(&DEFAULT_RESOURCES)
        .iter()
        .map(|r| r.to_string())
        .collect()
}

/// Answers grouped by the topic of their question. Answers to unknown
/// questions are skipped.
pub fn student_topics(student: &StudentRecord, questions: &[QuestionRecord]) -> Vec<StudentTopic> {
    let mut topics: Vec<StudentTopic> = Vec::new();

    for answer in &student.answers {
        let Some(question) = questions.iter().find(|q| q.id == answer.question_id) else {
            debug!(question_id = %answer.question_id, "Answer refers to unknown question");
            continue;
        };
        let (topic, difficulty) = classify_question(question);

        let index = match topics.iter().position(|t| t.topic == topic) {
            Some(index) => index,
            None => {
                topics.push(StudentTopic {
                    topic: topic.to_string(),
                    total_questions: 0,
                    correct_answers: 0,
                    average_time: 0.0,
                    difficulty: 0.0,
                    score: 0.0,
                });
                topics.len() - 1
            }
        };

        let entry = &mut topics[index];
        entry.total_questions += 1;
        if answer.is_correct {
            entry.correct_answers += 1;
        }
        entry.average_time += answer.time_spent;
        entry.difficulty += difficulty as f64;
    }

    for topic in &mut topics {
        let n = topic.total_questions as f64;
        topic.score = topic.correct_answers as f64 * 100.0 / n;
        topic.average_time /= n;
        topic.difficulty /= n;
    }
    topics
}

/// Topics scored at 80 or above, best first, at most three.
pub fn strengths(topics: &[StudentTopic]) -> Vec<TopicScore> {
    let mut strong: Vec<&StudentTopic> = topics.iter().filter(|t| t.score >= STRENGTH_FROM).collect();
    strong.sort_by(|a, b| by_desc(a.score, b.score));
    strong
        .into_iter()
        .take(MAX_LISTED)
        .map(|t| TopicScore {
            topic: t.topic.clone(),
            score: t.score,
            label: strength_label(t.score).to_string(),
        })
        .collect()
}

/// Topics scored under 60, worst first, at most three.
pub fn weaknesses(topics: &[StudentTopic]) -> Vec<TopicScore> {
    let mut weak: Vec<&StudentTopic> = topics.iter().filter(|t| t.score < WEAKNESS_BELOW).collect();
    weak.sort_by(|a, b| by_asc(a.score, b.score));
    weak.into_iter()
        .take(MAX_LISTED)
        .map(|t| TopicScore {
            topic: t.topic.clone(),
            score: t.score,
            label: weakness_label(t.score).to_string(),
        })
        .collect()
}

/// Asks the generator for a learning style; any failure means `Mixed`.
pub async fn learning_style(generator: &dyn TextGenerator, student: &StudentRecord) -> LearningStyle {
    let sample: Vec<_> = student.answers.iter().take(5).collect();
    let patterns = serde_json::to_string(&sample).unwrap_or_default();
    let prompt = format!(
        "Based on this student's performance data, identify their learning style:
- Visual: Prefers diagrams, charts, visual aids
- Auditory: Learns through listening, discussions
- Kinesthetic: Hands-on, practical learning
- Reading/Writing: Text-based learning

Student Performance:
- Average Score: {}%
- Time Spent: {} minutes
- Answer Patterns: {}

Learning Style:",
        student.score, student.time_spent, patterns
    );

    match generator
        .generate(&prompt, &GenerationOptions::chat(20, 0.3))
        .await
    {
        Ok(raw) => LearningStyle::detect(raw.strip_prefix(prompt.as_str()).unwrap_or(&raw)),
        Err(e) => {
            warn!(student = %student.id, error = %e, "Learning style lookup failed, assuming mixed");
            LearningStyle::Mixed
        }
    }
}

pub fn recommendations(
    overall_score: f64,
    weaknesses: &[TopicScore],
    style: LearningStyle,
) -> Vec<StudentRecommendation> {
    let mut recommendations: Vec<StudentRecommendation> = weaknesses
        .iter()
        .map(|weakness| StudentRecommendation {
            kind: StudentRecommendationKind::Study,
            priority: Priority::High,
            topic: Some(weakness.topic.clone()),
            action: format!(
                "Focus on {} - current score: {:.1}%",
                weakness.topic, weakness.score
            ),
            resources: topic_resources(&weakness.topic),
            timeline: "2-3 weeks".to_string(),
        })
        .collect();

    if overall_score < PRACTICE_BELOW {
        recommendations.push(StudentRecommendation {
            kind: StudentRecommendationKind::Practice,
            priority: Priority::High,
            topic: None,
            action: "Increase practice time and frequency".to_string(),
            resources: ["Practice tests", "Sample questions", "Study groups"]
                .iter()
                .map(|r| r.to_string())
                .collect(),
            timeline: "1-2 weeks".to_string(),
        });
    }

    if style == LearningStyle::Visual {
        recommendations.push(StudentRecommendation {
            kind: StudentRecommendationKind::LearningStyle,
            priority: Priority::Medium,
            topic: None,
            action: "Use more visual aids and diagrams".to_string(),
            resources: ["Infographics", "Videos", "Charts", "Mind maps"]
                .iter()
                .map(|r| r.to_string())
                .collect(),
            timeline: "Ongoing".to_string(),
        });
    }

    recommendations
}
