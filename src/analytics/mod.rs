//! # Test analytics
//!
//! Turns a graded test into topic, difficulty and per-student breakdowns,
//! then folds the results into long-lived student profiles and topic trends.
//!
//! Topic and difficulty always come from the keyword heuristics in
//! [`crate::content::taxonomy`]; only the learning style asks the remote
//! generator, and falls back to `mixed`.

pub mod curriculum;
pub mod performance;
pub mod profile;
pub mod types;

pub use types::{
    AnswerRecord, LearningStyle, QuestionRecord, Report, StudentPerformance, StudentProfile,
    StudentRecord, TestAnalysis, TestData, TestInfo, TopicTrend,
};

use crate::history::{HistoryError, SessionStore, ANALYTICS_KEY};
use crate::llm::TextGenerator;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, instrument};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum AnalyticsError {
    #[error("Test {0} has no questions")]
    EmptyTest(String),

    #[error("No analysis found for test {0}")]
    UnknownTest(String),
}

/// Everything persisted between sessions.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct AnalyticsSnapshot {
    pub tests: Vec<TestAnalysis>,
    pub profiles: BTreeMap<String, StudentProfile>,
    pub topic_trends: BTreeMap<String, TopicTrend>,
}

pub struct TestAnalytics {
    generator: Arc<dyn TextGenerator>,
    data: AnalyticsSnapshot,
}

impl TestAnalytics {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self {
            generator,
            data: AnalyticsSnapshot::default(),
        }
    }

    pub fn with_snapshot(mut self, data: AnalyticsSnapshot) -> Self {
        self.data = data;
        self
    }

    pub fn load(generator: Arc<dyn TextGenerator>, store: &SessionStore) -> Self {
        Self::new(generator).with_snapshot(store.load(ANALYTICS_KEY))
    }

    pub fn save(&self, store: &SessionStore) -> Result<(), HistoryError> {
        store.save(ANALYTICS_KEY, &self.data)
    }

    pub fn snapshot(&self) -> &AnalyticsSnapshot {
        &self.data
    }

    pub fn set_generator(&mut self, generator: Arc<dyn TextGenerator>) {
        self.generator = generator;
    }

    #[instrument(skip(self, test), fields(test_id = %test.id, questions = test.questions.len(), students = test.students.len()))]
    pub async fn analyze_test(&mut self, test: &TestData) -> Result<TestAnalysis, AnalyticsError> {
        if test.questions.is_empty() {
            return Err(AnalyticsError::EmptyTest(test.id.clone()));
        }

        let topics = curriculum::analyze_topics(&test.questions);
        let difficulty = curriculum::analyze_difficulty(&test.questions);

        let mut students = Vec::with_capacity(test.students.len());
        for student in &test.students {
            students.push(self.analyze_student(student, test).await);
        }

        let insights = curriculum::insights(&topics, &students);
        let recommendations = curriculum::curriculum_recommendations(&insights.difficult_topics);

        let analysis = TestAnalysis {
            test_id: test.id.clone(),
            test_name: test.name.clone(),
            subject: test.subject.clone(),
            date: test.date.clone(),
            total_questions: test.questions.len(),
            total_students: test.students.len(),
            topics,
            difficulty,
            student_performance: students,
            insights,
            recommendations,
        };

        self.data.tests.push(analysis.clone());
        self.update_profiles(&analysis);
        self.update_topic_trends(&analysis);

        info!(
            topics = analysis.topics.len(),
            overall = analysis.insights.overall_performance,
            "Test analysed"
        );
        Ok(analysis)
    }

    async fn analyze_student(&self, student: &StudentRecord, test: &TestData) -> StudentPerformance {
        let topics = performance::student_topics(student, &test.questions);
        let strengths = performance::strengths(&topics);
        let weaknesses = performance::weaknesses(&topics);
        let learning_style = performance::learning_style(self.generator.as_ref(), student).await;
        let recommendations =
            performance::recommendations(student.score, &weaknesses, learning_style);

        StudentPerformance {
            student_id: student.id.clone(),
            student_name: student.name.clone(),
            overall_score: student.score,
            total_questions: student.answers.len(),
            correct_answers: student.answers.iter().filter(|a| a.is_correct).count(),
            time_spent: student.time_spent,
            topics,
            strengths,
            weaknesses,
            learning_style,
            recommendations,
        }
    }

    fn update_profiles(&mut self, analysis: &TestAnalysis) {
        for latest in &analysis.student_performance {
            let history: Vec<StudentPerformance> = self
                .data
                .tests
                .iter()
                .flat_map(|t| t.student_performance.iter())
                .filter(|p| p.student_id == latest.student_id)
                .cloned()
                .collect();

            self.data
                .profiles
                .entry(latest.student_id.clone())
                .or_insert_with(|| StudentProfile::new(&latest.student_id, &latest.student_name))
                .record(&analysis.test_id, latest, &history);
        }
    }

    fn update_topic_trends(&mut self, analysis: &TestAnalysis) {
        for topic in &analysis.topics {
            self.data
                .topic_trends
                .entry(topic.name.clone())
                .or_insert_with(|| TopicTrend::new(&topic.name))
                .observe(topic);
        }
    }

    pub fn student_profile(&self, student_id: &str) -> Option<&StudentProfile> {
        self.data.profiles.get(student_id)
    }

    pub fn student_profiles(&self) -> impl Iterator<Item = &StudentProfile> {
        self.data.profiles.values()
    }

    pub fn topic_trends(&self) -> impl Iterator<Item = &TopicTrend> {
        self.data.topic_trends.values()
    }

    /// Report for the most recent analysis of `test_id`.
    pub fn generate_report(&self, test_id: &str) -> Result<Report, AnalyticsError> {
        let test = self
            .data
            .tests
            .iter()
            .rev()
            .find(|t| t.test_id == test_id)
            .ok_or_else(|| AnalyticsError::UnknownTest(test_id.to_string()))?;

        Ok(Report {
            test_info: TestInfo {
                name: test.test_name.clone(),
                subject: test.subject.clone(),
                date: test.date.clone(),
                total_questions: test.total_questions,
                total_students: test.total_students,
            },
            topic_analysis: test.topics.clone(),
            student_performance: test.student_performance.clone(),
            insights: test.insights.clone(),
            recommendations: test.recommendations.clone(),
        })
    }
}

#[cfg(test)]
mod tests;
