//! Long-lived per-student profiles and per-topic trends across tests.

use super::curriculum::{by_asc, by_desc};
use super::types::{
    ConsolidatedTopic, ProgressEntry, StudentPerformance, StudentProfile, TopicAnalysis,
    TopicScore, TopicTrend,
};
use chrono::Utc;
use std::collections::BTreeMap;

const MAX_CONSOLIDATED: usize = 5;

fn consolidate<'a>(scores: impl Iterator<Item = &'a TopicScore>) -> Vec<ConsolidatedTopic> {
    let mut by_topic: BTreeMap<&str, (usize, f64)> = BTreeMap::new();
    for score in scores {
        let entry = by_topic.entry(score.topic.as_str()).or_insert((0, 0.0));
        entry.0 += 1;
        entry.1 += score.score;
    }

    by_topic
        .into_iter()
        .map(|(topic, (count, total_score))| ConsolidatedTopic {
            topic: topic.to_string(),
            count,
            total_score,
            average_score: total_score / count as f64,
        })
        .collect()
}

/// Strengths seen in any test, best average first, at most five.
pub fn consolidate_strengths(tests: &[StudentPerformance]) -> Vec<ConsolidatedTopic> {
    let mut strengths = consolidate(tests.iter().flat_map(|t| t.strengths.iter()));
    strengths.sort_by(|a, b| by_desc(a.average_score, b.average_score));
    strengths.truncate(MAX_CONSOLIDATED);
    strengths
}

/// Weaknesses seen in any test, worst average first, at most five.
pub fn consolidate_weaknesses(tests: &[StudentPerformance]) -> Vec<ConsolidatedTopic> {
    let mut weaknesses = consolidate(tests.iter().flat_map(|t| t.weaknesses.iter()));
    weaknesses.sort_by(|a, b| by_asc(a.average_score, b.average_score));
    weaknesses.truncate(MAX_CONSOLIDATED);
    weaknesses
}

impl StudentProfile {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            overall_performance: 0.0,
            strengths: Vec::new(),
            weaknesses: Vec::new(),
            learning_style: Default::default(),
            progress: Vec::new(),
        }
    }

    /// Folds one more test result into the profile. `history` holds every
    /// analysed result for this student, including `latest`.
    pub fn record(&mut self, test_id: &str, latest: &StudentPerformance, history: &[StudentPerformance]) {
        self.name = latest.student_name.clone();
        self.learning_style = latest.learning_style;
        self.progress.push(ProgressEntry {
            date: Utc::now(),
            test_id: test_id.to_string(),
            score: latest.overall_score,
            topics: latest.topics.clone(),
        });
        self.overall_performance =
            self.progress.iter().map(|p| p.score).sum::<f64>() / self.progress.len() as f64;
        self.strengths = consolidate_strengths(history);
        self.weaknesses = consolidate_weaknesses(history);
    }
}

impl TopicTrend {
    pub fn new(topic: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            tests: 0,
            average_score: 0.0,
            average_difficulty: 0.0,
        }
    }

    /// Running mean over every analysed test that covered the topic.
    pub fn observe(&mut self, analysis: &TopicAnalysis) {
        let n = self.tests as f64;
        self.average_score = (self.average_score * n + analysis.average_score) / (n + 1.0);
        self.average_difficulty =
            (self.average_difficulty * n + analysis.average_difficulty) / (n + 1.0);
        self.tests += 1;
    }
}
