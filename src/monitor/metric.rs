use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    DocumentProcessing,
    AiGeneration,
    FileUploads,
    UserInteractions,
}

impl Operation {
    pub const ALL: [Operation; 4] = [
        Operation::DocumentProcessing,
        Operation::AiGeneration,
        Operation::FileUploads,
        Operation::UserInteractions,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::DocumentProcessing => "document_processing",
            Operation::AiGeneration => "ai_generation",
            Operation::FileUploads => "file_uploads",
            Operation::UserInteractions => "user_interactions",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One timed operation.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Metric {
    pub operation: Operation,
    pub duration_ms: f64,
    pub timestamp: DateTime<Utc>,
    pub success: bool,
    pub error: Option<String>,
    /// Free-form context such as file size or content type.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub labels: BTreeMap<String, String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq)]
pub struct Stats {
    pub count: usize,
    pub average: f64,
    pub min: f64,
    pub max: f64,
    /// Upper median for even counts.
    pub median: f64,
}

impl Stats {
    pub fn from_durations(mut durations: Vec<f64>) -> Self {
        if durations.is_empty() {
            return Self::default();
        }
        durations.sort_by(f64::total_cmp);

        let count = durations.len();
        Self {
            count,
            average: durations.iter().sum::<f64>() / count as f64,
            min: durations[0],
            max: durations[count - 1],
            median: durations[count / 2],
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationKind {
    Performance,
    Reliability,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Warning,
    Error,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Recommendation {
    pub kind: RecommendationKind,
    pub message: String,
    pub severity: Severity,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Overview {
    pub total_operations: usize,
    /// Mean of the per-operation averages that have samples.
    pub average_response_time: f64,
    pub success_rate: f64,
    pub uptime_ms: i64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Dashboard {
    pub overview: Overview,
    pub by_operation: BTreeMap<Operation, Stats>,
    pub recommendations: Vec<Recommendation>,
    pub recent_activity: Vec<Metric>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MetricsExport {
    pub session_start: DateTime<Utc>,
    pub session_duration_ms: i64,
    pub metrics: BTreeMap<Operation, Vec<Metric>>,
    pub stats: BTreeMap<Operation, Stats>,
    pub recommendations: Vec<Recommendation>,
}
