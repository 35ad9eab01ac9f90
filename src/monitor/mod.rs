//! Operation timing with a bounded sample window per operation.
//!
//! The handle is cheap to clone; every clone shares the same samples.

pub mod metric;

pub use metric::{
    Dashboard, Metric, MetricsExport, Operation, Overview, Recommendation, RecommendationKind,
    Severity, Stats,
};

use chrono::{DateTime, Utc};
use std::collections::{BTreeMap, VecDeque};
use std::fmt::Display;
use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};
use tracing::debug;

const SLOW_DOCUMENT_AVG_MS: f64 = 5_000.0;
const SLOW_DOCUMENT_MAX_MS: f64 = 30_000.0;
const SLOW_GENERATION_AVG_MS: f64 = 10_000.0;
const MIN_GENERATION_SUCCESS: f64 = 0.8;
const RECENT_ACTIVITY: usize = 10;

/// A started measurement. Dropping it records nothing.
#[derive(Debug)]
pub struct Timer {
    operation: Operation,
    started: Instant,
}

#[derive(Clone)]
pub struct Monitor {
    inner: Arc<Mutex<MonitorInner>>,
}

struct MonitorInner {
    metrics: BTreeMap<Operation, VecDeque<Metric>>,
    capacity: usize,
    enabled: bool,
    session_start: DateTime<Utc>,
}

impl Default for Monitor {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CAPACITY)
    }
}

impl Monitor {
    pub const DEFAULT_CAPACITY: usize = 100;

    pub fn new(capacity: usize) -> Self {
        Self {
            inner: Arc::new(Mutex::new(MonitorInner {
                metrics: Operation::ALL
                    .iter()
                    .map(|op| (*op, VecDeque::new()))
                    .collect(),
                capacity: capacity.max(1),
                enabled: true,
                session_start: Utc::now(),
            })),
        }
    }

    fn lock(&self) -> MutexGuard<'_, MonitorInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn set_enabled(&self, enabled: bool) {
        self.lock().enabled = enabled;
    }

    pub fn is_enabled(&self) -> bool {
        self.lock().enabled
    }

    /// `None` while monitoring is disabled.
    pub fn start_timer(&self, operation: Operation) -> Option<Timer> {
        self.is_enabled().then(|| Timer {
            operation,
            started: Instant::now(),
        })
    }

    pub fn end_timer(
        &self,
        timer: Timer,
        outcome: Result<(), String>,
        labels: BTreeMap<String, String>,
    ) -> Option<Metric> {
        self.record(timer.operation, timer.started.elapsed(), outcome, labels)
    }

    /// Stores one sample, evicting the oldest beyond capacity.
    pub fn record(
        &self,
        operation: Operation,
        duration: Duration,
        outcome: Result<(), String>,
        labels: BTreeMap<String, String>,
    ) -> Option<Metric> {
        let mut inner = self.lock();
        if !inner.enabled {
            return None;
        }

        let metric = Metric {
            operation,
            duration_ms: duration.as_micros() as f64 / 1000.0,
            timestamp: Utc::now(),
            success: outcome.is_ok(),
            error: outcome.err(),
            labels,
        };
        debug!(%operation, duration_ms = metric.duration_ms, success = metric.success, "Operation timed");

        let capacity = inner.capacity;
        let samples = inner.metrics.entry(operation).or_default();
        samples.push_back(metric.clone());
        while samples.len() > capacity {
            samples.pop_front();
        }
        Some(metric)
    }

    /// Times `work` and records whether it succeeded. The result is passed
    /// through untouched.
    pub async fn track<T, E, F>(
        &self,
        operation: Operation,
        labels: BTreeMap<String, String>,
        work: F,
    ) -> Result<T, E>
    where
        E: Display,
        F: Future<Output = Result<T, E>>,
    {
        let timer = self.start_timer(operation);
        let result = work.await;
        if let Some(timer) = timer {
            let outcome = result.as_ref().map(|_| ()).map_err(|e| e.to_string());
            self.end_timer(timer, outcome, labels);
        }
        result
    }

    pub fn metrics(&self, operation: Operation) -> Vec<Metric> {
        self.lock()
            .metrics
            .get(&operation)
            .map(|samples| samples.iter().cloned().collect())
            .unwrap_or_default()
    }

    pub fn stats(&self, operation: Operation) -> Stats {
        let inner = self.lock();
        Self::stats_of(inner.metrics.get(&operation))
    }

    fn stats_of(samples: Option<&VecDeque<Metric>>) -> Stats {
        Stats::from_durations(
            samples
                .map(|s| s.iter().map(|m| m.duration_ms).collect())
                .unwrap_or_default(),
        )
    }

    pub fn all_stats(&self) -> BTreeMap<Operation, Stats> {
        let inner = self.lock();
        Operation::ALL
            .iter()
            .map(|op| (*op, Self::stats_of(inner.metrics.get(op))))
            .collect()
    }

    pub fn recommendations(&self) -> Vec<Recommendation> {
        let mut recommendations = Vec::new();

        let docs = self.stats(Operation::DocumentProcessing);
        if docs.count > 0 {
            if docs.average > SLOW_DOCUMENT_AVG_MS {
                recommendations.push(Recommendation {
                    kind: RecommendationKind::Performance,
                    message: "Document processing is slow. Consider using smaller files or optimizing extraction.".to_string(),
                    severity: Severity::Warning,
                });
            }
            if docs.max > SLOW_DOCUMENT_MAX_MS {
                recommendations.push(Recommendation {
                    kind: RecommendationKind::Performance,
                    message: "Some documents take very long to process. Consider adding file size limits.".to_string(),
                    severity: Severity::Error,
                });
            }
        }

        let generation = self.metrics(Operation::AiGeneration);
        if !generation.is_empty() {
            let stats = Stats::from_durations(generation.iter().map(|m| m.duration_ms).collect());
            if stats.average > SLOW_GENERATION_AVG_MS {
                recommendations.push(Recommendation {
                    kind: RecommendationKind::Performance,
                    message: "AI generation is slow. Consider reducing content count or using faster models.".to_string(),
                    severity: Severity::Warning,
                });
            }

            let succeeded = generation.iter().filter(|m| m.success).count();
            if (succeeded as f64) / (generation.len() as f64) < MIN_GENERATION_SUCCESS {
                recommendations.push(Recommendation {
                    kind: RecommendationKind::Reliability,
                    message: "AI generation has low success rate. Check API configuration and network.".to_string(),
                    severity: Severity::Error,
                });
            }
        }

        recommendations
    }

    /// Percentage of successful samples across every operation, 100 when empty.
    pub fn success_rate(&self) -> f64 {
        let inner = self.lock();
        let (total, succeeded) = inner
            .metrics
            .values()
            .flatten()
            .fold((0usize, 0usize), |(total, ok), m| (total + 1, ok + m.success as usize));
        if total == 0 {
            100.0
        } else {
            succeeded as f64 * 100.0 / total as f64
        }
    }

    /// Newest samples first across all operations.
    pub fn recent_activity(&self) -> Vec<Metric> {
        let mut all: Vec<Metric> = self.lock().metrics.values().flatten().cloned().collect();
        all.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        all.truncate(RECENT_ACTIVITY);
        all
    }

    pub fn dashboard(&self) -> Dashboard {
        let session_start = self.lock().session_start;
        let stats = self.all_stats();
        let sampled: Vec<f64> = stats
            .values()
            .filter(|s| s.count > 0)
            .map(|s| s.average)
            .collect();
        let average_response_time = if sampled.is_empty() {
            0.0
        } else {
            sampled.iter().sum::<f64>() / sampled.len() as f64
        };

        Dashboard {
            overview: Overview {
                total_operations: stats.values().map(|s| s.count).sum(),
                average_response_time,
                success_rate: self.success_rate(),
                uptime_ms: (Utc::now() - session_start).num_milliseconds(),
            },
            by_operation: stats,
            recommendations: self.recommendations(),
            recent_activity: self.recent_activity(),
        }
    }

    pub fn export(&self) -> MetricsExport {
        let (session_start, metrics) = {
            let inner = self.lock();
            let metrics = inner
                .metrics
                .iter()
                .map(|(op, samples)| (*op, samples.iter().cloned().collect()))
                .collect();
            (inner.session_start, metrics)
        };

        MetricsExport {
            session_start,
            session_duration_ms: (Utc::now() - session_start).num_milliseconds(),
            metrics,
            stats: self.all_stats(),
            recommendations: self.recommendations(),
        }
    }

    /// Drops every sample and restarts the session clock.
    pub fn clear(&self) {
        let mut inner = self.lock();
        for samples in inner.metrics.values_mut() {
            samples.clear();
        }
        inner.session_start = Utc::now();
    }
}
