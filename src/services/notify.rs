//! Templated notifications. Sending is fire-and-forget: a failed send is
//! logged and reported as `false`, never raised.

use async_trait::async_trait;
use std::collections::BTreeMap;
use thiserror::Error;
use tracing::{info, warn};

#[derive(Error, Debug)]
#[error("Notification failed: {0}")]
pub struct NotifyError(pub String);

pub type Params = BTreeMap<&'static str, String>;

#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send(&self, template: &str, params: &Params) -> Result<(), NotifyError>;
}

#[derive(Debug, Clone, PartialEq)]
pub enum Notification {
    Welcome {
        to_email: String,
        to_name: String,
        educator_name: String,
    },
    TestAssigned {
        to_email: String,
        to_name: String,
        test_title: String,
        educator_name: String,
    },
    Result {
        to_email: String,
        to_name: String,
        test_title: String,
        score: usize,
        total_questions: usize,
    },
}

impl Notification {
    pub fn template(&self) -> &'static str {
        match self {
            Notification::Welcome { .. } => "template_welcome",
            Notification::TestAssigned { .. } => "template_test_notification",
            Notification::Result { .. } => "template_result_notification",
        }
    }

    pub fn params(&self) -> Params {
        let mut params = Params::new();
        match self {
            Notification::Welcome {
                to_email,
                to_name,
                educator_name,
            } => {
                params.insert("to_email", to_email.clone());
                params.insert("to_name", to_name.clone());
                params.insert("educator_name", educator_name.clone());
                params.insert(
                    "message",
                    format!(
                        "Welcome to Edu-Morph! Your educator {} has added you to their class. You can now access your dashboard and start learning.",
                        educator_name
                    ),
                );
            }
            Notification::TestAssigned {
                to_email,
                to_name,
                test_title,
                educator_name,
            } => {
                params.insert("to_email", to_email.clone());
                params.insert("to_name", to_name.clone());
                params.insert("test_title", test_title.clone());
                params.insert("educator_name", educator_name.clone());
                params.insert(
                    "message",
                    format!(
                        "A new test \"{}\" has been assigned by {}. Please log in to take the test.",
                        test_title, educator_name
                    ),
                );
            }
            Notification::Result {
                to_email,
                to_name,
                test_title,
                score,
                total_questions,
            } => {
                let percentage = if *total_questions == 0 {
                    0
                } else {
                    (*score as f64 * 100.0 / *total_questions as f64).round() as u32
                };
                let verdict = if percentage >= 70 {
                    "Great job!"
                } else {
                    "Keep studying!"
                };
                params.insert("to_email", to_email.clone());
                params.insert("to_name", to_name.clone());
                params.insert("test_title", test_title.clone());
                params.insert("score", score.to_string());
                params.insert("total_questions", total_questions.to_string());
                params.insert("percentage", percentage.to_string());
                params.insert(
                    "message",
                    format!(
                        "Your test results for \"{}\": {}/{} ({}%). {}",
                        test_title, score, total_questions, percentage, verdict
                    ),
                );
            }
        }
        params
    }
}

/// Writes notifications to the log instead of delivering them.
pub struct TracingNotifier;

#[async_trait]
impl Notifier for TracingNotifier {
    async fn send(&self, template: &str, params: &Params) -> Result<(), NotifyError> {
        let to = params.get("to_email").map(String::as_str).unwrap_or("unknown");
        let message = params.get("message").map(String::as_str).unwrap_or_default();
        info!(template, to, message, "Notification");
        Ok(())
    }
}

pub async fn notify(notifier: &dyn Notifier, notification: &Notification) -> bool {
    match notifier
        .send(notification.template(), &notification.params())
        .await
    {
        Ok(()) => true,
        Err(e) => {
            warn!(template = notification.template(), error = %e, "Notification not sent");
            false
        }
    }
}
