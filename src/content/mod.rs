//! # Content generation
//!
//! Document and test material produced by the remote generator, parsed back
//! out of its template markers, with deterministic fallbacks when either step
//! comes up empty.
//!
//! ```text
//! text → prompts.rs → TextGenerator → parser.rs → items
//!                          └── error / nothing parsed → fallback.rs
//! ```

pub mod fallback;
pub mod parser;
pub mod prompts;
pub mod taxonomy;
pub mod types;

pub use types::{
    ContentItem, ContentType, DifficultyMix, DocumentQuestion, DocumentQuestionRequest,
    GenerationRequest, ItemKind, QuestionType, TestQuestion, TestRequest,
};

use crate::config::GenerationSettings;
use crate::llm::{GenerationOptions, TextGenerator};
use crate::postprocessing::strip_echo;
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, instrument, warn};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ContentError {
    #[error("Document text is empty")]
    EmptyDocument,

    #[error("Count must be between 1 and {max}, got {count}")]
    CountOutOfRange { count: usize, max: usize },

    #[error("Request timeout. Please try again with a shorter document.")]
    Timeout,
}

pub struct ContentGenerator {
    generator: Arc<dyn TextGenerator>,
    settings: GenerationSettings,
}

impl ContentGenerator {
    pub const MAX_TEST_QUESTIONS: usize = 50;

    pub fn new(generator: Arc<dyn TextGenerator>, settings: GenerationSettings) -> Self {
        Self {
            generator,
            settings,
        }
    }

    fn check_count(count: usize, max: usize) -> Result<(), ContentError> {
        if count == 0 || count > max {
            return Err(ContentError::CountOutOfRange { count, max });
        }
        Ok(())
    }

    /// Lesson notes, quiz items, flashcards or a summary built from `text`.
    ///
    /// A timeout is reported to the caller; any other remote failure, or a
    /// reply that parses to nothing, yields key-point fallback items.
    #[instrument(skip(self, text, request), fields(content_type = %request.content_type, count = request.count))]
    pub async fn generate_from_document(
        &self,
        text: &str,
        request: &GenerationRequest,
    ) -> Result<Vec<ContentItem>, ContentError> {
        if text.trim().is_empty() {
            return Err(ContentError::EmptyDocument);
        }
        Self::check_count(request.count, self.settings.max_content_items)?;

        let prompt = prompts::document_prompt(text, request, self.settings.prompt_text_limit);
        let raw = match self
            .generator
            .generate(&prompt, &GenerationOptions::text(2000, 0.7))
            .await
        {
            Ok(raw) => strip_echo(&raw, &prompt),
            Err(e) if e.is_timeout() => {
                warn!(error = %e, "Document generation timed out");
                return Err(ContentError::Timeout);
            }
            Err(e) => {
                warn!(error = %e, "Document generation failed, using key points");
                return Ok(fallback::document_content(
                    text,
                    request.content_type,
                    request.count,
                ));
            }
        };

        let mut items = parser::parse_document_content(&raw, request.content_type);
        if items.is_empty() {
            warn!("Generated text matched no template markers, using key points");
            return Ok(fallback::document_content(
                text,
                request.content_type,
                request.count,
            ));
        }

        items.truncate(request.count);
        info!(items = items.len(), "Parsed generated content");
        Ok(items)
    }

    /// Multiple-choice test questions, always exactly `request.count` of them.
    #[instrument(skip(self, request), fields(subject = %request.subject, count = request.count))]
    pub async fn generate_test_questions(
        &self,
        request: &TestRequest,
    ) -> Result<Vec<TestQuestion>, ContentError> {
        Self::check_count(request.count, Self::MAX_TEST_QUESTIONS)?;

        let prompt = prompts::test_prompt(request);
        let raw = match self
            .generator
            .generate(&prompt, &GenerationOptions::text(2000, 0.8))
            .await
        {
            Ok(raw) => strip_echo(&raw, &prompt),
            Err(e) => {
                warn!(error = %e, "Test generation failed, using question bank");
                return Ok(fallback::test_questions(&request.subject, request.count));
            }
        };

        let mut questions = parser::parse_test_questions(&raw, request.count, &request.topics);
        let parsed = questions.len();
        while questions.len() < request.count {
            let id = questions.len() + 1;
            questions.push(fallback::placeholder_question(id, &request.topics));
        }

        if parsed < request.count {
            warn!(parsed, requested = request.count, "Padded test with placeholder questions");
        }
        Ok(questions)
    }

    #[instrument(skip(self, text, request), fields(count = request.count))]
    pub async fn generate_questions_from_document(
        &self,
        text: &str,
        request: &DocumentQuestionRequest,
    ) -> Result<Vec<DocumentQuestion>, ContentError> {
        if text.trim().is_empty() {
            return Err(ContentError::EmptyDocument);
        }
        Self::check_count(request.count, self.settings.max_content_items)?;

        let prompt =
            prompts::document_question_prompt(text, request, self.settings.prompt_text_limit);
        let questions = match self
            .generator
            .generate(&prompt, &GenerationOptions::text(3000, 0.7))
            .await
        {
            Ok(raw) => parser::parse_document_questions(&strip_echo(&raw, &prompt)),
            Err(e) => {
                warn!(error = %e, "Document question generation failed");
                Vec::new()
            }
        };

        if questions.is_empty() {
            return Ok(fallback::document_questions(text, request.count));
        }
        Ok(questions.into_iter().take(request.count).collect())
    }

    /// Free-form study material such as "summary", "overview" or "study guide".
    #[instrument(skip(self))]
    pub async fn generate_study_material(&self, topic: &str, kind: &str) -> String {
        let prompt = prompts::study_material_prompt(topic, kind);
        match self
            .generator
            .generate(&prompt, &GenerationOptions::text(500, 0.6))
            .await
        {
            Ok(raw) => {
                let text = strip_echo(&raw, &prompt);
                if !text.is_empty() {
                    return text;
                }
                warn!("Study material reply was empty");
            }
            Err(e) => warn!(error = %e, "Study material generation failed"),
        }

        if kind.eq_ignore_ascii_case("overview") {
            fallback::study_overview(topic)
        } else {
            fallback::study_material(topic)
        }
    }
}

#[cfg(test)]
mod tests;
