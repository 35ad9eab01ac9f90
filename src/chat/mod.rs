//! Response-strategy dispatcher.
//!
//! ```text
//! input → classify → strategy responder → enhance → record turn
//! ```

pub mod strategies;

use crate::config::SessionSettings;
use crate::history::{ContextUpdate, ConversationLog, UserContext};
use crate::llm::TextGenerator;
use crate::postprocessing::{apology, PostProcessor};
use crate::preprocessing::{Analysis, Cleaner, Level, Strategy, Subject};
use serde::Serialize;
use std::sync::Arc;
use tracing::{info, instrument, warn};

#[derive(Serialize, Debug, Clone)]
pub struct ChatReply {
    pub text: String,
    pub strategy: Strategy,
    pub subject: Subject,
    pub level: Level,
}

pub struct Chatbot {
    generator: Arc<dyn TextGenerator>,
    post: PostProcessor,
    log: ConversationLog,
    context: UserContext,
    recent_capacity: usize,
}

impl Chatbot {
    pub fn new(generator: Arc<dyn TextGenerator>, settings: &SessionSettings) -> Self {
        Self {
            generator,
            post: PostProcessor::new(),
            log: ConversationLog::new(settings.history_capacity),
            context: UserContext::default(),
            recent_capacity: settings.recent_topics_capacity,
        }
    }

    pub fn with_history(mut self, log: ConversationLog) -> Self {
        self.log = log;
        self
    }

    /// Swaps the remote backend, e.g. after a provider change.
    pub fn set_generator(&mut self, generator: Arc<dyn TextGenerator>) {
        self.generator = generator;
    }

    #[instrument(skip(self, input), fields(input_len = input.len()))]
    pub async fn chat(&mut self, input: &str) -> ChatReply {
        let cleaned = match Cleaner::clean(input) {
            Ok(cleaned) => cleaned,
            Err(e) => {
                warn!(error = %e, "Rejected chat input");
                return ChatReply {
                    text: apology().to_string(),
                    strategy: Strategy::General,
                    subject: Subject::General,
                    level: Level::default(),
                };
            }
        };

        let analysis = Analysis::of(&cleaned);
        self.context
            .observe(analysis.subject, analysis.level, self.recent_capacity);
        info!(
            strategy = %analysis.strategy,
            subject = %analysis.subject,
            level = %analysis.level,
            "Classified chat input"
        );

        let raw = self.respond(&cleaned, &analysis).await;
        let text = self
            .post
            .enhance_with(&raw, analysis.subject, analysis.level);
        self.log.record(&cleaned, &text);

        ChatReply {
            text,
            strategy: analysis.strategy,
            subject: analysis.subject,
            level: analysis.level,
        }
    }

    async fn respond(&self, input: &str, analysis: &Analysis) -> String {
        let generator = self.generator.as_ref();
        match analysis.strategy {
            Strategy::KnowledgeBase => {
                strategies::knowledge_base(generator, input, analysis.subject).await
            }
            Strategy::LearningPath => {
                strategies::learning_path(input, analysis.subject, analysis.level)
            }
            Strategy::ProblemSolving => strategies::problem_solving(generator, input).await,
            Strategy::Conversational => {
                strategies::conversational(generator, &self.log, input).await
            }
            Strategy::Creative => strategies::creative(generator, input).await,
            Strategy::General => strategies::general(generator, input, analysis.subject).await,
        }
    }

    pub fn history(&self) -> &ConversationLog {
        &self.log
    }

    pub fn clear_history(&mut self) {
        self.log.clear();
    }

    pub fn user_context(&self) -> &UserContext {
        &self.context
    }

    pub fn update_user_context(&mut self, update: ContextUpdate) {
        self.context.merge(update);
    }
}
