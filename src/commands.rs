//! Command-line surface. Each handler runs against the application context
//! and returns the text to print.

use crate::analytics::TestData;
use crate::config::ProviderKind;
use crate::content::{
    ContentType, DocumentQuestionRequest, GenerationRequest, TestRequest,
};
use crate::context::AppContext;
use crate::document::{generate_summary, ProcessedDocument, DEFAULT_SUMMARY_LENGTH};
use crate::monitor::Operation;
use crate::preprocessing::Analysis;
use crate::services::{notify, Collection, ContentStore, Notification};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use serde_json::json;
use std::collections::BTreeMap;
use std::fmt::Write;
use std::path::{Path, PathBuf};
use tracing::info;

/// Owner of records created from the command line.
const LOCAL_USER: &str = "local";

/// EDU-MORPH learning assistant
#[derive(Parser, Debug)]
#[command(name = "edumorph")]
#[command(about = "Adaptive learning assistant: chat, quizzes and document-to-content generation")]
#[command(version)]
pub struct Cli {
    /// TOML configuration file
    #[arg(long, global = true, default_value = "edumorph.toml")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Ask the assistant anything
    Chat {
        #[arg(required = true)]
        text: Vec<String>,
    },
    /// Show the strategy, subject and level inferred for an input
    Classify {
        #[arg(required = true)]
        text: Vec<String>,
    },
    /// Turn a document into lesson notes, quiz items, flashcards or a summary
    Generate {
        file: PathBuf,
        #[arg(long = "type", default_value = "lesson-notes")]
        content_type: ContentType,
        #[arg(long, default_value = "intermediate")]
        difficulty: String,
        #[arg(long, default_value_t = 5)]
        count: usize,
        #[arg(long, default_value = "General")]
        subject: String,
    },
    /// Draft test questions from a document
    Questions {
        file: PathBuf,
        #[arg(long, default_value = "intermediate")]
        difficulty: String,
        #[arg(long, default_value_t = 5)]
        count: usize,
    },
    /// Generate a multiple-choice test
    Quiz {
        #[arg(long, default_value = "General")]
        subject: String,
        #[arg(long, value_delimiter = ',')]
        topics: Vec<String>,
        #[arg(long, default_value_t = 10)]
        count: usize,
        #[arg(long, default_value = "High School")]
        grade: String,
    },
    /// Write study material on a topic
    Material {
        topic: String,
        #[arg(long, default_value = "study guide")]
        kind: String,
    },
    /// Analyse graded test results from a JSON file
    Analyze { file: PathBuf },
    /// List generated content and tests saved by earlier runs
    Saved {
        #[arg(long, default_value = "generated-content")]
        collection: Collection,
        /// Content type for generated content, subject for test questions
        #[arg(long)]
        kind: Option<String>,
    },
    /// Show or clear the conversation history
    History {
        #[arg(long)]
        clear: bool,
    },
    /// List providers, optionally switching the active one
    Providers {
        #[arg(long)]
        set: Option<String>,
    },
}

fn pretty<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("Failed to render output")
}

pub async fn dispatch(ctx: &mut AppContext, command: Command) -> Result<String> {
    match command {
        Command::Chat { text } => chat(ctx, &text.join(" ")).await,
        Command::Classify { text } => classify(&text.join(" ")),
        Command::Generate {
            file,
            content_type,
            difficulty,
            count,
            subject,
        } => {
            let request = GenerationRequest {
                content_type,
                difficulty,
                count,
                subject,
            };
            generate(ctx, file, request).await
        }
        Command::Questions {
            file,
            difficulty,
            count,
        } => {
            let request = DocumentQuestionRequest {
                difficulty,
                count,
                ..DocumentQuestionRequest::default()
            };
            questions(ctx, file, request).await
        }
        Command::Quiz {
            subject,
            topics,
            count,
            grade,
        } => {
            let request = TestRequest {
                subject,
                topics,
                count,
                grade_level: grade,
                ..TestRequest::default()
            };
            quiz(ctx, request).await
        }
        Command::Material { topic, kind } => {
            Ok(ctx.content.generate_study_material(&topic, &kind).await)
        }
        Command::Analyze { file } => analyze(ctx, file).await,
        Command::Saved { collection, kind } => saved(ctx, collection, kind.as_deref()).await,
        Command::History { clear } => Ok(history(ctx, clear)),
        Command::Providers { set } => providers(ctx, set.as_deref()),
    }
}

async fn chat(ctx: &mut AppContext, text: &str) -> Result<String> {
    let timer = ctx.monitor.start_timer(Operation::UserInteractions);
    let reply = ctx.chatbot.chat(text).await;
    if let Some(timer) = timer {
        let labels = BTreeMap::from([("strategy".to_string(), reply.strategy.to_string())]);
        ctx.monitor.end_timer(timer, Ok(()), labels);
    }
    Ok(reply.text)
}

fn classify(text: &str) -> Result<String> {
    let analysis = Analysis::of(text);
    pretty(&json!({
        "strategy": analysis.strategy,
        "subject": analysis.subject,
        "level": analysis.level,
    }))
}

async fn load_document(ctx: &AppContext, file: &Path) -> Result<ProcessedDocument> {
    let labels = BTreeMap::from([("file".to_string(), file.display().to_string())]);
    let text = ctx
        .monitor
        .track(Operation::DocumentProcessing, labels, ctx.documents.load(file))
        .await
        .with_context(|| format!("Could not use {}", file.display()))?;
    Ok(ctx.documents.process(&text))
}

async fn generate(ctx: &mut AppContext, file: PathBuf, request: GenerationRequest) -> Result<String> {
    let document = load_document(ctx, &file).await?;

    let labels = BTreeMap::from([
        ("content_type".to_string(), request.content_type.to_string()),
        ("count".to_string(), request.count.to_string()),
    ]);
    let items = ctx
        .monitor
        .track(
            Operation::AiGeneration,
            labels,
            ctx.content.generate_from_document(&document.text, &request),
        )
        .await?;

    ctx.store
        .create(
            Collection::GeneratedContent,
            LOCAL_USER,
            Some(request.content_type.as_str()),
            serde_json::to_value(&items)?,
        )
        .await?;
    info!(items = items.len(), "Generated content stored");

    pretty(&json!({
        "summary": generate_summary(&document.text, DEFAULT_SUMMARY_LENGTH),
        "key_points": document.key_points,
        "word_count": document.word_count,
        "items": items,
    }))
}

async fn questions(
    ctx: &mut AppContext,
    file: PathBuf,
    request: DocumentQuestionRequest,
) -> Result<String> {
    let document = load_document(ctx, &file).await?;
    let questions = ctx
        .monitor
        .track(
            Operation::AiGeneration,
            BTreeMap::new(),
            ctx.content.generate_questions_from_document(&document.text, &request),
        )
        .await?;
    pretty(&questions)
}

async fn quiz(ctx: &mut AppContext, request: TestRequest) -> Result<String> {
    let questions = ctx.content.generate_test_questions(&request).await?;
    ctx.store
        .create(
            Collection::TestQuestions,
            LOCAL_USER,
            Some(request.subject.as_str()),
            serde_json::to_value(&questions)?,
        )
        .await?;
    pretty(&questions)
}

async fn analyze(ctx: &mut AppContext, file: PathBuf) -> Result<String> {
    let raw = tokio::fs::read_to_string(&file)
        .await
        .with_context(|| format!("Could not read {}", file.display()))?;
    let test: TestData = serde_json::from_str(&raw)
        .with_context(|| format!("{} is not a valid test export", file.display()))?;

    let analysis = ctx.analytics.analyze_test(&test).await?;
    for (student, performance) in test.students.iter().zip(&analysis.student_performance) {
        let Some(email) = &student.email else { continue };
        let result = Notification::Result {
            to_email: email.clone(),
            to_name: student.name.clone(),
            test_title: test.name.clone(),
            score: performance.correct_answers,
            total_questions: performance.total_questions,
        };
        notify(ctx.notifier.as_ref(), &result).await;
    }

    pretty(&ctx.analytics.generate_report(&test.id)?)
}

async fn saved(ctx: &AppContext, collection: Collection, kind: Option<&str>) -> Result<String> {
    let records = ctx.store.list(collection, LOCAL_USER, kind).await?;
    if records.is_empty() {
        return Ok(format!("Nothing saved in {} yet.", collection));
    }
    pretty(&records)
}

fn history(ctx: &mut AppContext, clear: bool) -> String {
    if clear {
        ctx.chatbot.clear_history();
        return "Conversation history cleared.".to_string();
    }

    let log = ctx.chatbot.history();
    if log.is_empty() {
        return "No conversation history yet.".to_string();
    }

    let mut out = String::new();
    for turn in log.iter() {
        let _ = writeln!(
            out,
            "[{}] You: {}\nEDU-MORPH: {}\n",
            turn.timestamp.format("%Y-%m-%d %H:%M"),
            turn.user_text,
            turn.assistant_text
        );
    }
    out.trim_end().to_string()
}

fn providers(ctx: &mut AppContext, set: Option<&str>) -> Result<String> {
    if let Some(name) = set {
        ctx.set_provider(name)?;
    }

    let active = ctx.provider();
    Ok(ProviderKind::ALL
        .iter()
        .map(|kind| {
            let marker = if *kind == active { "*" } else { " " };
            format!("{} {}", marker, kind)
        })
        .collect::<Vec<_>>()
        .join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::llm::testing::ScriptedGenerator;
    use std::sync::Arc;
    use tempfile::TempDir;

    fn context(dir: &TempDir) -> AppContext {
        let mut config = Config::default();
        config.session.state_dir = dir.path().to_path_buf();
        AppContext::with_generator(config, Arc::new(ScriptedGenerator::new()))
    }

    #[test]
    fn cli_parses_generation_flags() {
        let cli = Cli::parse_from([
            "edumorph", "generate", "notes.txt", "--type", "flashcards", "--count", "3",
        ]);
        match cli.command {
            Command::Generate {
                content_type, count, ..
            } => {
                assert_eq!(content_type, ContentType::Flashcards);
                assert_eq!(count, 3);
            }
            other => panic!("unexpected command {:?}", other),
        }
        assert!(Cli::try_parse_from(["edumorph", "generate", "a.txt", "--type", "poster"]).is_err());
    }

    #[test]
    fn quiz_topics_split_on_commas() {
        let cli = Cli::parse_from(["edumorph", "quiz", "--topics", "Algebra,Geometry"]);
        match cli.command {
            Command::Quiz { topics, count, .. } => {
                assert_eq!(topics, vec!["Algebra", "Geometry"]);
                assert_eq!(count, 10);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[tokio::test]
    async fn quiz_falls_back_and_is_stored() {
        let dir = TempDir::new().unwrap();
        let mut ctx = context(&dir);
        let command = Command::Quiz {
            subject: "science".to_string(),
            topics: vec![],
            count: 3,
            grade: "High School".to_string(),
        };

        let out = dispatch(&mut ctx, command).await.unwrap();
        let questions: Vec<serde_json::Value> = serde_json::from_str(&out).unwrap();
        assert_eq!(questions.len(), 3);

        let stored = ctx
            .store
            .list(Collection::TestQuestions, LOCAL_USER, Some("science"))
            .await
            .unwrap();
        assert_eq!(stored.len(), 1);
    }

    #[tokio::test]
    async fn saved_quiz_is_listed_by_a_later_run() {
        let dir = TempDir::new().unwrap();
        let mut first = context(&dir);
        let quiz = Command::Quiz {
            subject: "science".to_string(),
            topics: vec![],
            count: 2,
            grade: "High School".to_string(),
        };
        dispatch(&mut first, quiz).await.unwrap();
        drop(first);

        let mut second = context(&dir);
        let listing = Command::Saved {
            collection: Collection::TestQuestions,
            kind: Some("science".to_string()),
        };
        let out = dispatch(&mut second, listing).await.unwrap();
        let records: Vec<serde_json::Value> = serde_json::from_str(&out).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["data"].as_array().unwrap().len(), 2);

        let empty = Command::Saved {
            collection: Collection::GeneratedContent,
            kind: None,
        };
        assert_eq!(
            dispatch(&mut second, empty).await.unwrap(),
            "Nothing saved in generatedContent yet."
        );
    }

    #[test]
    fn saved_parses_collection_names() {
        let cli = Cli::parse_from(["edumorph", "saved", "--collection", "test-questions"]);
        assert!(matches!(
            cli.command,
            Command::Saved {
                collection: Collection::TestQuestions,
                kind: None
            }
        ));
    }

    #[tokio::test]
    async fn generate_uses_key_points_when_remote_fails() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("cells.txt");
        std::fs::write(
            &file,
            "Cells are the basic unit of life. Mitochondria produce energy for the cell. \
             The nucleus stores genetic information.",
        )
        .unwrap();
        let mut ctx = context(&dir);
        let command = Command::Generate {
            file,
            content_type: ContentType::Summary,
            difficulty: "intermediate".to_string(),
            count: 2,
            subject: "Biology".to_string(),
        };

        let out = dispatch(&mut ctx, command).await.unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["items"].as_array().unwrap().len(), 2);
        assert!(value["summary"].as_str().unwrap().starts_with("Cells are"));
        assert_eq!(ctx.monitor.stats(Operation::DocumentProcessing).count, 1);
        assert_eq!(ctx.monitor.stats(Operation::AiGeneration).count, 1);
    }

    #[tokio::test]
    async fn missing_document_is_an_error() {
        let dir = TempDir::new().unwrap();
        let mut ctx = context(&dir);
        let command = Command::Questions {
            file: dir.path().join("absent.txt"),
            difficulty: "intermediate".to_string(),
            count: 2,
        };

        assert!(dispatch(&mut ctx, command).await.is_err());
        assert!(ctx.monitor.success_rate() < 100.0);
    }

    #[tokio::test]
    async fn analyze_reads_export_and_reports() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("results.json");
        std::fs::write(
            &file,
            r#"{
                "id": "t1",
                "name": "Unit 3",
                "subject": "mathematics",
                "questions": [
                    {"id": "q1", "text": "Solve the equation x + 2 = 5", "correctAnswers": 1, "totalAttempts": 2, "averageTime": 30}
                ],
                "students": [
                    {"id": "s1", "name": "Ana", "email": "ana@example.com", "score": 100,
                     "answers": [{"questionId": "q1", "isCorrect": true}]},
                    {"id": "s2", "name": "Ben", "score": 0,
                     "answers": [{"questionId": "q1", "isCorrect": false}]}
                ]
            }"#,
        )
        .unwrap();
        let mut ctx = context(&dir);

        let out = dispatch(&mut ctx, Command::Analyze { file }).await.unwrap();
        let report: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(report["test_info"]["name"], "Unit 3");
        assert_eq!(report["test_info"]["total_students"], 2);
        assert!(ctx.analytics.student_profile("s1").is_some());
    }

    #[tokio::test]
    async fn history_lists_then_clears() {
        let dir = TempDir::new().unwrap();
        let mut ctx = context(&dir);
        assert_eq!(
            dispatch(&mut ctx, Command::History { clear: false }).await.unwrap(),
            "No conversation history yet."
        );

        dispatch(
            &mut ctx,
            Command::Chat {
                text: vec!["Hello".to_string(), "there".to_string()],
            },
        )
        .await
        .unwrap();
        let listed = dispatch(&mut ctx, Command::History { clear: false }).await.unwrap();
        assert!(listed.contains("You: Hello there"));
        assert_eq!(ctx.monitor.stats(Operation::UserInteractions).count, 1);

        dispatch(&mut ctx, Command::History { clear: true }).await.unwrap();
        assert!(ctx.chatbot.history().is_empty());
    }

    #[tokio::test]
    async fn providers_marks_the_active_one() {
        let dir = TempDir::new().unwrap();
        let mut ctx = context(&dir);
        let out = dispatch(&mut ctx, Command::Providers { set: Some("openai".to_string()) })
            .await
            .unwrap();
        assert!(out.lines().any(|l| l.starts_with('*') && l.contains("openai")));
        assert!(dispatch(&mut ctx, Command::Providers { set: Some("fax".to_string()) })
            .await
            .is_err());
    }
}
