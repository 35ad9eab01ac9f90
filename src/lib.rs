//! EDU-MORPH: an adaptive learning assistant. Conversational tutoring,
//! document-to-content generation, test generation and results analytics,
//! all backed by a hosted text-generation endpoint with local fallbacks.

pub mod analytics;
pub mod chat;
pub mod commands;
pub mod config;
pub mod content;
pub mod context;
pub mod document;
pub mod history;
pub mod knowledge;
pub mod llm;
pub mod monitor;
pub mod postprocessing;
pub mod preprocessing;
pub mod services;

use crate::commands::Cli;
use crate::context::AppContext;
use tracing::debug;

/// Runs one CLI invocation and returns what should be printed.
pub async fn run(cli: Cli) -> anyhow::Result<String> {
    let mut ctx = AppContext::load(Some(cli.config.as_path()))?;
    let output = commands::dispatch(&mut ctx, cli.command).await?;
    ctx.persist()?;

    let dashboard = ctx.monitor.dashboard();
    debug!(
        total = dashboard.overview.total_operations,
        success_rate = dashboard.overview.success_rate,
        "Session metrics"
    );
    Ok(output)
}
