//! EDU-MORPH command-line entry point.

use anyhow::Result;
use clap::Parser;
use edumorph_lib::commands::Cli;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "edumorph=info,edumorph_lib=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    debug!(version = env!("CARGO_PKG_VERSION"), "Starting EDU-MORPH");

    let output = edumorph_lib::run(cli).await?;
    println!("{}", output);
    Ok(())
}
