//! Skrift CLI entry point.

use anyhow::Result;
use clap::Parser;
use skrift::cli::Cli;
use skrift::config::Settings;
use skrift::error::{ErrorResult, SkriftError};
use skrift::pipeline::Pipeline;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    // Logs go to stderr; stdout carries exactly one JSON object.
    tracing_subscriber::registry()
        .with(EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| format!("skrift={}", log_level)),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    let response = match execute(&cli).await {
        Ok(value) => value,
        Err(err) => serde_json::to_value(ErrorResult::from(&err))?,
    };

    println!("{}", response);
    Ok(())
}

/// Run one invocation; every error here becomes an ErrorResult.
async fn execute(cli: &Cli) -> skrift::Result<serde_json::Value> {
    let video_id = cli.video_id.as_deref().ok_or(SkriftError::MissingVideoId)?;

    let settings = match &cli.config {
        Some(path) => Settings::load_from(Some(&std::path::PathBuf::from(path)))?,
        None => Settings::load()?,
    }
    .with_max_chars(cli.max_chars);

    let pipeline = Pipeline::new(settings)?;
    pipeline.run(video_id).await
}
