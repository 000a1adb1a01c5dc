//! Skrift - YouTube transcript fetcher
//!
//! A single-shot CLI helper that fetches a YouTube video's caption
//! transcript, cleans and truncates it, caches the result as JSON, and
//! prints one JSON object to stdout.
//!
//! The name "Skrift" comes from the Norwegian word for "writing."
//!
//! # Overview
//!
//! Skrift is meant to be invoked by another process (a summarizer, an
//! agent tool) that needs transcript text. The contract is deliberately
//! blunt: the exit code is always 0, and the emitted JSON's `success`
//! field plus a closed set of `error` codes (`UNKNOWN`, `INVALID_VIDEO`,
//! `NO_TRANSCRIPT`, `PRIVATE_VIDEO`, `RATE_LIMIT`) carry the outcome.
//! Results are cached one JSON file per video; a cached file is returned
//! verbatim with no freshness check.
//!
//! # Architecture
//!
//! The library is organized into several modules:
//!
//! - `config` - Configuration management
//! - `cache` - Read-through result cache
//! - `captions` - Caption source abstraction (yt-dlp + json3)
//! - `transcript` - Cleaning, truncation, and output models
//! - `pipeline` - The linear fetch/cache/transform pass
//!
//! # Example
//!
//! ```rust,no_run
//! use skrift::config::Settings;
//! use skrift::pipeline::Pipeline;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let settings = Settings::load()?;
//!     let pipeline = Pipeline::new(settings)?;
//!
//!     let response = pipeline.run("dQw4w9WgXcQ").await?;
//!     println!("{}", response);
//!
//!     Ok(())
//! }
//! ```

pub mod cache;
pub mod captions;
pub mod cli;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod transcript;

pub use error::{Result, SkriftError};
