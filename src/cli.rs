//! CLI definition for Skrift.

use clap::Parser;

/// Skrift - YouTube transcript fetcher
///
/// Fetches a video's caption transcript, cleans and truncates it, caches
/// the result, and prints a single JSON object to stdout. The exit code is
/// always 0; success or failure is signaled through the JSON itself.
/// The name "Skrift" comes from the Norwegian word for "writing."
#[derive(Parser, Debug)]
#[command(name = "skrift")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// 11-character YouTube video ID
    pub video_id: Option<String>,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Maximum transcript length in characters before truncation
    #[arg(long, env = "MAX_TRANSCRIPT_CHARS")]
    pub max_chars: Option<usize>,
}
