//! Transcript output models and timing helpers.

mod clean;
mod language;

pub use clean::{clean_transcript, truncate_chars, Truncation};
pub use language::language_name;

use crate::captions::CaptionSegment;
use serde::{Deserialize, Serialize};

/// Maximum number of enriched segments included in the output.
pub const MAX_SEGMENTS_IN_OUTPUT: usize = 50;

/// Title used when the metadata provider has nothing better.
pub const FALLBACK_TITLE: &str = "YouTube Video";

/// The JSON shape emitted (and cached) for every successful invocation.
///
/// Field order is the wire order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptResult {
    pub success: bool,
    pub video_id: String,
    pub title: String,
    /// Cleaned, possibly truncated transcript text.
    pub transcript: String,
    /// Up to [`MAX_SEGMENTS_IN_OUTPUT`] enriched segments, in caption order.
    pub segments: Vec<SegmentOutput>,
    /// Language code of the fetched track.
    pub language: String,
    pub language_human_readable: String,
    pub truncated: bool,
    /// Character count before truncation.
    pub original_length: usize,
    pub truncated_to: usize,
    /// Sum of all segment durations, rounded to 2 decimals.
    pub duration_seconds: f64,
    pub stats: TranscriptStats,
    /// ISO-8601 UTC timestamp with trailing Z.
    pub cached_at: String,
}

/// One caption segment enriched for output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SegmentOutput {
    pub text: String,
    pub start: f64,
    pub start_mmss: String,
    pub duration: f64,
}

impl SegmentOutput {
    /// Enrich a raw caption segment: rounded times plus an mm:ss start.
    pub fn from_segment(segment: &CaptionSegment) -> Self {
        Self {
            text: segment.text.clone(),
            start: round2(segment.start),
            start_mmss: seconds_to_mmss(segment.start),
            duration: round2(segment.duration),
        }
    }
}

/// Redundant summary block carried alongside the top-level fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptStats {
    pub char_length: usize,
    pub truncated: bool,
    pub truncated_to: usize,
    pub segments_total: usize,
    pub segments_returned: usize,
    pub language: String,
    pub duration_seconds: f64,
}

/// Format seconds as MM:SS.
///
/// The start is truncated to whole seconds first; there is no hour field,
/// so minutes may exceed 59.
pub fn seconds_to_mmss(seconds: f64) -> String {
    let total = seconds as u64;
    let minutes = total / 60;
    let secs = total % 60;
    format!("{:02}:{:02}", minutes, secs)
}

/// Round to 2 decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Total duration across all segments: sum first, then round.
pub fn total_duration(segments: &[CaptionSegment]) -> f64 {
    round2(segments.iter().map(|s| s.duration).sum())
}
