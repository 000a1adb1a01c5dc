//! Parsing of YouTube's json3 timed-text format.
//!
//! A json3 body is `{"events": [...]}` where each event carries a start
//! offset and duration in milliseconds plus a list of text runs. Events
//! with no usable text (styling windows, bare newline appends) are
//! skipped.

use super::CaptionSegment;
use crate::error::Result;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct TimedTextBody {
    #[serde(default)]
    events: Vec<TimedTextEvent>,
}

#[derive(Debug, Deserialize)]
struct TimedTextEvent {
    #[serde(rename = "tStartMs", default)]
    start_ms: u64,
    #[serde(rename = "dDurationMs", default)]
    duration_ms: u64,
    #[serde(default)]
    segs: Vec<TimedTextSeg>,
}

#[derive(Debug, Deserialize)]
struct TimedTextSeg {
    #[serde(default)]
    utf8: String,
}

/// Parse a json3 body into caption segments.
pub fn parse_segments(body: &str) -> Result<Vec<CaptionSegment>> {
    let parsed: TimedTextBody = serde_json::from_str(body)?;

    let segments = parsed
        .events
        .into_iter()
        .filter_map(|event| {
            let text: String = event.segs.iter().map(|seg| seg.utf8.as_str()).collect();
            if text.trim().is_empty() {
                return None;
            }
            Some(CaptionSegment::new(
                text,
                event.start_ms as f64 / 1000.0,
                event.duration_ms as f64 / 1000.0,
            ))
        })
        .collect();

    Ok(segments)
}
