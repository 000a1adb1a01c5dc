//! The fetch/cache/transform pipeline.
//!
//! One linear pass per invocation: validate the video ID, short-circuit on
//! a cached result, otherwise fetch captions, clean and truncate the text,
//! assemble the result, and write it through the cache.

use crate::cache::CacheStore;
use crate::captions::{CaptionSource, FetchedCaptions, YtDlpSource};
use crate::config::Settings;
use crate::error::{Result, SkriftError};
use crate::transcript::{
    clean_transcript, language_name, total_duration, truncate_chars, SegmentOutput,
    TranscriptResult, TranscriptStats, FALLBACK_TITLE, MAX_SEGMENTS_IN_OUTPUT,
};
use chrono::{SecondsFormat, Utc};
use regex::Regex;
use serde_json::Value;
use std::sync::{Arc, OnceLock};
use tracing::info;

static VIDEO_ID_RE: OnceLock<Regex> = OnceLock::new();

fn video_id_re() -> &'static Regex {
    VIDEO_ID_RE.get_or_init(|| Regex::new(r"^[A-Za-z0-9_-]{11}$").expect("Invalid video ID regex"))
}

/// Validate a raw video ID argument.
///
/// Returns the trimmed ID when it is exactly 11 characters from the
/// YouTube ID alphabet. No I/O happens before this check.
pub fn validate_video_id(raw: &str) -> Result<String> {
    let trimmed = raw.trim();
    if video_id_re().is_match(trimmed) {
        Ok(trimmed.to_string())
    } else {
        Err(SkriftError::InvalidVideoId(trimmed.to_string()))
    }
}

/// The transcript pipeline.
pub struct Pipeline {
    settings: Settings,
    cache: CacheStore,
    source: Arc<dyn CaptionSource>,
}

impl Pipeline {
    /// Create a pipeline with the production caption source.
    pub fn new(settings: Settings) -> Result<Self> {
        let source: Arc<dyn CaptionSource> = Arc::new(YtDlpSource::new()?);
        let cache = CacheStore::open(&settings);
        Ok(Self::with_components(settings, cache, source))
    }

    /// Create a pipeline with custom components.
    pub fn with_components(
        settings: Settings,
        cache: CacheStore,
        source: Arc<dyn CaptionSource>,
    ) -> Self {
        Self {
            settings,
            cache,
            source,
        }
    }

    /// Run one invocation and return the JSON value to emit.
    ///
    /// A cache hit returns the stored value verbatim, original
    /// `cached_at` included. A fresh fetch is written back best effort;
    /// the response never depends on the write succeeding.
    pub async fn run(&self, raw_id: &str) -> Result<Value> {
        let video_id = validate_video_id(raw_id)?;

        if let Some(cached) = self.cache.load(&video_id) {
            info!("Returning cached transcript for {}", video_id);
            return Ok(cached);
        }

        info!("Fetching transcript for {}", video_id);
        let captions = self.source.fetch_captions(&video_id).await?;
        let result = self.assemble(&video_id, captions)?;

        let value = serde_json::to_value(&result)?;
        self.cache.store(&video_id, &value);
        Ok(value)
    }

    /// Build the [`TranscriptResult`] from fetched captions.
    fn assemble(&self, video_id: &str, captions: FetchedCaptions) -> Result<TranscriptResult> {
        let duration_seconds = total_duration(&captions.segments);

        let joined = captions
            .segments
            .iter()
            .map(|s| s.text.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        let cleaned = clean_transcript(&joined);

        if cleaned.is_empty() {
            return Err(SkriftError::EmptyTranscript);
        }

        let truncation = truncate_chars(cleaned, self.settings.transcript.max_chars);

        let segments: Vec<SegmentOutput> = captions
            .segments
            .iter()
            .take(MAX_SEGMENTS_IN_OUTPUT)
            .map(SegmentOutput::from_segment)
            .collect();

        let stats = TranscriptStats {
            char_length: truncation.original_length,
            truncated: truncation.truncated,
            truncated_to: truncation.truncated_to,
            segments_total: captions.segments.len(),
            segments_returned: segments.len(),
            language: captions.language_code.clone(),
            duration_seconds,
        };

        let title = captions
            .title
            .unwrap_or_else(|| FALLBACK_TITLE.to_string());

        Ok(TranscriptResult {
            success: true,
            video_id: video_id.to_string(),
            title,
            transcript: truncation.text,
            segments,
            language: captions.language_code.clone(),
            language_human_readable: language_name(&captions.language_code),
            truncated: truncation.truncated,
            original_length: truncation.original_length,
            truncated_to: truncation.truncated_to,
            duration_seconds,
            stats,
            cached_at: Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true),
        })
    }
}
