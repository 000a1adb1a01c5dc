//! Caption source abstraction for Skrift.
//!
//! Provides a trait-based interface to the captions provider so the
//! pipeline can be exercised without network access.

mod json3;
mod ytdlp;

pub use json3::parse_segments;
pub use ytdlp::YtDlpSource;

use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// One timed unit of spoken-text transcription.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaptionSegment {
    /// Caption text as delivered by the provider.
    pub text: String,
    /// Start offset in seconds.
    pub start: f64,
    /// Duration in seconds.
    pub duration: f64,
}

impl CaptionSegment {
    pub fn new(text: impl Into<String>, start: f64, duration: f64) -> Self {
        Self {
            text: text.into(),
            start,
            duration,
        }
    }
}

/// Everything the captions provider returns for one video.
#[derive(Debug, Clone)]
pub struct FetchedCaptions {
    /// Ordered caption segments for the selected track.
    pub segments: Vec<CaptionSegment>,
    /// Language code of the selected track (e.g. "en").
    pub language_code: String,
    /// Video title, when the provider's metadata carries one.
    pub title: Option<String>,
}

/// Trait for caption providers.
#[async_trait]
pub trait CaptionSource: Send + Sync {
    /// Fetch the caption track for a video.
    ///
    /// Track selection prefers English, then falls back to the first
    /// track the provider enumerates.
    async fn fetch_captions(&self, video_id: &str) -> Result<FetchedCaptions>;
}
