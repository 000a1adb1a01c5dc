//! yt-dlp caption source.
//!
//! One `yt-dlp --dump-json` probe supplies the video title and the caption
//! track listing; the selected track is then downloaded as json3 over
//! HTTP. yt-dlp owns the moving-target logic of extracting caption URLs
//! from YouTube.

use super::{CaptionSegment, CaptionSource, FetchedCaptions};
use crate::error::{Result, SkriftError};
use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, info};

/// Timeout for caption track downloads.
const DOWNLOAD_TIMEOUT_SECS: u64 = 30;

/// Browser-like UA; YouTube's timedtext endpoint rejects the default one.
const USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0 Safari/537.36";

/// Caption source backed by yt-dlp metadata plus a direct track download.
pub struct YtDlpSource {
    http: reqwest::Client,
}

/// A selected caption track: its language and a json3 URL.
#[derive(Debug, Clone, PartialEq)]
struct CaptionTrack {
    language_code: String,
    url: String,
}

impl YtDlpSource {
    pub fn new() -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(DOWNLOAD_TIMEOUT_SECS))
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self { http })
    }

    /// Probe video metadata (title + caption track listing) via yt-dlp.
    async fn probe(&self, video_id: &str) -> Result<Value> {
        let url = format!("https://www.youtube.com/watch?v={}", video_id);

        let output = tokio::process::Command::new("yt-dlp")
            .args(["--dump-json", "--no-download", "--no-warnings", &url])
            .output()
            .await
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    SkriftError::ToolNotFound("yt-dlp".to_string())
                } else {
                    SkriftError::CaptionFetch(format!("Failed to run yt-dlp: {}", e))
                }
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let lower = stderr.to_lowercase();
            if lower.contains("video unavailable")
                || lower.contains("does not exist")
                || lower.contains("is not available")
            {
                return Err(SkriftError::VideoUnavailable);
            }
            return Err(SkriftError::CaptionFetch(stderr.trim().to_string()));
        }

        let probe: Value = serde_json::from_str(&String::from_utf8_lossy(&output.stdout))?;
        Ok(probe)
    }

    /// Download a caption track body.
    async fn download_track(&self, url: &str) -> Result<String> {
        let body = self
            .http
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        Ok(body)
    }
}

#[async_trait]
impl CaptionSource for YtDlpSource {
    async fn fetch_captions(&self, video_id: &str) -> Result<FetchedCaptions> {
        let probe = self.probe(video_id).await?;

        let title = probe["title"]
            .as_str()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(String::from);

        if !has_caption_tracks(&probe) {
            return Err(SkriftError::TranscriptsDisabled);
        }

        let track = select_track(&probe).ok_or(SkriftError::NoTranscriptFound)?;
        info!("Selected {} caption track for {}", track.language_code, video_id);

        let body = self.download_track(&track.url).await?;
        let segments: Vec<CaptionSegment> = super::parse_segments(&body)?;
        debug!("Parsed {} caption segments", segments.len());

        if segments.is_empty() {
            return Err(SkriftError::NoTranscriptFound);
        }

        Ok(FetchedCaptions {
            segments,
            language_code: track.language_code,
            title,
        })
    }
}

/// Whether the probe lists any caption track, manual or automatic.
fn has_caption_tracks(probe: &Value) -> bool {
    ["subtitles", "automatic_captions"].iter().any(|key| {
        probe[*key]
            .as_object()
            .is_some_and(|tracks| !tracks.is_empty())
    })
}

/// Pick a caption track from the probe.
///
/// Preference order: English manual subtitles, English automatic
/// captions, then the first manual track, then the first automatic track,
/// in the order the listing enumerates them.
fn select_track(probe: &Value) -> Option<CaptionTrack> {
    let manual = probe["subtitles"].as_object();
    let auto = probe["automatic_captions"].as_object();

    let candidates = [
        manual.and_then(|t| t.get("en").map(|f| ("en", f))),
        auto.and_then(|t| t.get("en").map(|f| ("en", f))),
        manual.and_then(|t| t.iter().next().map(|(lang, f)| (lang.as_str(), f))),
        auto.and_then(|t| t.iter().next().map(|(lang, f)| (lang.as_str(), f))),
    ];

    candidates.into_iter().flatten().find_map(|(lang, formats)| {
        let url = format_url(formats)?;
        Some(CaptionTrack {
            language_code: lang.to_string(),
            url,
        })
    })
}

/// Extract a json3 URL from a track's format list.
///
/// Prefers the listed json3 entry; otherwise takes the first entry and
/// asks the endpoint for json3 explicitly.
fn format_url(formats: &Value) -> Option<String> {
    let formats = formats.as_array()?;

    if let Some(url) = formats
        .iter()
        .find(|f| f["ext"].as_str() == Some("json3"))
        .and_then(|f| f["url"].as_str())
    {
        return Some(url.to_string());
    }

    let url = formats.iter().find_map(|f| f["url"].as_str())?;
    let separator = if url.contains('?') { '&' } else { '?' };
    Some(format!("{}{}fmt=json3", url, separator))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn track(url: &str, ext: &str) -> Value {
        json!([{"url": url, "ext": ext, "name": "whatever"}])
    }

    #[test]
    fn test_prefers_english_manual_subtitles() {
        let probe = json!({
            "subtitles": {"de": track("https://x/de?v=1", "json3"), "en": track("https://x/en?v=1", "json3")},
            "automatic_captions": {"en": track("https://x/auto-en?v=1", "json3")}
        });

        let selected = select_track(&probe).unwrap();
        assert_eq!(selected.language_code, "en");
        assert_eq!(selected.url, "https://x/en?v=1");
    }

    #[test]
    fn test_falls_back_to_english_automatic() {
        let probe = json!({
            "subtitles": {},
            "automatic_captions": {"en": track("https://x/auto-en?v=1", "json3")}
        });

        let selected = select_track(&probe).unwrap();
        assert_eq!(selected.url, "https://x/auto-en?v=1");
    }

    #[test]
    fn test_falls_back_to_first_available_track() {
        let probe = json!({
            "subtitles": {"hi": track("https://x/hi?v=1", "json3")},
            "automatic_captions": {}
        });

        let selected = select_track(&probe).unwrap();
        assert_eq!(selected.language_code, "hi");
    }

    #[test]
    fn test_non_json3_url_gets_format_appended() {
        let probe = json!({
            "subtitles": {"en": track("https://x/en?v=1", "vtt")}
        });

        let selected = select_track(&probe).unwrap();
        assert_eq!(selected.url, "https://x/en?v=1&fmt=json3");
    }

    #[test]
    fn test_no_tracks_at_all() {
        let probe = json!({"title": "Some video"});
        assert!(select_track(&probe).is_none());
        assert!(!has_caption_tracks(&probe));

        let probe = json!({"subtitles": {}, "automatic_captions": {}});
        assert!(!has_caption_tracks(&probe));
    }

    #[test]
    fn test_empty_format_list_is_unusable() {
        // listed, so not "disabled" - but nothing to download either
        let probe = json!({"subtitles": {"en": []}});
        assert!(has_caption_tracks(&probe));
        assert!(select_track(&probe).is_none());
    }
}
