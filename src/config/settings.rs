//! Configuration settings for Skrift.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default transcript character budget.
pub const DEFAULT_MAX_CHARS: usize = 150_000;

/// Root configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Settings {
    pub general: GeneralSettings,
    pub transcript: TranscriptSettings,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralSettings {
    /// Cache directory override. Defaults to a `cache` directory next to
    /// the executable when unset.
    pub cache_dir: Option<String>,
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            cache_dir: None,
            log_level: "warn".to_string(),
        }
    }
}

/// Transcript processing settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TranscriptSettings {
    /// Maximum transcript length in characters before truncation.
    pub max_chars: usize,
}

impl Default for TranscriptSettings {
    fn default() -> Self {
        Self {
            max_chars: DEFAULT_MAX_CHARS,
        }
    }
}

impl Settings {
    /// Load settings from the default configuration file.
    pub fn load() -> crate::error::Result<Self> {
        Self::load_from(None)
    }

    /// Load settings from a specific path, or default location if None.
    ///
    /// A missing file yields defaults; the `MAX_TRANSCRIPT_CHARS`
    /// environment variable (surfaced through the CLI) is applied by the
    /// caller via [`Settings::with_max_chars`].
    pub fn load_from(path: Option<&PathBuf>) -> crate::error::Result<Self> {
        let config_path = match path {
            Some(p) => p.clone(),
            None => Self::default_config_path(),
        };

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let settings: Settings = toml::from_str(&content)?;
            Ok(settings)
        } else {
            Ok(Settings::default())
        }
    }

    /// Override the transcript character budget (CLI flag or environment).
    pub fn with_max_chars(mut self, max_chars: Option<usize>) -> Self {
        if let Some(max) = max_chars {
            self.transcript.max_chars = max;
        }
        self
    }

    /// Get the default configuration file path.
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("skrift")
            .join("config.toml")
    }

    /// Expand shell variables in paths (e.g., ~).
    pub fn expand_path(path: &str) -> PathBuf {
        PathBuf::from(shellexpand::tilde(path).to_string())
    }

    /// Get the expanded cache directory override, if configured.
    pub fn cache_dir(&self) -> Option<PathBuf> {
        self.general.cache_dir.as_deref().map(Self::expand_path)
    }
}
