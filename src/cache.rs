//! Read-through result cache.
//!
//! One pretty-printed JSON file per video ID in a fixed directory. A
//! readable file is the source of truth for that video: its contents are
//! returned verbatim and no fetch happens. An unreadable or unparsable
//! file counts as a miss, so a torn or corrupted write heals itself on the
//! next cold fetch. Write failures never surface to the caller.

use crate::config::Settings;
use serde_json::Value;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Per-video JSON file store keyed by video ID.
pub struct CacheStore {
    dir: PathBuf,
}

impl CacheStore {
    /// Create a store rooted at the given directory.
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Open the store at its configured location.
    ///
    /// Resolution order: explicit `general.cache_dir` setting, then a
    /// `cache` directory next to the executable, then the platform cache
    /// directory.
    pub fn open(settings: &Settings) -> Self {
        let dir = settings
            .cache_dir()
            .or_else(|| {
                std::env::current_exe()
                    .ok()
                    .and_then(|exe| exe.parent().map(|d| d.join("cache")))
            })
            .unwrap_or_else(|| {
                dirs::cache_dir()
                    .unwrap_or_else(|| PathBuf::from("/tmp"))
                    .join("skrift")
            });
        Self::new(dir)
    }

    /// Root directory of the store.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the cache file for a video ID.
    pub fn path_for(&self, video_id: &str) -> PathBuf {
        self.dir.join(format!("{}.json", video_id))
    }

    /// Load the cached result for a video, if present and parsable.
    ///
    /// Any read or parse failure is treated as a miss.
    pub fn load(&self, video_id: &str) -> Option<Value> {
        let path = self.path_for(video_id);
        if !path.exists() {
            return None;
        }

        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) => {
                warn!("Failed to read cache file {}: {}", path.display(), e);
                return None;
            }
        };

        match serde_json::from_str(&content) {
            Ok(value) => {
                debug!("Cache hit for {}", video_id);
                Some(value)
            }
            Err(e) => {
                warn!("Corrupted cache file {}: {}", path.display(), e);
                None
            }
        }
    }

    /// Persist a result for a video, best effort.
    ///
    /// Written pretty-printed through a temp file in the same directory,
    /// then renamed over the target. Failures are logged and swallowed.
    pub fn store(&self, video_id: &str, value: &Value) {
        if let Err(e) = self.try_store(video_id, value) {
            warn!("Failed to write cache for {}: {}", video_id, e);
        }
    }

    fn try_store(&self, video_id: &str, value: &Value) -> crate::error::Result<()> {
        std::fs::create_dir_all(&self.dir)?;

        let pretty = serde_json::to_string_pretty(value)?;
        let mut tmp = tempfile::NamedTempFile::new_in(&self.dir)?;
        tmp.write_all(pretty.as_bytes())?;
        tmp.persist(self.path_for(video_id))
            .map_err(|e| crate::error::SkriftError::Io(e.error))?;

        debug!("Cached result for {}", video_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn temp_store() -> (tempfile::TempDir, CacheStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = CacheStore::new(dir.path().to_path_buf());
        (dir, store)
    }

    #[test]
    fn test_store_and_load_round_trip() {
        let (_dir, store) = temp_store();
        let value = json!({"success": true, "video_id": "dQw4w9WgXcQ"});

        store.store("dQw4w9WgXcQ", &value);
        let loaded = store.load("dQw4w9WgXcQ").unwrap();

        assert_eq!(loaded, value);
    }

    #[test]
    fn test_load_missing_is_none() {
        let (_dir, store) = temp_store();
        assert!(store.load("dQw4w9WgXcQ").is_none());
    }

    #[test]
    fn test_corrupted_file_is_a_miss() {
        let (_dir, store) = temp_store();
        std::fs::create_dir_all(store.dir()).unwrap();
        std::fs::write(store.path_for("dQw4w9WgXcQ"), "{not json").unwrap();

        assert!(store.load("dQw4w9WgXcQ").is_none());
    }

    #[test]
    fn test_cache_file_is_pretty_printed() {
        let (_dir, store) = temp_store();
        let value = json!({"success": true, "stats": {"char_length": 12}});

        store.store("dQw4w9WgXcQ", &value);
        let raw = std::fs::read_to_string(store.path_for("dQw4w9WgXcQ")).unwrap();

        assert!(raw.contains("\n  \"success\""));
    }

    #[test]
    fn test_store_into_missing_dir_creates_it() {
        let dir = tempfile::tempdir().unwrap();
        let store = CacheStore::new(dir.path().join("nested").join("cache"));

        store.store("dQw4w9WgXcQ", &json!({"success": true}));
        assert!(store.load("dQw4w9WgXcQ").is_some());
    }
}
