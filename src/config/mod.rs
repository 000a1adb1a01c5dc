//! Configuration management for Skrift.

mod settings;

pub use settings::{GeneralSettings, Settings, TranscriptSettings};
