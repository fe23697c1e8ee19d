use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::{PlaybackRate, Result};

/// Top-level configuration structure for the application.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub playback: PlaybackConfig,
    /// `tracing` filter directive used when `RUST_LOG` is not set.
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            playback: PlaybackConfig::default(),
            log_filter: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Reads a JSON configuration file. Missing fields keep their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// The configured default rate, validated.
    pub fn default_rate(&self) -> Result<PlaybackRate> {
        PlaybackRate::new(self.playback.default_rate)
    }
}

/// Configuration specific to playback dispatch.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackConfig {
    pub default_rate: f64,
    /// Delay each sound resource by its denormalised `relative_time`.
    pub schedule_resource_offsets: bool,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            default_rate: 1.0,
            schedule_resource_offsets: true,
        }
    }
}
