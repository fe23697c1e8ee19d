use serde::{Deserialize, Serialize};

/// Audio information for a playable sound effect.
///
/// Locating the file and decoding it is the job of the audio collaborator;
/// the core only carries the descriptor around and adjusts `rate`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AudioResource {
    /// Logical asset identity, e.g. `sounds/hydraulic1.wav`.
    pub file_name: String,
    /// Linear gain multiplier. Not clamped.
    #[serde(default = "unity")]
    pub volume: f32,
    /// Pitch shift in the playback collaborator's units.
    #[serde(default = "unity")]
    pub pitch: f32,
    /// Playback speed multiplier for this resource.
    #[serde(default = "unity_rate")]
    pub rate: f64,
    /// Nominal duration in seconds at rate 1.0.
    pub length: f64,
    /// Normalised (0-1) start offset within the parent definition.
    #[serde(default)]
    pub relative_time: f64,
}

fn unity() -> f32 {
    1.0
}

fn unity_rate() -> f64 {
    1.0
}

impl AudioResource {
    pub fn new(file_name: impl Into<String>, length: f64) -> Self {
        Self {
            file_name: file_name.into(),
            volume: 1.0,
            pitch: 1.0,
            rate: 1.0,
            length,
            relative_time: 0.0,
        }
    }

    pub fn with_volume(mut self, volume: f32) -> Self {
        self.volume = volume;
        self
    }

    pub fn with_pitch(mut self, pitch: f32) -> Self {
        self.pitch = pitch;
        self
    }

    pub fn with_rate(mut self, rate: f64) -> Self {
        self.rate = rate;
        self
    }

    pub fn with_relative_time(mut self, relative_time: f64) -> Self {
        self.relative_time = relative_time;
        self
    }

    /// File name without its final extension.
    pub fn name(&self) -> &str {
        self.file_name
            .rsplit_once('.')
            .map(|(name, _)| name)
            .unwrap_or(&self.file_name)
    }

    /// File extension without the leading dot, or an empty string.
    pub fn extension(&self) -> &str {
        self.file_name
            .rsplit_once('.')
            .map(|(_, ext)| ext)
            .unwrap_or("")
    }
}
