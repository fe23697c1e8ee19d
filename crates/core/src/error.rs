/// Result alias that carries the custom [`HapticSyncError`] type.
pub type Result<T> = std::result::Result<T, HapticSyncError>;

/// Common error type for the core crate.
#[derive(Debug, thiserror::Error)]
pub enum HapticSyncError {
    /// A playback rate of zero, a non-finite value or a magnitude outside
    /// the supported range was supplied. Every timing is divided by the
    /// rate, so there is no meaningful projection.
    #[error("invalid playback rate {0}: magnitude must be between 1e-6 and 1e6")]
    InvalidRate(f64),
    /// The canonical duration of a definition must be finite and positive.
    #[error("invalid canonical duration {0}s: duration must be finite and greater than zero")]
    InvalidDuration(f64),
    /// A definition was asked to take its duration from a resource but has none.
    #[error("definition `{0}` has no sound resource to anchor its duration")]
    MissingDurationAnchor(String),
    /// A string did not name any built-in preset.
    #[error("unknown preset `{0}`")]
    UnknownPreset(String),
    /// Free-form error used for lock poisoning and similar conditions.
    #[error("{0}")]
    Message(String),
    /// Wrapper around standard IO errors.
    #[error("{0}")]
    Io(#[from] std::io::Error),
    /// Wrapper around JSON (de)serialisation errors.
    #[error("{0}")]
    Json(#[from] serde_json::Error),
}

impl HapticSyncError {
    /// Creates a new error that simply wraps the provided message.
    pub fn msg<T: Into<String>>(msg: T) -> Self {
        Self::Message(msg.into())
    }
}

impl From<&str> for HapticSyncError {
    fn from(value: &str) -> Self {
        Self::msg(value)
    }
}

impl From<String> for HapticSyncError {
    fn from(value: String) -> Self {
        Self::Message(value)
    }
}
