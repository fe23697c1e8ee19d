use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{HapticSyncError, Result};

/// Playback speed multiplier applied to a sound definition.
///
/// `1.0` is normal speed, `2.0` plays twice as fast and `0.5` at half speed.
/// A zero rate has no meaning (every projected time is divided by the rate),
/// so the type cannot hold one: the only way to build a `PlaybackRate` is
/// through [`PlaybackRate::new`], which rejects zero, non-finite values and
/// magnitudes outside [`MIN`](Self::MIN)..=[`MAX`](Self::MAX). Inside that
/// range every projected time and resource rate stays finite and nonzero.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct PlaybackRate(f64);

impl PlaybackRate {
    /// Normal playback speed.
    pub const NORMAL: PlaybackRate = PlaybackRate(1.0);

    /// Smallest accepted magnitude.
    pub const MIN: f64 = 1e-6;

    /// Largest accepted magnitude.
    pub const MAX: f64 = 1e6;

    /// Validates `value` and wraps it.
    pub fn new(value: f64) -> Result<Self> {
        let magnitude = value.abs();
        if !(Self::MIN..=Self::MAX).contains(&magnitude) {
            return Err(HapticSyncError::InvalidRate(value));
        }
        Ok(Self(value))
    }

    /// Returns the raw multiplier.
    pub fn get(self) -> f64 {
        self.0
    }

    /// Converts a normalised or canonical quantity into wall-clock seconds.
    ///
    /// Playback rate is an inverse relationship: doubling the rate halves the
    /// resulting value.
    pub fn scale_time(self, value: f64) -> f64 {
        value / self.0
    }
}

impl Default for PlaybackRate {
    fn default() -> Self {
        Self::NORMAL
    }
}

impl TryFrom<f64> for PlaybackRate {
    type Error = HapticSyncError;

    fn try_from(value: f64) -> Result<Self> {
        Self::new(value)
    }
}

impl From<PlaybackRate> for f64 {
    fn from(rate: PlaybackRate) -> Self {
        rate.0
    }
}

impl fmt::Display for PlaybackRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_and_non_finite_rates() {
        assert!(matches!(
            PlaybackRate::new(0.0),
            Err(HapticSyncError::InvalidRate(r)) if r == 0.0
        ));
        assert!(PlaybackRate::new(-0.0).is_err());
        assert!(PlaybackRate::new(f64::NAN).is_err());
        assert!(PlaybackRate::new(f64::INFINITY).is_err());
    }

    #[test]
    fn rejects_rates_outside_the_supported_range() {
        assert!(PlaybackRate::new(1e-46).is_err());
        assert!(PlaybackRate::new(1e39).is_err());
        assert!(PlaybackRate::new(-1e39).is_err());
        assert!(PlaybackRate::new(PlaybackRate::MIN / 2.0).is_err());
        assert!(PlaybackRate::new(PlaybackRate::MAX * 2.0).is_err());

        assert_eq!(PlaybackRate::new(PlaybackRate::MIN).unwrap().get(), PlaybackRate::MIN);
        assert_eq!(PlaybackRate::new(PlaybackRate::MAX).unwrap().get(), PlaybackRate::MAX);
        assert!(PlaybackRate::new(-0.5).is_ok());
    }

    #[test]
    fn scales_time_inversely() {
        let rate = PlaybackRate::new(2.0).unwrap();
        assert_eq!(rate.scale_time(1.0), 0.5);
        assert_eq!(PlaybackRate::NORMAL.scale_time(0.3), 0.3);
        assert_eq!(PlaybackRate::default(), PlaybackRate::NORMAL);
    }

    #[test]
    fn deserialisation_validates_the_value() {
        let rate: PlaybackRate = serde_json::from_str("0.5").unwrap();
        assert_eq!(rate.get(), 0.5);
        assert!(serde_json::from_str::<PlaybackRate>("0.0").is_err());
    }
}
