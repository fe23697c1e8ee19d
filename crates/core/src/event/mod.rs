use serde::{Deserialize, Serialize};

/// Kind of haptic effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HapticEventKind {
    /// Instantaneous pulse.
    Transient,
    /// Sustained effect that needs a duration.
    Continuous,
}

/// Haptic event template expressed in rate independent (0-1) coordinates.
///
/// `relative_time` and `duration` are normalised against the canonical
/// duration of the [`SoundDefinition`](crate::SoundDefinition) the event
/// belongs to. Use [`project_event`](crate::project_event) to turn it into a
/// [`ConcreteEvent`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedEvent {
    pub kind: HapticEventKind,
    /// Strength of the effect, 0-1 by convention.
    pub intensity: f32,
    /// Character of the effect (soft to sharp), 0-1 by convention.
    pub sharpness: f32,
    /// Normalised start time. 0 is the beginning, 1 the end.
    pub relative_time: f64,
    /// Normalised sustain length. Continuous events without one default to 1.0.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
}

impl NormalizedEvent {
    pub fn transient(intensity: f32, sharpness: f32, at: f64) -> Self {
        Self {
            kind: HapticEventKind::Transient,
            intensity,
            sharpness,
            relative_time: at,
            duration: None,
        }
    }

    pub fn continuous(intensity: f32, sharpness: f32, at: f64, duration: f64) -> Self {
        Self {
            kind: HapticEventKind::Continuous,
            intensity,
            sharpness,
            relative_time: at,
            duration: Some(duration),
        }
    }

    /// Whether this event is continuous but carries no duration.
    pub fn is_missing_duration(&self) -> bool {
        self.kind == HapticEventKind::Continuous && self.duration.is_none()
    }
}

/// Haptic event denormalised into wall-clock seconds for a given rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConcreteEvent {
    pub kind: HapticEventKind,
    pub intensity: f32,
    pub sharpness: f32,
    /// Start offset in seconds from the beginning of the pattern.
    pub time_seconds: f64,
    pub duration_seconds: f64,
}

/// Ordered list of [`NormalizedEvent`]s assembled with chained calls.
///
/// ```
/// use haptic_sync_core::EventGroup;
///
/// let events = EventGroup::new()
///     .transient(1.0, 1.0, 0.0)
///     .continuous(0.5, 0.3, 0.0, 1.0)
///     .transient(1.0, 1.0, 0.6)
///     .build();
/// assert_eq!(events.len(), 3);
/// ```
#[derive(Debug, Default, Clone)]
pub struct EventGroup {
    events: Vec<NormalizedEvent>,
}

impl EventGroup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn transient(self, intensity: f32, sharpness: f32, at: f64) -> Self {
        self.push(NormalizedEvent::transient(intensity, sharpness, at))
    }

    pub fn continuous(self, intensity: f32, sharpness: f32, at: f64, duration: f64) -> Self {
        self.push(NormalizedEvent::continuous(intensity, sharpness, at, duration))
    }

    pub fn push(mut self, event: NormalizedEvent) -> Self {
        self.events.push(event);
        self
    }

    pub fn build(self) -> Vec<NormalizedEvent> {
        self.events
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn group_keeps_authoring_order() {
        let events = EventGroup::new()
            .transient(1.0, 1.0, 0.6)
            .continuous(0.5, 0.3, 0.0, 1.0)
            .transient(0.7, 0.1, 0.1)
            .build();

        let times: Vec<f64> = events.iter().map(|e| e.relative_time).collect();
        assert_eq!(times, vec![0.6, 0.0, 0.1]);
        assert_eq!(events[1].kind, HapticEventKind::Continuous);
        assert_eq!(events[1].duration, Some(1.0));
        assert_eq!(events[0].duration, None);
    }

    #[test]
    fn detects_missing_duration() {
        let mut event = NormalizedEvent::continuous(0.4, 0.2, 0.0, 0.5);
        assert!(!event.is_missing_duration());
        event.duration = None;
        assert!(event.is_missing_duration());
        assert!(!NormalizedEvent::transient(1.0, 1.0, 0.0).is_missing_duration());
    }

    #[test]
    fn kind_uses_kebab_case_names() {
        let json = serde_json::to_string(&HapticEventKind::Continuous).unwrap();
        assert_eq!(json, "\"continuous\"");
    }
}
