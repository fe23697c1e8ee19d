use serde::{Deserialize, Serialize};

use crate::{AudioResource, HapticSyncError, NormalizedEvent, Result};

/// Immutable template pairing a set of haptic events with the sounds they
/// accompany.
///
/// Event times and durations are normalised against `duration`, the
/// canonical length of the whole effect in seconds at rate 1.0. Construction
/// validates the duration and nothing can change afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "DefinitionFile")]
pub struct SoundDefinition {
    name: String,
    events: Vec<NormalizedEvent>,
    sound_resources: Vec<AudioResource>,
    duration: f64,
}

impl SoundDefinition {
    /// Creates a definition with an explicit canonical duration in seconds.
    pub fn new(
        name: impl Into<String>,
        events: Vec<NormalizedEvent>,
        sound_resources: Vec<AudioResource>,
        duration: f64,
    ) -> Result<Self> {
        if !(duration.is_finite() && duration > 0.0) {
            return Err(HapticSyncError::InvalidDuration(duration));
        }

        Ok(Self {
            name: name.into(),
            events,
            sound_resources,
            duration,
        })
    }

    /// Creates a definition whose canonical duration is the `length` of the
    /// first sound resource.
    pub fn anchored(
        name: impl Into<String>,
        events: Vec<NormalizedEvent>,
        sound_resources: Vec<AudioResource>,
    ) -> Result<Self> {
        let name = name.into();
        let duration = match sound_resources.first() {
            Some(anchor) => anchor.length,
            None => return Err(HapticSyncError::MissingDurationAnchor(name)),
        };
        Self::new(name, events, sound_resources, duration)
    }

    /// Presentation name. Not used for identity.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn events(&self) -> &[NormalizedEvent] {
        &self.events
    }

    pub fn sound_resources(&self) -> &[AudioResource] {
        &self.sound_resources
    }

    /// Canonical duration in seconds at rate 1.0.
    pub fn duration(&self) -> f64 {
        self.duration
    }
}

/// On-disk shape of a definition. `duration` may be left out, in which case
/// the first resource anchors it.
#[derive(Debug, Deserialize)]
struct DefinitionFile {
    name: String,
    #[serde(default)]
    events: Vec<NormalizedEvent>,
    #[serde(default)]
    sound_resources: Vec<AudioResource>,
    #[serde(default)]
    duration: Option<f64>,
}

impl TryFrom<DefinitionFile> for SoundDefinition {
    type Error = HapticSyncError;

    fn try_from(file: DefinitionFile) -> Result<Self> {
        match file.duration {
            Some(duration) => Self::new(file.name, file.events, file.sound_resources, duration),
            None => Self::anchored(file.name, file.events, file.sound_resources),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EventGroup;

    #[test]
    fn rejects_non_positive_durations() {
        for duration in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let result = SoundDefinition::new("broken", Vec::new(), Vec::new(), duration);
            assert!(matches!(result, Err(HapticSyncError::InvalidDuration(_))));
        }
    }

    #[test]
    fn anchors_duration_on_first_resource() {
        let definition = SoundDefinition::anchored(
            "door",
            EventGroup::new().transient(1.0, 1.0, 0.0).build(),
            vec![
                AudioResource::new("door.wav", 1.71),
                AudioResource::new("swoosh.flac", 0.58),
            ],
        )
        .unwrap();

        assert_eq!(definition.duration(), 1.71);
        assert_eq!(definition.name(), "door");
        assert_eq!(definition.sound_resources().len(), 2);
    }

    #[test]
    fn anchoring_requires_a_resource() {
        let err = SoundDefinition::anchored("silent", Vec::new(), Vec::new()).unwrap_err();
        assert!(format!("{err}").contains("silent"));
    }

    #[test]
    fn anchoring_rejects_zero_length_resource() {
        let result =
            SoundDefinition::anchored("empty", Vec::new(), vec![AudioResource::new("x.wav", 0.0)]);
        assert!(matches!(result, Err(HapticSyncError::InvalidDuration(_))));
    }

    #[test]
    fn loads_from_json_and_validates() {
        let json = r#"{
            "name": "click",
            "events": [
                { "kind": "transient", "intensity": 1.0, "sharpness": 0.5, "relative_time": 0.1 }
            ],
            "sound_resources": [ { "file_name": "click.wav", "length": 0.2 } ]
        }"#;
        let definition: SoundDefinition = serde_json::from_str(json).unwrap();
        assert_eq!(definition.duration(), 0.2);
        assert_eq!(definition.events().len(), 1);

        let invalid = r#"{ "name": "bad", "duration": 0.0 }"#;
        assert!(serde_json::from_str::<SoundDefinition>(invalid).is_err());
    }
}
