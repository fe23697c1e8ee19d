use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    sounds, EventGroup, HapticSyncError, PlaybackRate, Result, SoundDefinition, SynchronizedSound,
};

/// Closed set of hand-authored haptic sound effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Preset {
    /// A long industrial hydraulic door opening.
    HydraulicDoorOpen,
    /// A long industrial hydraulic door closing.
    HydraulicDoorClose,
    /// A swoosh followed by a gun being cocked.
    WeaponItemSelected,
}

impl Preset {
    pub const ALL: [Preset; 3] = [
        Preset::HydraulicDoorOpen,
        Preset::HydraulicDoorClose,
        Preset::WeaponItemSelected,
    ];

    /// Kebab-case identifier used on the command line and in files.
    pub fn as_str(self) -> &'static str {
        match self {
            Preset::HydraulicDoorOpen => "hydraulic-door-open",
            Preset::HydraulicDoorClose => "hydraulic-door-close",
            Preset::WeaponItemSelected => "weapon-item-selected",
        }
    }

    /// Builds the definition for this preset.
    pub fn definition(self) -> Result<SoundDefinition> {
        match self {
            Preset::HydraulicDoorOpen => hydraulic_door_open(),
            Preset::HydraulicDoorClose => hydraulic_door_close(),
            Preset::WeaponItemSelected => weapon_item_selected(),
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Preset {
    type Err = HapticSyncError;

    fn from_str(s: &str) -> Result<Self> {
        Preset::ALL
            .into_iter()
            .find(|preset| preset.as_str() == s)
            .ok_or_else(|| HapticSyncError::UnknownPreset(s.to_string()))
    }
}

fn hydraulic_door_open() -> Result<SoundDefinition> {
    let events = EventGroup::new()
        .transient(1.0, 1.0, 0.0)
        .continuous(0.5, 0.3, 0.0, 1.0)
        .transient(1.0, 1.0, 0.6)
        .build();
    SoundDefinition::anchored(
        "HydraulicDoorOpen",
        events,
        vec![sounds::door::hydraulic_sliding_opening()],
    )
}

fn hydraulic_door_close() -> Result<SoundDefinition> {
    let events = EventGroup::new()
        .transient(0.7, 0.3, 0.02)
        .continuous(0.5, 0.5, 0.0, 1.0)
        .transient(0.7, 0.1, 0.9)
        .build();
    SoundDefinition::anchored(
        "HydraulicDoorClose",
        events,
        vec![sounds::door::hydraulic_sliding_closing()],
    )
}

fn weapon_item_selected() -> Result<SoundDefinition> {
    let events = EventGroup::new()
        .transient(0.7, 0.7, 0.04)
        .continuous(0.4, 0.2, 0.0, 0.5)
        .transient(1.0, 1.0, 0.25)
        .build();
    // cocking sound anchors the duration
    SoundDefinition::anchored(
        "WeaponItemSelected",
        events,
        vec![
            sounds::weapons::gun_cocking_short(),
            sounds::effects::swoosh_short(),
        ],
    )
}

/// Produces [`SynchronizedSound`] instances for presets.
#[derive(Debug, Default, Clone, Copy)]
pub struct SoundGenerator;

impl SoundGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Builds the preset's definition and wraps it in a new instance.
    pub fn generate(&self, preset: Preset, rate: PlaybackRate) -> Result<SynchronizedSound> {
        let definition = preset.definition()?;
        let sound = SynchronizedSound::new(definition, rate);
        tracing::debug!(%preset, %rate, sound = %sound.id(), "generated haptic sound");
        Ok(sound)
    }

    /// Same as [`generate`](Self::generate) for an unvalidated rate.
    pub fn generate_with_rate(&self, preset: Preset, rate: f64) -> Result<SynchronizedSound> {
        self.generate(preset, PlaybackRate::new(rate)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_preset_generates_at_normal_rate() {
        let generator = SoundGenerator::new();
        for preset in Preset::ALL {
            let sound = generator
                .generate(preset, PlaybackRate::NORMAL)
                .unwrap_or_else(|err| panic!("{preset} failed: {err}"));
            assert_eq!(sound.events().len(), sound.definition().events().len());
            assert!(!sound.resources().is_empty());
        }
    }

    #[test]
    fn names_round_trip_through_from_str() {
        for preset in Preset::ALL {
            assert_eq!(preset.to_string().parse::<Preset>().unwrap(), preset);
        }
        let err = "laser".parse::<Preset>().unwrap_err();
        assert!(matches!(err, HapticSyncError::UnknownPreset(name) if name == "laser"));
    }

    #[test]
    fn zero_rate_is_refused() {
        let result = SoundGenerator::new().generate_with_rate(Preset::HydraulicDoorOpen, 0.0);
        assert!(matches!(result, Err(HapticSyncError::InvalidRate(_))));
    }

    #[test]
    fn presets_are_anchored_on_their_first_sound() {
        let weapon = Preset::WeaponItemSelected.definition().unwrap();
        assert_eq!(weapon.duration(), 0.79);
        assert_eq!(weapon.sound_resources().len(), 2);

        let door = Preset::HydraulicDoorOpen.definition().unwrap();
        assert_eq!(door.duration(), 1.71);
        assert_eq!(door.name(), "HydraulicDoorOpen");
    }

    #[test]
    fn generated_instances_are_distinct() {
        let generator = SoundGenerator::new();
        let a = generator.generate(Preset::HydraulicDoorClose, PlaybackRate::NORMAL).unwrap();
        let b = generator.generate(Preset::HydraulicDoorClose, PlaybackRate::NORMAL).unwrap();
        assert_ne!(a, b);
        assert_eq!(a.projection(), b.projection());
    }
}
