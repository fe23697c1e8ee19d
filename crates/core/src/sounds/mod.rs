//! Library of the audio assets referenced by the built-in presets.
//!
//! Lengths are the nominal durations of the files at rate 1.0 and anchor the
//! canonical duration of the definitions that use them.

use crate::AudioResource;

pub mod door {
    use super::AudioResource;

    /// Heavy metal hydraulic sliding door, opening.
    pub fn hydraulic_sliding_opening() -> AudioResource {
        AudioResource::new("sounds/hydraulic/hydraulic1.wav", 1.71)
    }

    /// Heavy metal hydraulic sliding door, closing.
    pub fn hydraulic_sliding_closing() -> AudioResource {
        AudioResource::new("sounds/hydraulic/hydraulic2.wav", 1.58)
    }
}

pub mod weapons {
    use super::AudioResource;

    pub fn gun_cocking_long() -> AudioResource {
        AudioResource::new("sounds/weapons/cocking1.wav", 1.02)
    }

    pub fn gun_cocking_short() -> AudioResource {
        AudioResource::new("sounds/weapons/cocking2.wav", 0.79)
    }
}

pub mod effects {
    use super::AudioResource;

    pub fn swoosh_short() -> AudioResource {
        AudioResource::new("sounds/effects/swoosh.flac", 0.58)
    }
}

/// Every asset in the library.
pub fn all() -> Vec<AudioResource> {
    vec![
        door::hydraulic_sliding_opening(),
        door::hydraulic_sliding_closing(),
        weapons::gun_cocking_long(),
        weapons::gun_cocking_short(),
        effects::swoosh_short(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_asset_can_anchor_a_duration() {
        for resource in all() {
            assert!(resource.length > 0.0, "{} has no length", resource.file_name);
            assert!(!resource.extension().is_empty());
        }
    }
}
