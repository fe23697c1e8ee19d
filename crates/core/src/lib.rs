//! Core library for synchronising short sound effects with haptic feedback.
//!
//! Haptic events are authored in a normalised (0-1) time space relative to
//! the canonical duration of a [`SoundDefinition`]. A [`SynchronizedSound`]
//! projects that space into wall-clock seconds for its current
//! [`PlaybackRate`] and scales the playback rate of every audio resource by
//! the same factor, so the sound and the haptic pattern stay in sync at any
//! speed. Actual audio and haptic output is delegated to the collaborators
//! in [`playback`].

pub mod catalog;
pub mod config;
pub mod definition;
pub mod error;
pub mod event;
pub mod playback;
pub mod projection;
pub mod rate;
pub mod resource;
pub mod sound;
pub mod sounds;
pub mod timeline;

pub use catalog::{Preset, SoundGenerator};
pub use config::{AppConfig, PlaybackConfig};
pub use definition::SoundDefinition;
pub use error::{HapticSyncError, Result};
pub use event::{ConcreteEvent, EventGroup, HapticEventKind, NormalizedEvent};
pub use playback::{AudioSink, HapticSink, Player, TracingAudioSink, TracingHapticSink};
pub use projection::{
    project_definition, project_event, project_resource, Projection, DEFAULT_NORMALIZED_DURATION,
};
pub use rate::PlaybackRate;
pub use resource::AudioResource;
pub use sound::{SharedSound, SoundId, SynchronizedSound};
pub use timeline::{Cue, PlaybackClock, Scheduler, Timeline, TimelineEntry};
