//! Timing projection.
//!
//! Sound definitions store their haptic events in a normalised time space
//! that does not depend on playback speed. The functions here project that
//! space into wall-clock seconds for a concrete [`PlaybackRate`], and scale
//! the playback rate of every audio resource by the same factor so that
//! sound and haptics stay in sync.
//!
//! Everything in this module is pure: the same definition and rate always
//! produce identical output.

use serde::Serialize;

use crate::{AudioResource, ConcreteEvent, NormalizedEvent, PlaybackRate, SoundDefinition};

/// Normalised duration substituted for continuous events without one.
pub const DEFAULT_NORMALIZED_DURATION: f64 = 1.0;

/// Projected (denormalised) state of a definition at a given rate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Projection {
    pub rate: PlaybackRate,
    /// Canonical duration of the source definition, in seconds at rate 1.0.
    pub canonical_duration: f64,
    pub events: Vec<ConcreteEvent>,
    pub resources: Vec<AudioResource>,
}

impl Projection {
    /// Wall-clock length of the whole effect at this rate.
    pub fn total_seconds(&self) -> f64 {
        self.rate.scale_time(self.canonical_duration)
    }

    /// Start offset in seconds of the resource at `index`.
    ///
    /// Projection keeps each resource's `relative_time` normalised; this
    /// denormalises it against the canonical duration and the rate.
    pub fn resource_start_seconds(&self, index: usize) -> Option<f64> {
        self.resources
            .get(index)
            .map(|resource| self.rate.scale_time(resource.relative_time * self.canonical_duration))
    }
}

/// Projects one normalised event into seconds.
///
/// The start time is `relative_time / rate`. The duration is first scaled by
/// `canonical_duration` and then divided by the rate. A continuous event
/// without a duration uses [`DEFAULT_NORMALIZED_DURATION`] and logs a warning.
pub fn project_event(
    event: &NormalizedEvent,
    rate: PlaybackRate,
    canonical_duration: f64,
) -> ConcreteEvent {
    if event.is_missing_duration() {
        tracing::warn!(
            relative_time = event.relative_time,
            "continuous haptic event has no duration, using {DEFAULT_NORMALIZED_DURATION}"
        );
    }
    denormalize(event, rate, canonical_duration)
}

fn denormalize(
    event: &NormalizedEvent,
    rate: PlaybackRate,
    canonical_duration: f64,
) -> ConcreteEvent {
    let normalized_duration = event.duration.unwrap_or(DEFAULT_NORMALIZED_DURATION);

    ConcreteEvent {
        kind: event.kind,
        intensity: event.intensity,
        sharpness: event.sharpness,
        time_seconds: rate.scale_time(event.relative_time),
        duration_seconds: rate.scale_time(normalized_duration * canonical_duration),
    }
}

/// Returns a copy of `resource` with its playback rate multiplied by `rate`.
pub fn project_resource(resource: &AudioResource, rate: PlaybackRate) -> AudioResource {
    AudioResource {
        rate: resource.rate * rate.get(),
        ..resource.clone()
    }
}

/// Projects every event and resource of `definition` at `rate`.
pub fn project_definition(definition: &SoundDefinition, rate: PlaybackRate) -> Projection {
    let _span = tracing::debug_span!("project", definition = definition.name(), %rate).entered();
    let canonical_duration = definition.duration();

    let events = definition
        .events()
        .iter()
        .enumerate()
        .map(|(index, event)| {
            if event.is_missing_duration() {
                tracing::warn!(
                    definition = definition.name(),
                    index,
                    relative_time = event.relative_time,
                    "continuous haptic event has no duration, using {DEFAULT_NORMALIZED_DURATION}"
                );
            }
            denormalize(event, rate, canonical_duration)
        })
        .collect();

    Projection {
        rate,
        canonical_duration,
        events,
        resources: definition
            .sound_resources()
            .iter()
            .map(|resource| project_resource(resource, rate))
            .collect(),
    }
}
