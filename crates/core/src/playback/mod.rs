//! Hand-off of projected sounds to the audio and haptic backends.
//!
//! The backends are collaborators: they own their engines, threads and error
//! reporting. The core calls them fire-and-forget and never observes a
//! result.

use std::sync::Arc;

use crate::{AudioResource, ConcreteEvent, Projection, SynchronizedSound};

/// Backend able to start playback of one audio resource.
pub trait AudioSink: Send + Sync {
    /// Starts playing `resource` after `delay_seconds`. Returns immediately.
    fn play(&self, resource: &AudioResource, delay_seconds: f64);
}

/// Backend able to start a haptic pattern.
pub trait HapticSink: Send + Sync {
    /// Starts a pattern made of `events` at time zero. Returns immediately.
    fn play_pattern(&self, events: &[ConcreteEvent]);
}

impl<T: AudioSink + ?Sized> AudioSink for Arc<T> {
    fn play(&self, resource: &AudioResource, delay_seconds: f64) {
        (**self).play(resource, delay_seconds)
    }
}

impl<T: HapticSink + ?Sized> HapticSink for Arc<T> {
    fn play_pattern(&self, events: &[ConcreteEvent]) {
        (**self).play_pattern(events)
    }
}

/// Dispatches synchronised sounds to injected backends.
pub struct Player {
    audio: Box<dyn AudioSink>,
    haptics: Box<dyn HapticSink>,
    schedule_resource_offsets: bool,
}

impl Player {
    pub fn new(audio: impl AudioSink + 'static, haptics: impl HapticSink + 'static) -> Self {
        Self {
            audio: Box::new(audio),
            haptics: Box::new(haptics),
            schedule_resource_offsets: true,
        }
    }

    /// When disabled every resource starts together with the haptic pattern,
    /// ignoring its `relative_time`.
    pub fn with_resource_offsets(mut self, enabled: bool) -> Self {
        self.schedule_resource_offsets = enabled;
        self
    }

    pub fn play(&self, sound: &SynchronizedSound) {
        tracing::debug!(sound = %sound.id(), name = sound.name(), rate = %sound.rate(), "playing");
        self.play_projection(sound.projection());
    }

    pub fn play_projection(&self, projection: &Projection) {
        if !projection.events.is_empty() {
            self.haptics.play_pattern(&projection.events);
        }

        for (index, resource) in projection.resources.iter().enumerate() {
            let delay = if self.schedule_resource_offsets {
                projection.resource_start_seconds(index).unwrap_or(0.0)
            } else {
                0.0
            };
            self.audio.play(resource, delay);
        }
    }
}

impl std::fmt::Debug for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Player")
            .field("schedule_resource_offsets", &self.schedule_resource_offsets)
            .finish()
    }
}

/// Audio backend that only logs what it would play.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingAudioSink;

impl AudioSink for TracingAudioSink {
    fn play(&self, resource: &AudioResource, delay_seconds: f64) {
        tracing::info!(
            file = resource.name(),
            ext = resource.extension(),
            volume = resource.volume,
            pitch = resource.pitch,
            rate = resource.rate,
            delay_seconds,
            "audio"
        );
    }
}

/// Haptic backend that only logs the pattern it receives.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingHapticSink;

impl HapticSink for TracingHapticSink {
    fn play_pattern(&self, events: &[ConcreteEvent]) {
        for event in events {
            tracing::info!(
                kind = ?event.kind,
                intensity = event.intensity,
                sharpness = event.sharpness,
                time_seconds = event.time_seconds,
                duration_seconds = event.duration_seconds,
                "haptic"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::{PlaybackRate, SoundDefinition};

    #[derive(Default)]
    struct Recorder {
        audio: Mutex<Vec<(AudioResource, f64)>>,
        patterns: Mutex<Vec<Vec<ConcreteEvent>>>,
    }

    impl AudioSink for Recorder {
        fn play(&self, resource: &AudioResource, delay_seconds: f64) {
            self.audio
                .lock()
                .unwrap()
                .push((resource.clone(), delay_seconds));
        }
    }

    impl HapticSink for Recorder {
        fn play_pattern(&self, events: &[ConcreteEvent]) {
            self.patterns.lock().unwrap().push(events.to_vec());
        }
    }

    fn sound(rate: f64) -> SynchronizedSound {
        let definition = SoundDefinition::new(
            "layered",
            crate::EventGroup::new()
                .transient(1.0, 1.0, 0.5)
                .continuous(0.4, 0.2, 0.0, 0.5)
                .build(),
            vec![
                AudioResource::new("a.wav", 2.0),
                AudioResource::new("b.wav", 1.0).with_relative_time(0.5),
            ],
            2.0,
        )
        .unwrap();
        SynchronizedSound::new(definition, PlaybackRate::new(rate).unwrap())
    }

    #[test]
    fn hands_projection_to_both_sinks() {
        let recorder = Arc::new(Recorder::default());
        let player = Player::new(recorder.clone(), recorder.clone());
        let sound = sound(2.0);

        player.play(&sound);

        let patterns = recorder.patterns.lock().unwrap();
        assert_eq!(patterns.len(), 1);
        assert_eq!(patterns[0], sound.events());

        let audio = recorder.audio.lock().unwrap();
        assert_eq!(audio.len(), 2);
        assert_eq!(audio[0].0.rate, 2.0);
        assert_eq!(audio[0].1, 0.0);
        assert_eq!(audio[1].1, 0.5);
    }

    #[test]
    fn offsets_can_be_disabled() {
        let recorder = Arc::new(Recorder::default());
        let player = Player::new(recorder.clone(), recorder.clone()).with_resource_offsets(false);

        player.play(&sound(1.0));

        let audio = recorder.audio.lock().unwrap();
        assert!(audio.iter().all(|(_, delay)| *delay == 0.0));
    }
}
