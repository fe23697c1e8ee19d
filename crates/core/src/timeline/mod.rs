use serde::{Deserialize, Serialize};

use crate::{HapticEventKind, Projection};

#[derive(Debug, Default, Clone)]
pub struct PlaybackClock {
    pub time_seconds: f64,
}

impl PlaybackClock {
    pub fn reset(&mut self) {
        self.time_seconds = 0.0;
    }

    pub fn advance(&mut self, delta: f64) {
        self.time_seconds = (self.time_seconds + delta).max(0.0);
    }
}

/// What a [`TimelineEntry`] triggers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Cue {
    Haptic {
        kind: HapticEventKind,
        intensity: f32,
        sharpness: f32,
        duration_seconds: f64,
    },
    Audio {
        file_name: String,
        rate: f64,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineEntry {
    pub time_seconds: f64,
    pub cue: Cue,
}

/// Time-ordered view of a [`Projection`], merging haptic events and audio
/// starts. Entries with equal times keep their projection order.
#[derive(Debug, Default, Clone, Serialize)]
pub struct Timeline {
    entries: Vec<TimelineEntry>,
    total_seconds: f64,
}

impl Timeline {
    pub fn from_projection(projection: &Projection) -> Self {
        let haptics = projection.events.iter().map(|event| TimelineEntry {
            time_seconds: event.time_seconds,
            cue: Cue::Haptic {
                kind: event.kind,
                intensity: event.intensity,
                sharpness: event.sharpness,
                duration_seconds: event.duration_seconds,
            },
        });
        let audio = projection
            .resources
            .iter()
            .enumerate()
            .map(|(index, resource)| TimelineEntry {
                time_seconds: projection.resource_start_seconds(index).unwrap_or(0.0),
                cue: Cue::Audio {
                    file_name: resource.file_name.clone(),
                    rate: resource.rate,
                },
            });

        let mut entries: Vec<TimelineEntry> = haptics.chain(audio).collect();
        entries.sort_by(|a, b| a.time_seconds.total_cmp(&b.time_seconds));

        Self {
            entries,
            total_seconds: projection.total_seconds(),
        }
    }

    pub fn entries(&self) -> &[TimelineEntry] {
        &self.entries
    }

    pub fn total_seconds(&self) -> f64 {
        self.total_seconds
    }
}

/// Steps through a [`Timeline`] as a [`PlaybackClock`] advances.
#[derive(Debug, Default)]
pub struct Scheduler {
    timeline: Timeline,
    next_entry: usize,
}

impl Scheduler {
    pub fn new(timeline: Timeline) -> Self {
        Self {
            timeline,
            next_entry: 0,
        }
    }

    /// Returns the entries that became due since the previous call.
    pub fn tick(&mut self, clock: &PlaybackClock) -> &[TimelineEntry] {
        let start = self.next_entry;
        while let Some(entry) = self.timeline.entries.get(self.next_entry) {
            if clock.time_seconds < entry.time_seconds {
                break;
            }
            self.next_entry += 1;
        }
        &self.timeline.entries[start..self.next_entry]
    }

    pub fn is_finished(&self) -> bool {
        self.next_entry >= self.timeline.entries.len()
    }

    pub fn rewind(&mut self) {
        self.next_entry = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{project_definition, AudioResource, EventGroup, PlaybackRate, SoundDefinition};

    fn projection() -> Projection {
        let definition = SoundDefinition::new(
            "timeline",
            EventGroup::new()
                .transient(1.0, 1.0, 0.6)
                .continuous(0.5, 0.3, 0.0, 1.0)
                .transient(0.7, 0.1, 0.2)
                .build(),
            vec![AudioResource::new("late.wav", 1.0).with_relative_time(0.5)],
            1.0,
        )
        .unwrap();
        project_definition(&definition, PlaybackRate::new(2.0).unwrap())
    }

    #[test]
    fn entries_are_sorted_by_time() {
        let timeline = Timeline::from_projection(&projection());
        let times: Vec<f64> = timeline.entries().iter().map(|e| e.time_seconds).collect();
        assert_eq!(times, vec![0.0, 0.1, 0.25, 0.3]);
        assert!(matches!(timeline.entries()[2].cue, Cue::Audio { .. }));
        assert_eq!(timeline.total_seconds(), 0.5);
    }

    #[test]
    fn scheduler_releases_entries_once() {
        let mut scheduler = Scheduler::new(Timeline::from_projection(&projection()));
        let mut clock = PlaybackClock::default();

        assert_eq!(scheduler.tick(&clock).len(), 1);
        assert!(scheduler.tick(&clock).is_empty());

        clock.advance(0.25);
        assert_eq!(scheduler.tick(&clock).len(), 2);

        clock.advance(1.0);
        assert_eq!(scheduler.tick(&clock).len(), 1);
        assert!(scheduler.is_finished());

        scheduler.rewind();
        clock.reset();
        assert_eq!(scheduler.tick(&clock).len(), 1);
    }

    #[test]
    fn clock_never_goes_negative() {
        let mut clock = PlaybackClock::default();
        clock.advance(-1.0);
        assert_eq!(clock.time_seconds, 0.0);
    }
}
