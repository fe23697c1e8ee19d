use std::{
    fmt,
    hash::{Hash, Hasher},
    sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    project_definition, AudioResource, ConcreteEvent, HapticSyncError, PlaybackRate, Projection,
    Result, SoundDefinition,
};

/// Process-unique identity of a [`SynchronizedSound`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SoundId(Uuid);

impl SoundId {
    /// Creates a new, random (version 4) identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SoundId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SoundId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Combines haptics and sound into one synchronised entity.
///
/// Wraps a [`SoundDefinition`] together with a playback rate and keeps the
/// projected events and resources in step with that rate. Changing the rate
/// recomputes the whole projection before it is swapped in, so readers only
/// ever see a projection matching [`rate`](Self::rate).
///
/// Two instances are equal only if they are the same instance: identity is
/// assigned at construction and never derived from content.
#[derive(Debug, Clone)]
pub struct SynchronizedSound {
    id: SoundId,
    definition: Arc<SoundDefinition>,
    projection: Projection,
}

impl SynchronizedSound {
    pub fn new(definition: impl Into<Arc<SoundDefinition>>, rate: PlaybackRate) -> Self {
        let definition = definition.into();
        let projection = project_definition(&definition, rate);
        Self {
            id: SoundId::new(),
            definition,
            projection,
        }
    }

    pub fn id(&self) -> SoundId {
        self.id
    }

    pub fn name(&self) -> &str {
        self.definition.name()
    }

    pub fn definition(&self) -> &SoundDefinition {
        &self.definition
    }

    pub fn rate(&self) -> PlaybackRate {
        self.projection.rate
    }

    /// Changes the playback rate and recomputes the projection.
    pub fn set_rate(&mut self, rate: PlaybackRate) {
        tracing::debug!(sound = %self.id, name = self.name(), %rate, "recalculating timings");
        self.projection = project_definition(&self.definition, rate);
    }

    /// Validates a raw rate and applies it. On error nothing changes.
    pub fn try_set_rate(&mut self, rate: f64) -> Result<()> {
        let rate = PlaybackRate::new(rate)?;
        self.set_rate(rate);
        Ok(())
    }

    /// Haptic events projected for the current rate.
    pub fn events(&self) -> &[ConcreteEvent] {
        &self.projection.events
    }

    /// Sound resources with their rate adjusted for the current rate.
    pub fn resources(&self) -> &[AudioResource] {
        &self.projection.resources
    }

    pub fn projection(&self) -> &Projection {
        &self.projection
    }
}

impl PartialEq for SynchronizedSound {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for SynchronizedSound {}

impl Hash for SynchronizedSound {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Thread-safe handle over a [`SynchronizedSound`].
///
/// A control thread can change the rate while playback code on another
/// thread takes snapshots; the write lock makes each rate change visible as
/// a whole.
#[derive(Clone)]
pub struct SharedSound {
    shared: Arc<RwLock<SynchronizedSound>>,
}

impl SharedSound {
    pub fn new(sound: SynchronizedSound) -> Self {
        Self {
            shared: Arc::new(RwLock::new(sound)),
        }
    }

    pub fn set_rate(&self, rate: PlaybackRate) -> Result<()> {
        self.write()?.set_rate(rate);
        Ok(())
    }

    pub fn rate(&self) -> Result<PlaybackRate> {
        Ok(self.read()?.rate())
    }

    /// Copies the current projection out of the lock.
    pub fn snapshot(&self) -> Result<Projection> {
        Ok(self.read()?.projection().clone())
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, SynchronizedSound>> {
        self.shared
            .read()
            .map_err(|_| HapticSyncError::msg("synchronized sound has been poisoned"))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, SynchronizedSound>> {
        self.shared
            .write()
            .map_err(|_| HapticSyncError::msg("synchronized sound has been poisoned"))
    }
}

impl fmt::Debug for SharedSound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedSound").finish()
    }
}
