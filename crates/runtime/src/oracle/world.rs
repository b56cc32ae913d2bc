//! Concurrent object registry implementing [`skill_core::WorldResolver`].
use std::sync::Arc;

use dashmap::DashMap;
use skill_core::{Character, ObjectId, WorldResolver};

/// Live characters keyed by object id.
///
/// Lookups clone the `Arc` out of the map, so no shard lock outlives a call.
#[derive(Debug, Default)]
pub struct WorldRegistry {
    objects: DashMap<ObjectId, Arc<Character>>,
}

impl WorldRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a character, returning the shared handle the world now holds.
    pub fn spawn(&self, character: Character) -> Arc<Character> {
        let character = Arc::new(character);
        self.objects.insert(character.id(), Arc::clone(&character));
        character
    }

    pub fn despawn(&self, id: ObjectId) -> Option<Arc<Character>> {
        self.objects.remove(&id).map(|(_, character)| character)
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Snapshot of every character currently in the world.
    pub fn characters(&self) -> Vec<Arc<Character>> {
        self.objects.iter().map(|entry| Arc::clone(entry.value())).collect()
    }
}

impl WorldResolver for WorldRegistry {
    fn resolve(&self, id: ObjectId) -> Option<Arc<Character>> {
        self.objects.get(&id).map(|entry| Arc::clone(entry.value()))
    }
}
