//! Shared fixtures for unit tests.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use parking_lot::RwLock;

use crate::combat::StandardFormulas;
use crate::effect::{ActiveEffect, Effect, EffectContext, EffectKind, EffectParams};
use crate::env::{EffectEnv, WorldResolver};
use crate::state::{Character, CharacterKind, ObjectId, SkillId, SkillKey};

#[derive(Default)]
pub struct TestWorld {
    objects: RwLock<HashMap<ObjectId, Arc<Character>>>,
    lookups: AtomicUsize,
}

impl TestWorld {
    pub fn insert(&self, character: Character) -> Arc<Character> {
        let character = Arc::new(character);
        self.objects
            .write()
            .insert(character.id(), Arc::clone(&character));
        character
    }

    pub fn remove(&self, id: ObjectId) {
        self.objects.write().remove(&id);
    }

    /// Number of `resolve` calls so far. Every control hook resolves its
    /// target exactly once.
    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::Relaxed)
    }
}

impl WorldResolver for TestWorld {
    fn resolve(&self, id: ObjectId) -> Option<Arc<Character>> {
        self.lookups.fetch_add(1, Ordering::Relaxed);
        self.objects.read().get(&id).cloned()
    }
}

/// World handle plus the env built on it; keep `world` alive for the test.
pub struct Fixture {
    pub world: Arc<TestWorld>,
    pub env: EffectEnv,
}

impl Fixture {
    pub fn new() -> Self {
        let world = Arc::new(TestWorld::default());
        let resolver: Arc<dyn WorldResolver> = world.clone();
        let env = EffectEnv::new(&resolver, Arc::new(StandardFormulas));
        Self { world, env }
    }

    pub fn spawn(&self, id: u32, kind: CharacterKind) -> Arc<Character> {
        self.world
            .insert(Character::builder(ObjectId(id), kind).build())
    }

    pub fn spawn_with(&self, character: Character) -> Arc<Character> {
        self.world.insert(character)
    }

    pub fn context(&self, caster: &Character, target: &Character) -> EffectContext<'_> {
        EffectContext::new(caster.id(), target.id(), skill(), &self.env)
    }

    /// Continuous effect from `caster` to `target` with an abnormal descriptor.
    pub fn active(
        &self,
        caster: &Character,
        target: &Character,
        effect: Effect,
        duration_ms: i64,
        abnormal_type: &str,
        abnormal_level: i32,
    ) -> ActiveEffect {
        ActiveEffect::new(caster.id(), target.id(), skill(), effect, self.env.clone())
            .with_duration(duration_ms)
            .with_abnormal(abnormal_type, abnormal_level)
    }
}

pub fn skill() -> SkillKey {
    SkillKey::new(SkillId(1), 1)
}

pub fn build(kind: EffectKind, pairs: &[(&str, &str)]) -> Effect {
    Effect::build(kind, &EffectParams::from_pairs(pairs.iter().copied()))
}
