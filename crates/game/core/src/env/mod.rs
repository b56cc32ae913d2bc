//! Collaborator traits consumed by the casting engine.
//!
//! Templates and world lookup are owned by other subsystems. The engine only
//! sees them through these traits, injected at construction time, and the
//! [`EffectEnv`] bundle hands them to effect hooks.
mod skills;
mod world;

use std::sync::{Arc, Weak};

use crate::combat::CombatFormulas;
use crate::state::{Character, ObjectId};

pub use skills::SkillTemplateOracle;
pub use world::WorldResolver;

/// Collaborators available to effect hooks.
///
/// The world is held weakly (characters own their effects, the world owns the
/// characters). Once it is dropped every resolution fails and hooks degrade
/// to no-ops.
#[derive(Clone)]
pub struct EffectEnv {
    world: Weak<dyn WorldResolver>,
    formulas: Arc<dyn CombatFormulas>,
}

impl EffectEnv {
    pub fn new(world: &Arc<dyn WorldResolver>, formulas: Arc<dyn CombatFormulas>) -> Self {
        Self {
            world: Arc::downgrade(world),
            formulas,
        }
    }

    /// Looks up a live object in the world.
    pub fn resolve(&self, id: ObjectId) -> Option<Arc<Character>> {
        self.world.upgrade()?.resolve(id)
    }

    pub fn formulas(&self) -> &dyn CombatFormulas {
        self.formulas.as_ref()
    }
}

impl std::fmt::Debug for EffectEnv {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EffectEnv")
            .field("world_alive", &(self.world.strong_count() > 0))
            .finish_non_exhaustive()
    }
}
