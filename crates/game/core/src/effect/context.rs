use std::sync::Arc;

use crate::combat::CombatFormulas;
use crate::env::EffectEnv;
use crate::state::{Character, ObjectId, SkillKey};

/// Everything a hook needs to act: who cast what on whom, plus collaborators.
///
/// Characters are resolved from the world on every call; either side may have
/// left the world since the effect was created.
#[derive(Clone, Copy, Debug)]
pub struct EffectContext<'a> {
    pub caster: ObjectId,
    pub target: ObjectId,
    pub skill: SkillKey,
    env: &'a EffectEnv,
}

impl<'a> EffectContext<'a> {
    pub fn new(caster: ObjectId, target: ObjectId, skill: SkillKey, env: &'a EffectEnv) -> Self {
        Self {
            caster,
            target,
            skill,
            env,
        }
    }

    pub fn resolve_caster(&self) -> Option<Arc<Character>> {
        self.env.resolve(self.caster)
    }

    pub fn resolve_target(&self) -> Option<Arc<Character>> {
        self.env.resolve(self.target)
    }

    pub fn formulas(&self) -> &'a dyn CombatFormulas {
        self.env.formulas()
    }
}
