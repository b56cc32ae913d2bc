//! Live effect bindings held by an [`super::EffectManager`].

use crate::env::EffectEnv;
use crate::state::{ObjectId, SkillKey};
use crate::stats::StatModifier;

use super::context::EffectContext;
use super::kinds::{Effect, EffectKind};

/// One effect applied by `caster` to `target` through `skill`, counting down
/// its remaining duration.
#[derive(Clone, Debug)]
pub struct ActiveEffect {
    caster: ObjectId,
    target: ObjectId,
    skill: SkillKey,
    effect: Effect,
    remaining_ms: i64,
    abnormal_type: String,
    abnormal_level: i32,
    env: EffectEnv,
}

impl ActiveEffect {
    pub fn new(
        caster: ObjectId,
        target: ObjectId,
        skill: SkillKey,
        effect: Effect,
        env: EffectEnv,
    ) -> Self {
        Self {
            caster,
            target,
            skill,
            effect,
            remaining_ms: 0,
            abnormal_type: String::new(),
            abnormal_level: 0,
            env,
        }
    }

    pub fn with_duration(mut self, duration_ms: i64) -> Self {
        self.remaining_ms = duration_ms;
        self
    }

    pub fn with_abnormal(mut self, abnormal_type: impl Into<String>, level: i32) -> Self {
        self.abnormal_type = abnormal_type.into();
        self.abnormal_level = level;
        self
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn caster(&self) -> ObjectId {
        self.caster
    }

    pub fn target(&self) -> ObjectId {
        self.target
    }

    pub fn skill(&self) -> SkillKey {
        self.skill
    }

    pub fn effect(&self) -> &Effect {
        &self.effect
    }

    pub fn kind(&self) -> EffectKind {
        self.effect.kind()
    }

    pub fn remaining_ms(&self) -> i64 {
        self.remaining_ms
    }

    pub fn set_remaining_ms(&mut self, remaining_ms: i64) {
        self.remaining_ms = remaining_ms;
    }

    pub fn abnormal_type(&self) -> &str {
        &self.abnormal_type
    }

    pub fn abnormal_level(&self) -> i32 {
        self.abnormal_level
    }

    pub fn modifiers(&self) -> &[StatModifier] {
        self.effect.modifiers()
    }

    // ========================================================================
    // Hooks
    // ========================================================================

    fn context(&self) -> EffectContext<'_> {
        EffectContext::new(self.caster, self.target, self.skill, &self.env)
    }

    pub fn start(&self) {
        self.effect.on_start(&self.context());
    }

    pub fn exit(&self) {
        self.effect.on_exit(&self.context());
    }

    /// Runs the periodic hook; `false` means the effect asked to stop.
    pub fn tick(&self) -> bool {
        self.effect.on_tick(&self.context())
    }

    /// Subtracts `delta_ms` and reports whether the effect has run out.
    pub fn decay(&mut self, delta_ms: i64) -> bool {
        self.remaining_ms = self.remaining_ms.saturating_sub(delta_ms);
        self.remaining_ms <= 0
    }

    pub fn summary(&self) -> EffectSummary {
        EffectSummary {
            kind: self.kind(),
            skill: self.skill,
            caster: self.caster,
            remaining_ms: self.remaining_ms,
            abnormal_type: self.abnormal_type.clone(),
            abnormal_level: self.abnormal_level,
        }
    }
}

/// Read-only view of an active effect for state sync and diagnostics.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EffectSummary {
    pub kind: EffectKind,
    pub skill: SkillKey,
    pub caster: ObjectId,
    pub remaining_ms: i64,
    pub abnormal_type: String,
    pub abnormal_level: i32,
}
