//! Skill casting rules and status-effect bookkeeping shared by the runtime.
//!
//! `skill-core` defines the synchronous half of the casting engine: the world
//! objects skills act upon, immutable skill templates, the stat modifier
//! reducer, the [`effect::Effect`] sum type and the per-character
//! [`effect::EffectManager`] that enforces stacking rules. Timing, cooldowns
//! and cancellation live in `skill-runtime`, which depends on the types
//! re-exported here.
pub mod combat;
pub mod config;
pub mod effect;
pub mod env;
pub mod error;
pub mod skill;
pub mod state;
pub mod stats;

#[cfg(test)]
pub(crate) mod testing;

pub use combat::{CombatFormulas, ShotFlags, StandardFormulas};
pub use config::EffectLimits;
pub use effect::{
    ActiveEffect, Effect, EffectBuildError, EffectContext, EffectKind, EffectManager,
    EffectParams, EffectSummary,
};
pub use env::{EffectEnv, SkillTemplateOracle, WorldResolver};
pub use error::{ErrorSeverity, GameError};
pub use skill::{AbnormalState, EffectDefinition, SkillTemplate, TargetType};
pub use state::{
    Character, CharacterBuilder, CharacterKind, CharacterState, CombatStats, ObjectId, Position,
    ResourceShortfall, SkillId, SkillKey, StatusFlags,
};
pub use stats::{ModifierOp, Stat, StatModifier};
