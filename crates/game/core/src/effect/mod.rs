//! Effect system.
//!
//! A skill's effect list is turned into [`Effect`] values by [`Effect::from_definition`].
//! Instant effects run their start hook once and are dropped;
//! continuous ones are bound to a (caster, target, skill) triple as an
//! [`ActiveEffect`] and handed to the target's [`EffectManager`].
//!
//! ```text
//! EffectDefinition ──factory──▶ Effect ──instant──▶ on_start, done
//!                                  │
//!                                  └─continuous──▶ ActiveEffect ──▶ EffectManager
//!                                                                     │ tick(Δ)
//!                                                                     ▼
//!                                                           on_tick / decay / on_exit
//! ```
mod active;
mod context;
mod control;
mod damage;
mod delegated;
mod factory;
mod kinds;
mod manager;
mod params;
mod periodic;
mod resource;
mod stat;

pub use active::{ActiveEffect, EffectSummary};
pub use context::EffectContext;
pub use control::{CancelTargetEffect, ControlEffect};
pub use damage::{DamageEffect, DamageSchool};
pub use delegated::{
    AbsorbMpEffect, CubicEffect, DispelEffect, NegateEffect, ResurrectEffect, SummonEffect,
    TeleportEffect, TransformEffect,
};
pub use factory::EffectBuildError;
pub use kinds::{Effect, EffectKind};
pub use manager::EffectManager;
pub use params::EffectParams;
pub use periodic::{DamageOverTimeEffect, HealOverTimeEffect};
pub use resource::{HealEffect, HpDrainEffect, MpHealEffect};
pub use stat::StatEffect;
