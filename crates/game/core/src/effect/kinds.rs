//! Effect kind enum and dispatcher.
//!
//! [`EffectKind`] is the fixed enumeration of effect names template data may
//! use. [`Effect`] wraps the concrete effect structs and dispatches hooks to
//! them with static `match` dispatch.

use crate::stats::StatModifier;

use super::context::EffectContext;
use super::control::{CancelTargetEffect, ControlEffect};
use super::damage::DamageEffect;
use super::delegated::{
    AbsorbMpEffect, CubicEffect, DispelEffect, NegateEffect, ResurrectEffect, SummonEffect,
    TeleportEffect, TransformEffect,
};
use super::periodic::{DamageOverTimeEffect, HealOverTimeEffect};
use super::resource::{HealEffect, HpDrainEffect, MpHealEffect};
use super::stat::StatEffect;

/// Every effect name the factory understands.
///
/// Names are matched case-insensitively against template data.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::IntoStaticStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum EffectKind {
    // ========================================================================
    // Damage
    // ========================================================================
    PhysicalDamage,
    MagicalDamage,
    HpDrain,
    DamageOverTime,

    // ========================================================================
    // Restoration
    // ========================================================================
    Heal,
    MpHeal,
    HealOverTime,

    // ========================================================================
    // Crowd Control
    // ========================================================================
    Stun,
    Root,
    Paralyze,
    Sleep,
    #[strum(to_string = "Fear", serialize = "Hold")]
    Fear,
    CancelTarget,

    // ========================================================================
    // Stat Modification
    // ========================================================================
    Buff,
    StatUp,
    SpeedChange,
    Reflect,

    // ========================================================================
    // Delegated to the orchestrating layer
    // ========================================================================
    Cubic,
    Summon,
    Teleport,
    Transform,
    Resurrect,
    Dispel,
    Negate,
    AbsorbMp,
}

impl EffectKind {
    /// Beneficial effects land in the buff collection, everything else in
    /// the debuff collection.
    pub const fn is_beneficial(self) -> bool {
        matches!(
            self,
            Self::Buff
                | Self::Heal
                | Self::MpHeal
                | Self::HealOverTime
                | Self::SpeedChange
                | Self::StatUp
                | Self::Reflect
                | Self::Transform
                | Self::Summon
                | Self::Cubic
                | Self::Resurrect
                | Self::Teleport
        )
    }

    /// Instant effects run their start hook once and are never held.
    pub const fn is_instant(self) -> bool {
        matches!(
            self,
            Self::PhysicalDamage
                | Self::MagicalDamage
                | Self::HpDrain
                | Self::Heal
                | Self::MpHeal
                | Self::CancelTarget
                | Self::Summon
                | Self::Teleport
                | Self::Resurrect
                | Self::Dispel
                | Self::Negate
                | Self::AbsorbMp
        )
    }

    pub fn name(self) -> &'static str {
        self.into()
    }
}

/// A configured effect instance.
#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    PhysicalDamage(DamageEffect),
    MagicalDamage(DamageEffect),
    HpDrain(HpDrainEffect),
    DamageOverTime(DamageOverTimeEffect),

    Heal(HealEffect),
    MpHeal(MpHealEffect),
    HealOverTime(HealOverTimeEffect),

    Stun(ControlEffect),
    Root(ControlEffect),
    Paralyze(ControlEffect),
    Sleep(ControlEffect),
    Fear(ControlEffect),
    CancelTarget(CancelTargetEffect),

    Buff(StatEffect),
    StatUp(StatEffect),
    SpeedChange(StatEffect),
    Reflect(StatEffect),

    Cubic(CubicEffect),
    Summon(SummonEffect),
    Teleport(TeleportEffect),
    Transform(TransformEffect),
    Resurrect(ResurrectEffect),
    Dispel(DispelEffect),
    Negate(NegateEffect),
    AbsorbMp(AbsorbMpEffect),
}

impl Effect {
    pub fn kind(&self) -> EffectKind {
        match self {
            Self::PhysicalDamage(_) => EffectKind::PhysicalDamage,
            Self::MagicalDamage(_) => EffectKind::MagicalDamage,
            Self::HpDrain(_) => EffectKind::HpDrain,
            Self::DamageOverTime(_) => EffectKind::DamageOverTime,
            Self::Heal(_) => EffectKind::Heal,
            Self::MpHeal(_) => EffectKind::MpHeal,
            Self::HealOverTime(_) => EffectKind::HealOverTime,
            Self::Stun(_) => EffectKind::Stun,
            Self::Root(_) => EffectKind::Root,
            Self::Paralyze(_) => EffectKind::Paralyze,
            Self::Sleep(_) => EffectKind::Sleep,
            Self::Fear(_) => EffectKind::Fear,
            Self::CancelTarget(_) => EffectKind::CancelTarget,
            Self::Buff(_) => EffectKind::Buff,
            Self::StatUp(_) => EffectKind::StatUp,
            Self::SpeedChange(_) => EffectKind::SpeedChange,
            Self::Reflect(_) => EffectKind::Reflect,
            Self::Cubic(_) => EffectKind::Cubic,
            Self::Summon(_) => EffectKind::Summon,
            Self::Teleport(_) => EffectKind::Teleport,
            Self::Transform(_) => EffectKind::Transform,
            Self::Resurrect(_) => EffectKind::Resurrect,
            Self::Dispel(_) => EffectKind::Dispel,
            Self::Negate(_) => EffectKind::Negate,
            Self::AbsorbMp(_) => EffectKind::AbsorbMp,
        }
    }

    pub fn name(&self) -> &'static str {
        self.kind().name()
    }

    pub fn is_instant(&self) -> bool {
        self.kind().is_instant()
    }

    /// Fires once when the effect is applied.
    pub fn on_start(&self, ctx: &EffectContext<'_>) {
        match self {
            Self::PhysicalDamage(e) | Self::MagicalDamage(e) => e.on_start(ctx),
            Self::HpDrain(e) => e.on_start(ctx),
            Self::DamageOverTime(e) => e.on_start(ctx),
            Self::Heal(e) => e.on_start(ctx),
            Self::MpHeal(e) => e.on_start(ctx),
            Self::HealOverTime(e) => e.on_start(ctx),
            Self::Stun(e) | Self::Root(e) | Self::Paralyze(e) | Self::Sleep(e) | Self::Fear(e) => {
                e.on_start(ctx)
            }
            Self::CancelTarget(e) => e.on_start(ctx),
            Self::Buff(e) | Self::StatUp(e) | Self::SpeedChange(e) | Self::Reflect(e) => {
                e.on_start(ctx)
            }
            Self::Cubic(e) => e.on_start(ctx),
            Self::Summon(e) => e.on_start(ctx),
            Self::Teleport(e) => e.on_start(ctx),
            Self::Transform(e) => e.on_start(ctx),
            Self::Resurrect(e) => e.on_start(ctx),
            Self::Dispel(e) => e.on_start(ctx),
            Self::Negate(e) => e.on_start(ctx),
            Self::AbsorbMp(e) => e.on_start(ctx),
        }
    }

    /// Fires each tick while held; `false` asks the manager to remove it.
    pub fn on_tick(&self, ctx: &EffectContext<'_>) -> bool {
        match self {
            Self::DamageOverTime(e) => e.on_tick(ctx),
            Self::HealOverTime(e) => e.on_tick(ctx),
            // Control, stat and delegated continuous effects run until their
            // duration expires or they are removed.
            _ => true,
        }
    }

    /// Fires once when the effect is removed (expiry, replacement, dispel).
    pub fn on_exit(&self, ctx: &EffectContext<'_>) {
        match self {
            Self::Stun(e) | Self::Root(e) | Self::Paralyze(e) | Self::Sleep(e) | Self::Fear(e) => {
                e.on_exit(ctx)
            }
            Self::Buff(e) | Self::StatUp(e) | Self::SpeedChange(e) | Self::Reflect(e) => {
                e.on_exit(ctx)
            }
            Self::DamageOverTime(_) | Self::HealOverTime(_) => {
                tracing::debug!(effect = self.name(), target = %ctx.target, "periodic effect ended");
            }
            Self::Cubic(e) => e.on_exit(ctx),
            Self::Transform(e) => e.on_exit(ctx),
            _ => {}
        }
    }

    /// Stat modifiers contributed while the effect is held.
    pub fn modifiers(&self) -> &[StatModifier] {
        match self {
            Self::Buff(e) | Self::StatUp(e) | Self::SpeedChange(e) | Self::Reflect(e) => {
                e.modifiers()
            }
            _ => &[],
        }
    }
}
