//! Construction of [`Effect`] values from template data.
//!
//! Template text only maps to a variant here; everything past this boundary
//! works with the typed [`EffectKind`].

use crate::error::{ErrorSeverity, GameError};
use crate::skill::EffectDefinition;
use crate::state::StatusFlags;

use super::control::{CancelTargetEffect, ControlEffect};
use super::damage::{DamageEffect, DamageSchool};
use super::delegated::{
    AbsorbMpEffect, CubicEffect, DispelEffect, NegateEffect, ResurrectEffect, SummonEffect,
    TeleportEffect, TransformEffect,
};
use super::kinds::{Effect, EffectKind};
use super::params::EffectParams;
use super::periodic::{DamageOverTimeEffect, HealOverTimeEffect};
use super::resource::{HealEffect, HpDrainEffect, MpHealEffect};
use super::stat::StatEffect;

/// Failure to turn an effect definition into an [`Effect`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EffectBuildError {
    #[error("unknown effect `{name}`")]
    Unknown { name: String },
}

impl GameError for EffectBuildError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Unknown { .. } => "EFFECT_UNKNOWN",
        }
    }
}

impl Effect {
    /// Builds a variant of `kind`; malformed parameters read as zero.
    pub fn build(kind: EffectKind, params: &EffectParams) -> Self {
        match kind {
            EffectKind::PhysicalDamage => {
                Self::PhysicalDamage(DamageEffect::from_params(DamageSchool::Physical, params))
            }
            EffectKind::MagicalDamage => {
                Self::MagicalDamage(DamageEffect::from_params(DamageSchool::Magical, params))
            }
            EffectKind::HpDrain => Self::HpDrain(HpDrainEffect::from_params(params)),
            EffectKind::DamageOverTime => {
                Self::DamageOverTime(DamageOverTimeEffect::from_params(params))
            }
            EffectKind::Heal => Self::Heal(HealEffect::from_params(params)),
            EffectKind::MpHeal => Self::MpHeal(MpHealEffect::from_params(params)),
            EffectKind::HealOverTime => Self::HealOverTime(HealOverTimeEffect::from_params(params)),
            EffectKind::Stun => Self::Stun(ControlEffect::new(StatusFlags::STUNNED)),
            EffectKind::Root => Self::Root(ControlEffect::new(StatusFlags::ROOTED)),
            EffectKind::Paralyze => Self::Paralyze(ControlEffect::new(StatusFlags::PARALYZED)),
            EffectKind::Sleep => Self::Sleep(ControlEffect::new(StatusFlags::SLEEPING)),
            EffectKind::Fear => Self::Fear(ControlEffect::new(StatusFlags::FEARED)),
            EffectKind::CancelTarget => Self::CancelTarget(CancelTargetEffect),
            EffectKind::Buff => Self::Buff(StatEffect::buff(params)),
            EffectKind::StatUp => Self::StatUp(StatEffect::stat_up(params)),
            EffectKind::SpeedChange => Self::SpeedChange(StatEffect::speed_change(params)),
            EffectKind::Reflect => Self::Reflect(StatEffect::reflect(params)),
            EffectKind::Cubic => Self::Cubic(CubicEffect::from_params(params)),
            EffectKind::Summon => Self::Summon(SummonEffect::from_params(params)),
            EffectKind::Teleport => Self::Teleport(TeleportEffect::from_params(params)),
            EffectKind::Transform => Self::Transform(TransformEffect::from_params(params)),
            EffectKind::Resurrect => Self::Resurrect(ResurrectEffect::from_params(params)),
            EffectKind::Dispel => Self::Dispel(DispelEffect::from_params(params)),
            EffectKind::Negate => Self::Negate(NegateEffect::from_params(params)),
            EffectKind::AbsorbMp => Self::AbsorbMp(AbsorbMpEffect::from_params(params)),
        }
    }

    /// Resolves a template effect entry by name.
    pub fn from_definition(definition: &EffectDefinition) -> Result<Self, EffectBuildError> {
        let kind = definition
            .name
            .trim()
            .parse::<EffectKind>()
            .map_err(|_| EffectBuildError::Unknown {
                name: definition.name.clone(),
            })?;
        Ok(Self::build(kind, &definition.params))
    }
}
