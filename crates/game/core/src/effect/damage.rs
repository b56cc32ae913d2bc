//! Instant damage effects.

use std::sync::Arc;

use crate::combat::ShotFlags;
use crate::state::Character;
use crate::stats::Stat;

use super::context::EffectContext;
use super::params::EffectParams;

/// Which attack/defense pair and formula a damage effect uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DamageSchool {
    Physical,
    Magical,
}

impl DamageSchool {
    fn stats(self) -> (Stat, Stat) {
        match self {
            Self::Physical => (Stat::PAtk, Stat::PDef),
            Self::Magical => (Stat::MAtk, Stat::MDef),
        }
    }
}

/// One-shot physical or magical damage scaled by `power`.
#[derive(Clone, Debug, PartialEq)]
pub struct DamageEffect {
    pub school: DamageSchool,
    pub power: f64,
}

impl DamageEffect {
    pub fn from_params(school: DamageSchool, params: &EffectParams) -> Self {
        Self {
            school,
            power: params.get_f64("power"),
        }
    }

    pub fn on_start(&self, ctx: &EffectContext<'_>) {
        if let Some(hit) = strike(ctx, self.school, self.power) {
            tracing::debug!(
                school = %self.school,
                caster = %ctx.caster,
                target = %ctx.target,
                damage = hit.dealt,
                "damage applied"
            );
        }
    }
}

/// Outcome of a resolved hit.
pub(super) struct Hit {
    pub caster: Arc<Character>,
    pub dealt: u32,
}

/// Resolves both sides, computes damage through the configured formulas and
/// applies it to the target.
///
/// Returns `None` when either side is gone or the target is already dead.
pub(super) fn strike(ctx: &EffectContext<'_>, school: DamageSchool, power: f64) -> Option<Hit> {
    let caster = ctx.resolve_caster()?;
    let target = ctx.resolve_target()?;
    if target.is_dead() {
        return None;
    }

    let (atk, def) = school.stats();
    let attack = caster.effective_stat(atk);
    let defense = target.effective_stat(def);
    let is_pvp = caster.is_player() && target.is_player();

    let damage = match school {
        DamageSchool::Magical => ctx.formulas().magic_damage(
            attack,
            defense,
            power,
            ShotFlags::empty(),
            false,
            is_pvp,
            caster.level(),
        ),
        DamageSchool::Physical => ctx.formulas().physical_damage(
            attack,
            defense,
            power,
            ShotFlags::empty(),
            false,
            is_pvp,
        ),
    };

    let dealt = target.apply_damage(damage.max(1) as u32, true);
    Some(Hit { caster, dealt })
}
