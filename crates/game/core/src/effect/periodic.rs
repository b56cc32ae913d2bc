//! Continuous effects that act on every tick.

use super::context::EffectContext;
use super::params::EffectParams;

/// Damage applied each tick. With `can_kill == false` the target is left at
/// 1 HP at worst.
#[derive(Clone, Debug, PartialEq)]
pub struct DamageOverTimeEffect {
    pub power: f64,
    pub can_kill: bool,
}

impl DamageOverTimeEffect {
    pub fn from_params(params: &EffectParams) -> Self {
        Self {
            power: params.get_f64("power"),
            can_kill: params.get_bool("canKill"),
        }
    }

    pub fn on_start(&self, ctx: &EffectContext<'_>) {
        tracing::debug!(target = %ctx.target, power = self.power, "damage over time started");
    }

    pub fn on_tick(&self, ctx: &EffectContext<'_>) -> bool {
        let Some(target) = ctx.resolve_target() else {
            return false;
        };
        if target.is_dead() {
            return false;
        }
        let dealt = target.apply_damage(self.power.max(0.0).floor() as u32, self.can_kill);
        tracing::trace!(target = %ctx.target, dealt, "damage over time tick");
        !target.is_dead()
    }
}

/// HP restored each tick until the target is full.
#[derive(Clone, Debug, PartialEq)]
pub struct HealOverTimeEffect {
    pub power: f64,
}

impl HealOverTimeEffect {
    pub fn from_params(params: &EffectParams) -> Self {
        Self {
            power: params.get_f64("power"),
        }
    }

    pub fn on_start(&self, ctx: &EffectContext<'_>) {
        tracing::debug!(target = %ctx.target, power = self.power, "heal over time started");
    }

    pub fn on_tick(&self, ctx: &EffectContext<'_>) -> bool {
        let Some(target) = ctx.resolve_target() else {
            return false;
        };
        let state = target.snapshot();
        if state.dead || state.hp >= state.max_hp {
            return false;
        }
        let healed = target.restore_hp(self.power.max(0.0).floor() as u32);
        tracing::trace!(target = %ctx.target, healed, "heal over time tick");
        true
    }
}
