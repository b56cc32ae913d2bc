//! Stat-modifying effects.
//!
//! These never mutate the target directly: their modifiers are folded into
//! the owning [`super::EffectManager`]'s cache and read back through
//! [`super::EffectManager::stat_bonus`].

use crate::stats::{Stat, StatModifier};

use super::context::EffectContext;
use super::params::EffectParams;

/// Contributes a fixed list of modifiers while held.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StatEffect {
    modifiers: Vec<StatModifier>,
}

impl StatEffect {
    pub fn new(modifiers: Vec<StatModifier>) -> Self {
        Self { modifiers }
    }

    /// `stat`, `value`, and `op` (`add` or `mul`, default `add`).
    pub fn buff(params: &EffectParams) -> Self {
        let Some(stat) = parse_stat(params) else {
            return Self::default();
        };
        let value = params.get_f64("value");
        let modifier = match params.get_str("op") {
            Some(op) if op.eq_ignore_ascii_case("mul") || op.eq_ignore_ascii_case("multiply") => {
                StatModifier::multiply(stat, value)
            }
            _ => StatModifier::add(stat, value),
        };
        Self::new(vec![modifier])
    }

    /// `stat` plus a flat `amount` and/or a `percent` increase.
    pub fn stat_up(params: &EffectParams) -> Self {
        let Some(stat) = parse_stat(params) else {
            return Self::default();
        };
        Self::new(flat_and_percent(stat, params, "amount"))
    }

    /// Run speed change by flat `value` and/or `percent`.
    pub fn speed_change(params: &EffectParams) -> Self {
        Self::new(flat_and_percent(Stat::RunSpeed, params, "value"))
    }

    /// Damage reflection, `percent` of received damage.
    pub fn reflect(params: &EffectParams) -> Self {
        Self::new(vec![StatModifier::add(
            Stat::Reflect,
            params.get_f64("percent"),
        )])
    }

    pub fn modifiers(&self) -> &[StatModifier] {
        &self.modifiers
    }

    pub fn on_start(&self, ctx: &EffectContext<'_>) {
        tracing::debug!(target = %ctx.target, modifiers = self.modifiers.len(), "stat effect started");
    }

    pub fn on_exit(&self, ctx: &EffectContext<'_>) {
        tracing::debug!(target = %ctx.target, "stat effect ended");
    }
}

fn parse_stat(params: &EffectParams) -> Option<Stat> {
    let name = params.get_str("stat").unwrap_or_default();
    match name.parse::<Stat>() {
        Ok(stat) => Some(stat),
        Err(_) => {
            tracing::warn!(stat = name, "unknown stat in effect parameters");
            None
        }
    }
}

fn flat_and_percent(stat: Stat, params: &EffectParams, flat_key: &str) -> Vec<StatModifier> {
    let mut modifiers = Vec::with_capacity(2);
    let flat = params.get_f64(flat_key);
    if flat != 0.0 {
        modifiers.push(StatModifier::add(stat, flat));
    }
    let percent = params.get_f64("percent");
    if percent != 0.0 {
        modifiers.push(StatModifier::multiply(stat, 1.0 + percent / 100.0));
    }
    modifiers
}
