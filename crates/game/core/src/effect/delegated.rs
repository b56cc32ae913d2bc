//! Effects whose side effects belong to the orchestrating layer.
//!
//! Spawning, relocation and resurrection need resources outside this crate,
//! so these effects only carry their configured parameters. Hooks log and
//! return.

use crate::state::Position;

use super::context::EffectContext;
use super::params::EffectParams;

macro_rules! log_hooks {
    ($ty:ty, $label:literal) => {
        impl $ty {
            pub fn on_start(&self, ctx: &EffectContext<'_>) {
                tracing::debug!(
                    effect = $label,
                    caster = %ctx.caster,
                    target = %ctx.target,
                    params = ?self,
                    "delegated effect started"
                );
            }
        }
    };
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CubicEffect {
    cubic_id: i32,
    level: i32,
}

impl CubicEffect {
    pub fn from_params(params: &EffectParams) -> Self {
        Self {
            cubic_id: params.get_i32("cubicId"),
            level: params.get_i32("level"),
        }
    }

    pub fn cubic_id(&self) -> i32 {
        self.cubic_id
    }

    pub fn level(&self) -> i32 {
        self.level
    }

    pub fn on_exit(&self, ctx: &EffectContext<'_>) {
        tracing::debug!(effect = "Cubic", target = %ctx.target, cubic_id = self.cubic_id, "cubic dismissed");
    }
}
log_hooks!(CubicEffect, "Cubic");

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SummonEffect {
    npc_id: i32,
    count: u32,
}

impl SummonEffect {
    pub fn from_params(params: &EffectParams) -> Self {
        Self {
            npc_id: params.get_i32("npcId"),
            count: params.get_u32("count").max(1),
        }
    }

    pub fn npc_id(&self) -> i32 {
        self.npc_id
    }

    pub fn count(&self) -> u32 {
        self.count
    }
}
log_hooks!(SummonEffect, "Summon");

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TeleportEffect {
    destination: Position,
}

impl TeleportEffect {
    pub fn from_params(params: &EffectParams) -> Self {
        Self {
            destination: Position::new(
                params.get_i32("x"),
                params.get_i32("y"),
                params.get_i32("z"),
            ),
        }
    }

    pub fn destination(&self) -> Position {
        self.destination
    }
}
log_hooks!(TeleportEffect, "Teleport");

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransformEffect {
    transform_id: i32,
}

impl TransformEffect {
    pub fn from_params(params: &EffectParams) -> Self {
        Self {
            transform_id: params.get_i32("transformId"),
        }
    }

    pub fn transform_id(&self) -> i32 {
        self.transform_id
    }

    pub fn on_exit(&self, ctx: &EffectContext<'_>) {
        tracing::debug!(effect = "Transform", target = %ctx.target, transform_id = self.transform_id, "transformation ended");
    }
}
log_hooks!(TransformEffect, "Transform");

/// `power` is the percentage of experience restored.
#[derive(Clone, Debug, PartialEq)]
pub struct ResurrectEffect {
    power: f64,
}

impl ResurrectEffect {
    pub fn from_params(params: &EffectParams) -> Self {
        Self {
            power: params.get_f64("power"),
        }
    }

    pub fn power(&self) -> f64 {
        self.power
    }
}
log_hooks!(ResurrectEffect, "Resurrect");

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DispelEffect {
    abnormal_type: String,
    max: u32,
}

impl DispelEffect {
    pub fn from_params(params: &EffectParams) -> Self {
        Self {
            abnormal_type: params.get_str("abnormalType").unwrap_or_default().to_string(),
            max: params.get_u32("max"),
        }
    }

    pub fn abnormal_type(&self) -> &str {
        &self.abnormal_type
    }

    /// Maximum number of effects removed; 0 means no limit.
    pub fn max(&self) -> u32 {
        self.max
    }
}
log_hooks!(DispelEffect, "Dispel");

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NegateEffect {
    abnormal_types: Vec<String>,
    level: i32,
}

impl NegateEffect {
    pub fn from_params(params: &EffectParams) -> Self {
        Self {
            abnormal_types: params.get_list("abnormalTypes"),
            level: params.get_i32("level"),
        }
    }

    pub fn abnormal_types(&self) -> &[String] {
        &self.abnormal_types
    }

    /// Highest abnormal level this negation can remove.
    pub fn level(&self) -> i32 {
        self.level
    }
}
log_hooks!(NegateEffect, "Negate");

#[derive(Clone, Debug, PartialEq)]
pub struct AbsorbMpEffect {
    power: f64,
}

impl AbsorbMpEffect {
    pub fn from_params(params: &EffectParams) -> Self {
        Self {
            power: params.get_f64("power"),
        }
    }

    pub fn power(&self) -> f64 {
        self.power
    }
}
log_hooks!(AbsorbMpEffect, "AbsorbMp");
