//! Pre-commit cast validation.
//!
//! Checks run in a fixed order and the first failure wins. Nothing is mutated
//! here; the commit step re-claims the cast slot and cooldown atomically.

use skill_core::{Character, ObjectId, SkillTemplate};

use super::Shared;
use super::cooldown::millis;
use super::target::{check_range, target_id};
use crate::api::CastError;

/// Validates a cast of `template` by `caster` and returns the resolved target.
///
/// The learned-skill and template lookups happen before this is called.
pub(crate) fn validate(
    shared: &Shared,
    caster: &Character,
    template: &SkillTemplate,
) -> Result<ObjectId, CastError> {
    if template.is_passive {
        return Err(CastError::Passive);
    }

    if shared.casts.contains(caster.id()) {
        return Err(CastError::AlreadyCasting);
    }

    if let Some(remaining) = shared.cooldowns.remaining(caster.id(), template.id) {
        return Err(CastError::OnCooldown {
            remaining_ms: millis(remaining),
        });
    }

    let state = caster.snapshot();
    if state.mp < template.mp_consume {
        return Err(CastError::NotEnoughMp);
    }
    if template.hp_consume > 0 && state.hp <= template.hp_consume {
        return Err(CastError::NotEnoughHp);
    }

    if state.dead {
        return Err(CastError::Dead);
    }

    let target = target_id(caster, template);
    check_range(
        shared.world.as_ref(),
        caster,
        target,
        template.cast_range,
        shared.config.fail_closed_range,
    )?;

    Ok(target)
}
