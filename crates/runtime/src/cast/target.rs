//! Target resolution and range checks.

use std::sync::Arc;

use skill_core::{Character, ObjectId, SkillTemplate, TargetType, WorldResolver};

use crate::api::CastError;

/// Object a cast is aimed at.
pub(crate) fn target_id(caster: &Character, template: &SkillTemplate) -> ObjectId {
    match template.target_type {
        TargetType::SelfTarget => caster.id(),
        // Falls back to self when nothing is selected.
        TargetType::Single => caster.target().unwrap_or_else(|| caster.id()),
    }
}

/// Start-of-cast validation for a target other than the caster.
///
/// An unresolvable target passes unless `fail_closed` is set.
pub(crate) fn check_range(
    world: &dyn WorldResolver,
    caster: &Character,
    target: ObjectId,
    range: i32,
    fail_closed: bool,
) -> Result<(), CastError> {
    if target == caster.id() {
        return Ok(());
    }
    match world.resolve(target) {
        Some(target) => {
            if range > 0 && !caster.position().within_range(&target.position(), range) {
                return Err(CastError::OutOfRange);
            }
            Ok(())
        }
        None if fail_closed => Err(CastError::TargetNotFound),
        None => Ok(()),
    }
}

/// Why a completing cast lands nowhere.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Miss {
    Gone,
    Dead,
    OutOfRange,
}

/// Completion-time validation: the target must still exist, be alive and be
/// within the completion range.
pub(crate) fn revalidate(
    world: &dyn WorldResolver,
    caster: &Arc<Character>,
    target: ObjectId,
    template: &SkillTemplate,
) -> Result<Arc<Character>, Miss> {
    let target = if target == caster.id() {
        Arc::clone(caster)
    } else {
        world.resolve(target).ok_or(Miss::Gone)?
    };
    if target.is_dead() {
        return Err(Miss::Dead);
    }
    let range = template.completion_range();
    if range > 0
        && target.id() != caster.id()
        && !caster.position().within_range(&target.position(), range)
    {
        return Err(Miss::OutOfRange);
    }
    Ok(target)
}
