//! Crowd-control effects.

use crate::state::StatusFlags;

use super::context::EffectContext;

/// Raises one status flag on the target while held.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ControlEffect {
    pub flag: StatusFlags,
}

impl ControlEffect {
    pub const fn new(flag: StatusFlags) -> Self {
        Self { flag }
    }

    pub fn on_start(&self, ctx: &EffectContext<'_>) {
        if let Some(target) = ctx.resolve_target() {
            target.set_status(self.flag, true);
            tracing::debug!(target = %ctx.target, flag = ?self.flag, "status applied");
        }
    }

    pub fn on_exit(&self, ctx: &EffectContext<'_>) {
        if let Some(target) = ctx.resolve_target() {
            target.set_status(self.flag, false);
            tracing::debug!(target = %ctx.target, flag = ?self.flag, "status cleared");
        }
    }
}

/// Drops a player's current target selection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CancelTargetEffect;

impl CancelTargetEffect {
    pub fn on_start(&self, ctx: &EffectContext<'_>) {
        let Some(target) = ctx.resolve_target() else {
            return;
        };
        if target.is_player() {
            target.set_target(None);
            tracing::debug!(target = %ctx.target, "target selection cancelled");
        }
    }
}
