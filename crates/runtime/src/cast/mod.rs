//! Cast orchestration.
//!
//! [`CastManager`] validates a request, commits its cost, notifies observers
//! and either applies the skill's effects at once or schedules them after the
//! template's hit time. A scheduled completion races the caster's
//! cancellation token; exactly one side claims the cast through
//! the active-cast registry and the loser does nothing.
//!
//! ```text
//! use_magic ─▶ validate ─▶ commit (slot, cooldown, cost) ─▶ SkillUse
//!                                      │
//!                     hit_time == 0 ───┼─── hit_time > 0
//!                          ▼           │          ▼
//!                   apply + Launched   │   arm slot, spawn: select! { cancelled | sleep }
//!                                      │          ▼
//!                                      │   finish ─▶ revalidate ─▶ apply + Launched
//! ```
mod active;
mod apply;
mod builder;
mod cooldown;
mod target;
mod validation;

use std::sync::Arc;
use std::time::Duration;

use skill_core::{
    Character, EffectEnv, GameError, ObjectId, SkillId, SkillKey, SkillTemplate,
    SkillTemplateOracle, WorldResolver,
};
use tokio::runtime::Handle;
use tracing::{debug, trace};

use crate::api::CastError;
use crate::config::EngineConfig;
use crate::events::{CastEvent, PacketSink};

use self::active::{ActiveCasts, CastTicket};
use self::cooldown::CooldownRegistry;

pub use builder::CastManagerBuilder;
pub use cooldown::CooldownEntry;

/// Result of an accepted cast request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CastOutcome {
    /// Instant cast; effects have already been applied.
    Launched,
    /// Effects land after `hit_time_ms` unless the cast is interrupted.
    Casting { hit_time_ms: u64 },
}

pub(crate) struct Shared {
    pub(crate) templates: Arc<dyn SkillTemplateOracle>,
    pub(crate) world: Arc<dyn WorldResolver>,
    pub(crate) env: EffectEnv,
    pub(crate) sink: Arc<dyn PacketSink>,
    pub(crate) config: EngineConfig,
    pub(crate) cooldowns: CooldownRegistry,
    pub(crate) casts: ActiveCasts,
    pub(crate) handle: Handle,
}

/// Cloneable entry point of the casting engine.
///
/// Clones share cooldowns and in-flight casts. Different casters never
/// contend beyond a per-key map shard.
#[derive(Clone)]
pub struct CastManager {
    shared: Arc<Shared>,
}

impl CastManager {
    pub fn builder() -> CastManagerBuilder {
        CastManagerBuilder::new()
    }

    pub fn config(&self) -> &EngineConfig {
        &self.shared.config
    }

    /// Casts a learned skill at the caster's known level.
    pub fn use_magic(
        &self,
        caster: &Arc<Character>,
        skill: SkillId,
    ) -> Result<CastOutcome, CastError> {
        let level = caster.skill_level(skill).ok_or(CastError::NotLearned)?;
        self.cast(caster, SkillKey::new(skill, level))
    }

    /// Casts a skill granted by an item; the caster need not know it.
    pub fn use_item_skill(
        &self,
        caster: &Arc<Character>,
        skill: SkillId,
        level: u32,
    ) -> Result<CastOutcome, CastError> {
        self.cast(caster, SkillKey::new(skill, level))
    }

    /// Cancels the caster's in-flight cast. Returns whether one was cancelled.
    pub fn interrupt_cast(&self, caster: &Character) -> bool {
        let Some(skill) = self.shared.casts.interrupt(caster) else {
            return false;
        };
        debug!(caster = %caster.id(), skill = %skill, "cast interrupted");
        self.shared
            .notify(caster, CastEvent::SkillCanceled { caster: caster.id() });
        true
    }

    pub fn is_on_cooldown(&self, caster: ObjectId, skill: SkillId) -> bool {
        self.shared.cooldowns.remaining(caster, skill).is_some()
    }

    pub fn all_cooldowns(&self, caster: ObjectId) -> Vec<CooldownEntry> {
        self.shared.cooldowns.snapshot(caster)
    }

    pub fn is_casting(&self, caster: ObjectId) -> bool {
        self.shared.casts.contains(caster)
    }

    /// Skill the caster is currently casting, if any.
    pub fn current_cast(&self, caster: ObjectId) -> Option<SkillKey> {
        self.shared.casts.current(caster)
    }

    /// Installs every learned passive skill's effects on `character`.
    ///
    /// Returns the number of passive effects installed.
    pub fn apply_passives(&self, character: &Character) -> usize {
        let mut applied = 0;
        for key in character.known_skills() {
            match self.shared.templates.template(key) {
                Some(template) if template.is_passive => {
                    applied += self.shared.apply_passive(character, &template);
                }
                Some(_) => {}
                None => debug!(character = %character.id(), skill = %key, "passive lookup: template not found"),
            }
        }
        applied
    }

    fn cast(&self, caster: &Arc<Character>, key: SkillKey) -> Result<CastOutcome, CastError> {
        let template = self
            .shared
            .templates
            .template(key)
            .ok_or(CastError::TemplateNotFound)?;

        let result = validation::validate(&self.shared, caster, &template)
            .and_then(|target| self.commit(caster, target, template));
        if let Err(err) = &result {
            debug!(
                caster = %caster.id(),
                skill = %key,
                code = err.error_code(),
                severity = %err.severity(),
                "cast rejected"
            );
        }
        result
    }

    fn commit(
        &self,
        caster: &Arc<Character>,
        target: ObjectId,
        template: Arc<SkillTemplate>,
    ) -> Result<CastOutcome, CastError> {
        let shared = &self.shared;
        let key = template.key();

        // Instant casts hold the slot too, so they cannot overlap a delayed one.
        let ticket = shared
            .casts
            .begin(caster, key)
            .ok_or(CastError::AlreadyCasting)?;

        let cooldown = if template.reuse_delay_ms > 0 {
            let delay = Duration::from_millis(template.reuse_delay_ms);
            match shared.cooldowns.claim(caster.id(), key.id, delay) {
                Ok(expiry) => Some(expiry),
                Err(remaining) => {
                    shared.casts.finish(caster, ticket.cast_id);
                    return Err(CastError::OnCooldown {
                        remaining_ms: cooldown::millis(remaining),
                    });
                }
            }
        } else {
            None
        };

        if let Err(shortfall) = caster.try_consume(template.mp_consume, template.hp_consume) {
            shared.casts.finish(caster, ticket.cast_id);
            if let Some(expiry) = cooldown {
                shared.cooldowns.release(caster.id(), key.id, expiry);
            }
            return Err(shortfall.into());
        }

        debug!(
            caster = %caster.id(),
            target = %target,
            skill = %key,
            hit_time_ms = template.hit_time_ms,
            debuff = template.is_debuff,
            "cast accepted"
        );
        shared.notify(
            caster,
            CastEvent::SkillUse {
                caster: caster.id(),
                target,
                skill: key,
                hit_time_ms: template.hit_time_ms,
                reuse_delay_ms: template.reuse_delay_ms,
            },
        );

        if template.is_instant_cast() {
            shared.launch(caster, target, &template);
            shared.casts.finish(caster, ticket.cast_id);
            return Ok(CastOutcome::Launched);
        }

        shared.casts.arm(caster.id(), ticket.cast_id);
        let hit_time_ms = template.hit_time_ms;
        self.schedule(Arc::clone(caster), target, template, ticket);
        Ok(CastOutcome::Casting { hit_time_ms })
    }

    fn schedule(
        &self,
        caster: Arc<Character>,
        target: ObjectId,
        template: Arc<SkillTemplate>,
        ticket: CastTicket,
    ) {
        let shared = Arc::clone(&self.shared);
        let hit_time = Duration::from_millis(template.hit_time_ms);

        self.shared.handle.spawn(async move {
            tokio::select! {
                biased;
                _ = ticket.token.cancelled() => {
                    trace!(caster = %caster.id(), "cast task observed cancellation");
                    return;
                }
                _ = tokio::time::sleep(hit_time) => {}
            }

            if !shared.casts.finish(&caster, ticket.cast_id) {
                trace!(caster = %caster.id(), "cast interrupted at completion");
                return;
            }
            shared.complete(&caster, target, &template);
        });
    }
}

impl Shared {
    /// Sends `event` to the caster's client and to nearby observers.
    fn notify(&self, caster: &Character, event: CastEvent) {
        if caster.is_player() {
            self.sink.send_to_player(caster.id(), &event);
        }
        self.sink.broadcast_near(caster.id(), &event);
    }

    /// Lands an instant cast on the target chosen at validation.
    ///
    /// Each effect applies its own gates; an unresolvable target takes
    /// nothing but the launch is still announced.
    fn launch(&self, caster: &Arc<Character>, target: ObjectId, template: &SkillTemplate) {
        let resolved = if target == caster.id() {
            Some(Arc::clone(caster))
        } else {
            self.world.resolve(target)
        };
        match resolved {
            Some(resolved) => {
                self.apply_effects(caster, &resolved, template);
            }
            None => debug!(caster = %caster.id(), target = %target, skill = %template.key(), "instant cast target not resolvable"),
        }
        self.announce_launch(caster, target, template.key());
    }

    /// Re-validates the target of a delayed cast, applies effects and
    /// announces the launch.
    fn complete(&self, caster: &Arc<Character>, target: ObjectId, template: &SkillTemplate) {
        let key = template.key();
        if caster.is_dead() {
            debug!(caster = %caster.id(), skill = %key, "caster died before completion");
            return;
        }
        let resolved = match target::revalidate(self.world.as_ref(), caster, target, template) {
            Ok(resolved) => resolved,
            Err(miss) => {
                debug!(caster = %caster.id(), target = %target, skill = %key, ?miss, "cast landed on no target");
                return;
            }
        };

        self.apply_effects(caster, &resolved, template);
        self.announce_launch(caster, target, key);
    }

    fn announce_launch(&self, caster: &Character, target: ObjectId, skill: SkillKey) {
        self.notify(
            caster,
            CastEvent::SkillLaunched {
                caster: caster.id(),
                target,
                skill,
            },
        );
    }
}
