//! Per-character effect container.
//!
//! Buffs and debuffs are bounded collections with abnormal-type stacking;
//! passives are keyed by skill id and never decay. Every accepted mutation
//! rebuilds the cached modifier list, so [`EffectManager::stat_bonus`] only
//! takes a read lock and never walks the effects themselves.
//!
//! Hooks run while the manager's write lock is held. A hook may touch any
//! character's vitals and flags but must not call back into the manager that
//! owns it.

use std::cmp::Ordering;
use std::fmt;

use parking_lot::RwLock;
use tracing::{debug, trace};

use crate::config::EffectLimits;
use crate::state::SkillId;
use crate::stats::{Stat, StatModifier, aggregate};

use super::active::{ActiveEffect, EffectSummary};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Slot {
    Buff,
    Debuff,
}

#[derive(Default)]
struct Collections {
    buffs: Vec<ActiveEffect>,
    debuffs: Vec<ActiveEffect>,
    passives: Vec<ActiveEffect>,
    modifiers: Vec<StatModifier>,
}

impl Collections {
    fn list_mut(&mut self, slot: Slot) -> &mut Vec<ActiveEffect> {
        match slot {
            Slot::Buff => &mut self.buffs,
            Slot::Debuff => &mut self.debuffs,
        }
    }

    fn all(&self) -> impl Iterator<Item = &ActiveEffect> {
        self.buffs
            .iter()
            .chain(self.debuffs.iter())
            .chain(self.passives.iter())
    }

    fn rebuild_modifiers(&mut self) {
        let modifiers: Vec<StatModifier> = self
            .all()
            .flat_map(|effect| effect.modifiers().iter().copied())
            .collect();
        self.modifiers = modifiers;
    }

    /// Removes every effect matching `predicate` from all three collections,
    /// firing exit hooks. Returns the number removed.
    fn remove_where(&mut self, predicate: impl Fn(&ActiveEffect) -> bool) -> usize {
        let mut removed = 0;
        for list in [&mut self.buffs, &mut self.debuffs, &mut self.passives] {
            let (gone, kept): (Vec<_>, Vec<_>) =
                std::mem::take(list).into_iter().partition(|e| predicate(e));
            *list = kept;
            for effect in &gone {
                effect.exit();
            }
            removed += gone.len();
        }
        if removed > 0 {
            self.rebuild_modifiers();
        }
        removed
    }
}

/// Thread-safe owner of one character's buffs, debuffs and passives.
pub struct EffectManager {
    limits: EffectLimits,
    inner: RwLock<Collections>,
}

impl EffectManager {
    pub fn new(limits: EffectLimits) -> Self {
        Self {
            limits,
            inner: RwLock::new(Collections::default()),
        }
    }

    pub fn limits(&self) -> EffectLimits {
        self.limits
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    /// Routes `effect` to the buff or debuff collection by its kind.
    pub fn add(&self, effect: ActiveEffect) -> bool {
        if effect.kind().is_beneficial() {
            self.add_buff(effect)
        } else {
            self.add_debuff(effect)
        }
    }

    /// Adds a beneficial effect. Returns whether the collection changed.
    pub fn add_buff(&self, effect: ActiveEffect) -> bool {
        self.insert(Slot::Buff, effect)
    }

    /// Adds a harmful effect. Returns whether the collection changed.
    pub fn add_debuff(&self, effect: ActiveEffect) -> bool {
        self.insert(Slot::Debuff, effect)
    }

    fn insert(&self, slot: Slot, effect: ActiveEffect) -> bool {
        let capacity = match slot {
            Slot::Buff => self.limits.max_buffs,
            Slot::Debuff => self.limits.max_debuffs,
        };

        let mut inner = self.inner.write();
        let list = inner.list_mut(slot);

        let collision = if effect.abnormal_type().is_empty() {
            None
        } else {
            list.iter()
                .position(|held| held.abnormal_type() == effect.abnormal_type())
        };

        if let Some(index) = collision {
            let held = &mut list[index];
            match effect.abnormal_level().cmp(&held.abnormal_level()) {
                Ordering::Greater => {
                    debug!(
                        abnormal = effect.abnormal_type(),
                        old_level = held.abnormal_level(),
                        new_level = effect.abnormal_level(),
                        "effect replaced by stronger one"
                    );
                    held.exit();
                    *held = effect;
                    held.start();
                }
                Ordering::Equal => {
                    trace!(
                        abnormal = effect.abnormal_type(),
                        remaining_ms = effect.remaining_ms(),
                        "effect refreshed"
                    );
                    held.set_remaining_ms(effect.remaining_ms());
                }
                Ordering::Less => {
                    debug!(
                        abnormal = effect.abnormal_type(),
                        held_level = held.abnormal_level(),
                        rejected_level = effect.abnormal_level(),
                        "weaker effect rejected"
                    );
                    return false;
                }
            }
        } else {
            if capacity == 0 {
                return false;
            }
            while list.len() >= capacity {
                let evicted = list.remove(0);
                debug!(
                    slot = ?slot,
                    kind = %evicted.kind(),
                    skill = %evicted.skill(),
                    "capacity reached, oldest effect evicted"
                );
                evicted.exit();
            }
            effect.start();
            trace!(slot = ?slot, kind = %effect.kind(), skill = %effect.skill(), "effect added");
            list.push(effect);
        }

        inner.rebuild_modifiers();
        true
    }

    /// Adds a passive, replacing any passive from the same skill id.
    pub fn add_passive(&self, effect: ActiveEffect) {
        let mut inner = self.inner.write();
        let skill = effect.skill().id;
        match inner.passives.iter().position(|p| p.skill().id == skill) {
            Some(index) => {
                let held = &mut inner.passives[index];
                held.exit();
                *held = effect;
                held.start();
            }
            None => {
                effect.start();
                inner.passives.push(effect);
            }
        }
        trace!(skill = %skill, "passive applied");
        inner.rebuild_modifiers();
    }

    /// Removes every effect of `abnormal_type`; returns how many were removed.
    pub fn remove_effect(&self, abnormal_type: &str) -> usize {
        if abnormal_type.is_empty() {
            return 0;
        }
        let removed = self
            .inner
            .write()
            .remove_where(|e| e.abnormal_type() == abnormal_type);
        debug!(abnormal = abnormal_type, removed, "effects removed by type");
        removed
    }

    /// Removes every effect applied by `skill`; returns how many were removed.
    pub fn remove_by_skill_id(&self, skill: SkillId) -> usize {
        let removed = self
            .inner
            .write()
            .remove_where(|e| e.skill().id == skill);
        debug!(skill = %skill, removed, "effects removed by skill");
        removed
    }

    /// Advances buffs and debuffs by `delta_ms`.
    ///
    /// Each effect runs its periodic hook once, then decays. Effects that
    /// asked to stop or ran out of time fire their exit hook and are removed.
    /// Passives are untouched. Returns the number of effects removed.
    pub fn tick(&self, delta_ms: i64) -> usize {
        let mut inner = self.inner.write();
        let mut removed = 0;

        for slot in [Slot::Buff, Slot::Debuff] {
            let list = inner.list_mut(slot);
            let mut kept = Vec::with_capacity(list.len());
            for mut effect in std::mem::take(list) {
                let keep_ticking = effect.tick();
                let expired = effect.decay(delta_ms);
                if keep_ticking && !expired {
                    kept.push(effect);
                } else {
                    trace!(kind = %effect.kind(), skill = %effect.skill(), expired, "effect ended");
                    effect.exit();
                    removed += 1;
                }
            }
            *list = kept;
        }

        if removed > 0 {
            inner.rebuild_modifiers();
        }
        removed
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Aggregated bonus of every held effect on `stat`; `0.0` when untouched.
    pub fn stat_bonus(&self, stat: Stat) -> f64 {
        aggregate(&self.inner.read().modifiers, stat)
    }

    /// [`Self::stat_bonus`] by template stat name; unknown names yield `0.0`.
    pub fn stat_bonus_by_name(&self, stat: &str) -> f64 {
        stat.parse::<Stat>()
            .map(|stat| self.stat_bonus(stat))
            .unwrap_or(0.0)
    }

    pub fn buffs(&self) -> Vec<EffectSummary> {
        self.inner.read().buffs.iter().map(ActiveEffect::summary).collect()
    }

    pub fn debuffs(&self) -> Vec<EffectSummary> {
        self.inner.read().debuffs.iter().map(ActiveEffect::summary).collect()
    }

    pub fn passives(&self) -> Vec<EffectSummary> {
        self.inner.read().passives.iter().map(ActiveEffect::summary).collect()
    }

    pub fn has_abnormal(&self, abnormal_type: &str) -> bool {
        !abnormal_type.is_empty()
            && self
                .inner
                .read()
                .all()
                .any(|e| e.abnormal_type() == abnormal_type)
    }

    /// Total number of held effects across all collections.
    pub fn len(&self) -> usize {
        let inner = self.inner.read();
        inner.buffs.len() + inner.debuffs.len() + inner.passives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for EffectManager {
    fn default() -> Self {
        Self::new(EffectLimits::default())
    }
}

impl fmt::Debug for EffectManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.read();
        f.debug_struct("EffectManager")
            .field("limits", &self.limits)
            .field("buffs", &inner.buffs.len())
            .field("debuffs", &inner.debuffs.len())
            .field("passives", &inner.passives.len())
            .finish()
    }
}
