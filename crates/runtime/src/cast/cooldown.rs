//! Per-(caster, skill) cooldown registry.
//!
//! Entries store an absolute expiry on the tokio clock. Expired entries are
//! removed lazily by whichever check finds them.

use std::time::Duration;

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use serde::{Deserialize, Serialize};
use skill_core::{ObjectId, SkillId};
use tokio::time::Instant;

/// Remaining cooldown of one skill, for UI and state sync.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CooldownEntry {
    pub skill: SkillId,
    pub remaining_ms: u64,
}

#[derive(Debug, Default)]
pub(crate) struct CooldownRegistry {
    entries: DashMap<(ObjectId, SkillId), Instant>,
}

pub(crate) fn millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

impl CooldownRegistry {
    /// Remaining cooldown, or `None` when the skill is ready.
    pub(crate) fn remaining(&self, caster: ObjectId, skill: SkillId) -> Option<Duration> {
        let key = (caster, skill);
        let now = Instant::now();

        // Copy the expiry out so the shard guard is released before removal.
        let expiry = self.entries.get(&key).map(|entry| *entry.value())?;
        if expiry > now {
            return Some(expiry - now);
        }
        self.entries.remove_if(&key, |_, expiry| *expiry <= now);
        None
    }

    /// Atomically starts a cooldown unless one is still running.
    ///
    /// Returns the new expiry, or the remaining time of the running cooldown.
    pub(crate) fn claim(
        &self,
        caster: ObjectId,
        skill: SkillId,
        delay: Duration,
    ) -> Result<Instant, Duration> {
        let now = Instant::now();
        let expiry = now + delay;
        match self.entries.entry((caster, skill)) {
            Entry::Occupied(entry) if *entry.get() > now => Err(*entry.get() - now),
            Entry::Occupied(mut entry) => {
                entry.insert(expiry);
                Ok(expiry)
            }
            Entry::Vacant(entry) => {
                entry.insert(expiry);
                Ok(expiry)
            }
        }
    }

    /// Undoes a [`Self::claim`] if the entry still holds `expiry`.
    pub(crate) fn release(&self, caster: ObjectId, skill: SkillId, expiry: Instant) {
        self.entries
            .remove_if(&(caster, skill), |_, current| *current == expiry);
    }

    /// Every running cooldown of `caster`, sorted by skill id.
    pub(crate) fn snapshot(&self, caster: ObjectId) -> Vec<CooldownEntry> {
        let now = Instant::now();
        let mut expired = Vec::new();
        let mut running: Vec<CooldownEntry> = self
            .entries
            .iter()
            .filter(|entry| entry.key().0 == caster)
            .filter_map(|entry| {
                let (_, skill) = *entry.key();
                let expiry = *entry.value();
                if expiry > now {
                    Some(CooldownEntry {
                        skill,
                        remaining_ms: millis(expiry - now),
                    })
                } else {
                    expired.push(skill);
                    None
                }
            })
            .collect();

        for skill in expired {
            self.entries
                .remove_if(&(caster, skill), |_, expiry| *expiry <= now);
        }

        running.sort_by_key(|entry| entry.skill);
        running
    }
}
