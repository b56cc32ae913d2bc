//! In-flight cast registry.
//!
//! At most one cast per caster. The character's casting flag is only changed
//! while the registry entry's shard lock is held, so the flag and the
//! registry can never disagree.
//!
//! A reserved slot stays invisible to [`ActiveCasts::interrupt`] until the
//! commit step arms it. Instant casts hold an unarmed slot while they land.

use std::sync::atomic::{AtomicU64, Ordering};

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use skill_core::{Character, ObjectId, SkillKey};
use tokio_util::sync::CancellationToken;

#[derive(Debug)]
struct ActiveCast {
    cast_id: u64,
    skill: SkillKey,
    token: CancellationToken,
    armed: bool,
}

/// Handle given to the task that completes a cast.
#[derive(Debug, Clone)]
pub(crate) struct CastTicket {
    pub cast_id: u64,
    pub token: CancellationToken,
}

#[derive(Debug, Default)]
pub(crate) struct ActiveCasts {
    casts: DashMap<ObjectId, ActiveCast>,
    next_id: AtomicU64,
}

impl ActiveCasts {
    pub(crate) fn contains(&self, caster: ObjectId) -> bool {
        self.casts.contains_key(&caster)
    }

    pub(crate) fn current(&self, caster: ObjectId) -> Option<SkillKey> {
        self.casts.get(&caster).map(|cast| cast.skill)
    }

    /// Reserves the caster's cast slot and raises its casting flag.
    ///
    /// Returns `None` if a cast is already in flight.
    pub(crate) fn begin(&self, caster: &Character, skill: SkillKey) -> Option<CastTicket> {
        match self.casts.entry(caster.id()) {
            Entry::Occupied(_) => None,
            Entry::Vacant(slot) => {
                let ticket = CastTicket {
                    cast_id: self.next_id.fetch_add(1, Ordering::Relaxed),
                    token: CancellationToken::new(),
                };
                caster.set_casting(true);
                slot.insert(ActiveCast {
                    cast_id: ticket.cast_id,
                    skill,
                    token: ticket.token.clone(),
                    armed: false,
                });
                Some(ticket)
            }
        }
    }

    /// Makes a committed cast interruptible.
    pub(crate) fn arm(&self, caster: ObjectId, cast_id: u64) {
        if let Some(mut cast) = self.casts.get_mut(&caster) {
            if cast.cast_id == cast_id {
                cast.armed = true;
            }
        }
    }

    /// Claims completion of `cast_id`; `false` means it was interrupted first.
    pub(crate) fn finish(&self, caster: &Character, cast_id: u64) -> bool {
        self.casts
            .remove_if(&caster.id(), |_, cast| {
                if cast.cast_id == cast_id {
                    caster.set_casting(false);
                    true
                } else {
                    false
                }
            })
            .is_some()
    }

    /// Removes and cancels the caster's armed cast, if any.
    pub(crate) fn interrupt(&self, caster: &Character) -> Option<SkillKey> {
        let (_, cast) = self.casts.remove_if(&caster.id(), |_, cast| {
            if cast.armed {
                caster.set_casting(false);
            }
            cast.armed
        })?;
        cast.token.cancel();
        Some(cast.skill)
    }
}
