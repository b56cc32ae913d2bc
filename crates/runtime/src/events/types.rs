//! Cast notifications and their routing.

use serde::{Deserialize, Serialize};
use skill_core::{ObjectId, SkillKey};

/// Notification emitted by the cast engine.
///
/// Payload encoding belongs to the [`super::PacketSink`] implementation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CastEvent {
    /// Cast accepted; clients start the cast bar and animation.
    SkillUse {
        caster: ObjectId,
        target: ObjectId,
        skill: SkillKey,
        hit_time_ms: u64,
        reuse_delay_ms: u64,
    },
    /// Effects have been applied.
    SkillLaunched {
        caster: ObjectId,
        target: ObjectId,
        skill: SkillKey,
    },
    /// An in-flight cast was interrupted.
    SkillCanceled { caster: ObjectId },
}

impl CastEvent {
    pub fn caster(&self) -> ObjectId {
        match self {
            Self::SkillUse { caster, .. }
            | Self::SkillLaunched { caster, .. }
            | Self::SkillCanceled { caster } => *caster,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::SkillUse { .. } => "skill_use",
            Self::SkillLaunched { .. } => "skill_launched",
            Self::SkillCanceled { .. } => "skill_canceled",
        }
    }
}

/// Who a notification is addressed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "scope", content = "object", rename_all = "snake_case")]
pub enum Recipient {
    /// The player's own client.
    Player(ObjectId),
    /// Observers near the source object.
    Near(ObjectId),
}

/// A routed notification as published on the [`super::EventBus`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Delivery {
    pub recipient: Recipient,
    pub event: CastEvent,
}
