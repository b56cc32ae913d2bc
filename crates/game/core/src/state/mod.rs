//! World objects skills are cast by and applied to.
//!
//! Identifiers, positions and the shared [`Character`] type live here. Spatial
//! lookup is not owned by this crate: characters are reached through the
//! [`crate::env::WorldResolver`] collaborator.
pub mod types;

pub use types::{
    Character, CharacterBuilder, CharacterKind, CharacterState, CombatStats, ObjectId, Position,
    ResourceShortfall, SkillId, SkillKey, StatusFlags,
};
