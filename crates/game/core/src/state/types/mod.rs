pub mod character;
pub mod common;
pub mod status;

pub use character::{
    Character, CharacterBuilder, CharacterKind, CharacterState, CombatStats, ResourceShortfall,
};
pub use common::{ObjectId, Position, SkillId, SkillKey};
pub use status::StatusFlags;
