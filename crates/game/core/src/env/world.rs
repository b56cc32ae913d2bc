use std::sync::Arc;

use crate::state::{Character, ObjectId};

/// Resolves object identifiers to live world objects.
///
/// Implementations must be cheap and must not hold internal locks after
/// returning; hooks call this while an [`crate::EffectManager`] is locked.
pub trait WorldResolver: Send + Sync {
    /// Returns the object if it is currently present in the world.
    fn resolve(&self, id: ObjectId) -> Option<Arc<Character>>;
}
