//! Stat modifiers contributed by active effects.
//!
//! Effects never write attributes directly. They contribute [`StatModifier`]
//! values which the owning [`crate::EffectManager`] caches and reduces on
//! demand:
//!
//! ```text
//! bonus = Σ additive × Π multiplicative   (Π omitted when no multiplier exists)
//! ```

pub mod bonus;
pub mod modifiers;

pub use bonus::aggregate;
pub use modifiers::{ModifierOp, Stat, StatModifier};
