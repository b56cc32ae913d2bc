//! Immutable skill definitions.
//!
//! Templates are loaded once by an external collaborator and shared read-only
//! through [`crate::env::SkillTemplateOracle`].
mod template;

pub use template::{AbnormalState, EffectDefinition, SkillTemplate, TargetType};
