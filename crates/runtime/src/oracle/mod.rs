//! In-memory implementations of the `skill-core` collaborator traits.
//!
//! Production servers plug their own template store and spatial index in
//! through the same traits; these back the CLI and the test suites.
mod catalog;
mod world;

pub use catalog::SkillCatalog;
pub use world::WorldRegistry;
