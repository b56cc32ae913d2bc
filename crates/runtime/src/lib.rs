//! Runtime orchestration for the skill-casting engine.
//!
//! This crate wires the synchronous rules of `skill-core` to a tokio runtime:
//! cooldown and in-flight cast registries, cancellable delayed completion and
//! the notification seam. Consumers build a [`CastManager`] from the
//! collaborator traits and call it from any task or thread.
//!
//! Modules are organized by responsibility:
//! - [`cast`] hosts the cast manager and its builder
//! - [`api`] exposes the error types downstream clients interact with
//! - [`events`] defines cast notifications, the sink seam and a broadcast bus
//! - [`oracle`] provides in-memory collaborator implementations
//! - [`config`] holds engine tunables and their loaders
pub mod api;
pub mod cast;
pub mod config;
pub mod events;
pub mod oracle;

pub use api::{CastError, Result, RuntimeError};
pub use cast::{CastManager, CastManagerBuilder, CastOutcome, CooldownEntry};
pub use config::EngineConfig;
pub use events::{CastEvent, Delivery, EventBus, PacketSink, Recipient, Topic};
pub use oracle::{SkillCatalog, WorldRegistry};
