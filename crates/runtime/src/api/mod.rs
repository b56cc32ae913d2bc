//! Public runtime API surface.
//!
//! Error types shared by the cast engine and its builder live here so the
//! orchestration modules stay focused on timing and state.

pub mod errors;

pub use errors::{CastError, Result, RuntimeError};
