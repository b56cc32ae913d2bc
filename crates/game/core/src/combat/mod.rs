//! Combat damage formulas.
//!
//! This module provides pure functions for computing skill damage. Effects
//! reach them only through the [`CombatFormulas`] trait so callers can swap in
//! the game's balance tables or a fixed-output double in tests.
//!
//! # Core Functions
//!
//! - `magic_damage`: spell damage from M.Atk, M.Def and skill power
//! - `physical_damage`: skill damage from P.Atk, P.Def and skill power
//!
//! Both are deterministic and floor at 1.

pub mod damage;

pub use damage::{CombatFormulas, ShotFlags, StandardFormulas, magic_damage, physical_damage};
