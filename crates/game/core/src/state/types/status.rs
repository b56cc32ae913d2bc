//! Crowd-control status flags carried by every character.
//!
//! Flags are set and cleared exclusively by control effects: the start hook
//! raises the flag and the exit hook lowers it.

use bitflags::bitflags;

bitflags! {
    /// Boolean conditions currently imposed on a character.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct StatusFlags: u8 {
        /// Cannot act at all.
        const STUNNED   = 1 << 0;
        /// Cannot move.
        const ROOTED    = 1 << 1;
        /// Cannot act or move.
        const PARALYZED = 1 << 2;
        /// Cannot act until woken.
        const SLEEPING  = 1 << 3;
        /// Runs from the caster.
        const FEARED    = 1 << 4;
    }
}
