/// Capacity limits applied by every [`crate::EffectManager`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EffectLimits {
    /// Maximum number of simultaneously held buffs.
    pub max_buffs: usize,
    /// Maximum number of simultaneously held debuffs.
    pub max_debuffs: usize,
}

impl EffectLimits {
    // ===== runtime-tunable defaults =====
    pub const DEFAULT_MAX_BUFFS: usize = 24;
    pub const DEFAULT_MAX_DEBUFFS: usize = 8;

    pub const fn new(max_buffs: usize, max_debuffs: usize) -> Self {
        Self {
            max_buffs,
            max_debuffs,
        }
    }
}

impl Default for EffectLimits {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_BUFFS, Self::DEFAULT_MAX_DEBUFFS)
    }
}
