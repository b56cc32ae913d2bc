//! Damage calculation.

use bitflags::bitflags;

bitflags! {
    /// Shot charges consumed by the attack.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct ShotFlags: u8 {
        const SOULSHOT           = 1 << 0;
        const SPIRITSHOT         = 1 << 1;
        const BLESSED_SPIRITSHOT = 1 << 2;
    }
}

// ============================================================================
// Balance Parameters
// ============================================================================

const MAGIC_BASE: f64 = 91.0;
const PHYSICAL_BASE: f64 = 70.0;
const MAGIC_CRIT_MULTIPLIER: f64 = 3.0;
const PHYSICAL_CRIT_MULTIPLIER: f64 = 2.0;
const PVP_MULTIPLIER: f64 = 0.8;
/// Extra damage per attacker level, applied to magic only.
const MAGIC_LEVEL_SCALE: f64 = 0.005;
const MINIMUM_DAMAGE: i32 = 1;

fn to_damage(raw: f64) -> i32 {
    if raw.is_finite() {
        (raw.floor() as i32).max(MINIMUM_DAMAGE)
    } else {
        MINIMUM_DAMAGE
    }
}

/// Calculate magic skill damage.
///
/// # Formula
///
/// ```text
/// shot   = 4 (blessed spiritshot) | 2 (spiritshot) | 1
/// damage = 91 × √(m_atk × shot) × power / m_def
///        × (1 + level × 0.005)
///        × 3   if critical
///        × 0.8 if PvP
/// final  = max(floor(damage), 1)
/// ```
pub fn magic_damage(
    attack: f64,
    defense: f64,
    power: f64,
    shots: ShotFlags,
    is_crit: bool,
    is_pvp: bool,
    attacker_level: u32,
) -> i32 {
    let shot = if shots.contains(ShotFlags::BLESSED_SPIRITSHOT) {
        4.0
    } else if shots.contains(ShotFlags::SPIRITSHOT) {
        2.0
    } else {
        1.0
    };

    let mut damage = MAGIC_BASE * (attack.max(0.0) * shot).sqrt() * power / defense.max(1.0);
    damage *= 1.0 + f64::from(attacker_level) * MAGIC_LEVEL_SCALE;
    if is_crit {
        damage *= MAGIC_CRIT_MULTIPLIER;
    }
    if is_pvp {
        damage *= PVP_MULTIPLIER;
    }

    to_damage(damage)
}

/// Calculate physical skill damage.
///
/// # Formula
///
/// ```text
/// shot   = 2 (soulshot) | 1
/// damage = 70 × (p_atk × shot + power) / p_def
///        × 2   if critical
///        × 0.8 if PvP
/// final  = max(floor(damage), 1)
/// ```
pub fn physical_damage(
    attack: f64,
    defense: f64,
    power: f64,
    shots: ShotFlags,
    is_crit: bool,
    is_pvp: bool,
) -> i32 {
    let shot = if shots.contains(ShotFlags::SOULSHOT) {
        2.0
    } else {
        1.0
    };

    let mut damage = PHYSICAL_BASE * (attack.max(0.0) * shot + power) / defense.max(1.0);
    if is_crit {
        damage *= PHYSICAL_CRIT_MULTIPLIER;
    }
    if is_pvp {
        damage *= PVP_MULTIPLIER;
    }

    to_damage(damage)
}

/// Damage formulas consumed by damage effects.
pub trait CombatFormulas: Send + Sync {
    #[allow(clippy::too_many_arguments)]
    fn magic_damage(
        &self,
        attack: f64,
        defense: f64,
        power: f64,
        shots: ShotFlags,
        is_crit: bool,
        is_pvp: bool,
        attacker_level: u32,
    ) -> i32;

    fn physical_damage(
        &self,
        attack: f64,
        defense: f64,
        power: f64,
        shots: ShotFlags,
        is_crit: bool,
        is_pvp: bool,
    ) -> i32;
}

/// The default balance: [`magic_damage`] and [`physical_damage`].
#[derive(Clone, Copy, Debug, Default)]
pub struct StandardFormulas;

impl CombatFormulas for StandardFormulas {
    #[allow(clippy::too_many_arguments)]
    fn magic_damage(
        &self,
        attack: f64,
        defense: f64,
        power: f64,
        shots: ShotFlags,
        is_crit: bool,
        is_pvp: bool,
        attacker_level: u32,
    ) -> i32 {
        magic_damage(attack, defense, power, shots, is_crit, is_pvp, attacker_level)
    }

    fn physical_damage(
        &self,
        attack: f64,
        defense: f64,
        power: f64,
        shots: ShotFlags,
        is_crit: bool,
        is_pvp: bool,
    ) -> i32 {
        physical_damage(attack, defense, power, shots, is_crit, is_pvp)
    }
}
