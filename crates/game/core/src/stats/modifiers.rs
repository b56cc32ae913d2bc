//! Stat identifiers and modifier value objects.

/// Character attributes that effects can modify.
///
/// Template data refers to stats by their camelCase name (`pAtk`, `runSpeed`);
/// parsing is case-insensitive.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "camelCase", ascii_case_insensitive)]
pub enum Stat {
    PAtk,
    MAtk,
    PDef,
    MDef,
    MaxHp,
    MaxMp,
    RunSpeed,
    PAtkSpd,
    MAtkSpd,
    Accuracy,
    Evasion,
    CritRate,
    /// Fraction of received damage returned to the attacker.
    Reflect,
}

/// How a modifier combines with the others on the same stat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ModifierOp {
    /// Summed with every other additive modifier.
    Add,
    /// Multiplies the additive sum (e.g. `1.5` = ×1.5).
    Multiply,
}

/// A single adjustment to one stat.
///
/// # Design Pattern: Value Object
/// Modifiers are immutable and order-independent; the reducer in
/// [`super::bonus`] combines any number of them.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatModifier {
    pub stat: Stat,
    pub op: ModifierOp,
    pub value: f64,
}

impl StatModifier {
    /// Create an additive modifier
    pub const fn add(stat: Stat, value: f64) -> Self {
        Self {
            stat,
            op: ModifierOp::Add,
            value,
        }
    }

    /// Create a multiplicative modifier (1.5 = ×1.5)
    pub const fn multiply(stat: Stat, value: f64) -> Self {
        Self {
            stat,
            op: ModifierOp::Multiply,
            value,
        }
    }
}
