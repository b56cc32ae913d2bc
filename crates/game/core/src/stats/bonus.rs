//! Modifier reduction.
//!
//! Additive modifiers are summed first; if any multiplicative modifier exists
//! for the stat, the sum is multiplied by their product. A stat touched by no
//! modifier yields `0.0`.

use super::modifiers::{ModifierOp, Stat, StatModifier};

/// Reduce every modifier targeting `stat` into a single bonus.
///
/// # Example
/// ```
/// # use skill_core::stats::{aggregate, Stat, StatModifier};
/// let mods = [
///     StatModifier::add(Stat::PAtk, 100.0),
///     StatModifier::multiply(Stat::PAtk, 1.5),
///     StatModifier::add(Stat::MAtk, 40.0),
/// ];
/// assert_eq!(aggregate(&mods, Stat::PAtk), 150.0);
/// assert_eq!(aggregate(&mods, Stat::PDef), 0.0);
/// ```
pub fn aggregate<'a>(modifiers: impl IntoIterator<Item = &'a StatModifier>, stat: Stat) -> f64 {
    let mut sum = 0.0;
    let mut product: Option<f64> = None;

    for modifier in modifiers.into_iter().filter(|m| m.stat == stat) {
        match modifier.op {
            ModifierOp::Add => sum += modifier.value,
            ModifierOp::Multiply => *product.get_or_insert(1.0) *= modifier.value,
        }
    }

    match product {
        Some(product) => sum * product,
        None => sum,
    }
}
