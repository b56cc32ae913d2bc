//! Instant HP/MP restoration and HP drain.

use super::context::EffectContext;
use super::damage::{DamageSchool, strike};
use super::params::EffectParams;

fn amount(power: f64) -> u32 {
    power.max(0.0).floor() as u32
}

/// Restores target HP by `power`, clamped to max HP. Dead targets are skipped.
#[derive(Clone, Debug, PartialEq)]
pub struct HealEffect {
    pub power: f64,
}

impl HealEffect {
    pub fn from_params(params: &EffectParams) -> Self {
        Self {
            power: params.get_f64("power"),
        }
    }

    pub fn on_start(&self, ctx: &EffectContext<'_>) {
        let Some(target) = ctx.resolve_target() else {
            return;
        };
        let healed = target.restore_hp(amount(self.power));
        tracing::debug!(target = %ctx.target, healed, "heal applied");
    }
}

/// Restores target MP by `power`, clamped to max MP.
#[derive(Clone, Debug, PartialEq)]
pub struct MpHealEffect {
    pub power: f64,
}

impl MpHealEffect {
    pub fn from_params(params: &EffectParams) -> Self {
        Self {
            power: params.get_f64("power"),
        }
    }

    pub fn on_start(&self, ctx: &EffectContext<'_>) {
        let Some(target) = ctx.resolve_target() else {
            return;
        };
        let restored = target.restore_mp(amount(self.power));
        tracing::debug!(target = %ctx.target, restored, "mp heal applied");
    }
}

/// Magical damage to the target; the caster heals by `absorb_part` of the
/// damage actually dealt.
#[derive(Clone, Debug, PartialEq)]
pub struct HpDrainEffect {
    pub power: f64,
    pub absorb_part: f64,
}

impl HpDrainEffect {
    pub fn from_params(params: &EffectParams) -> Self {
        Self {
            power: params.get_f64("power"),
            absorb_part: params.get_f64("absorbPart"),
        }
    }

    pub fn on_start(&self, ctx: &EffectContext<'_>) {
        let Some(hit) = strike(ctx, DamageSchool::Magical, self.power) else {
            return;
        };
        let drained = hit
            .caster
            .restore_hp(amount(f64::from(hit.dealt) * self.absorb_part));
        tracing::debug!(
            caster = %ctx.caster,
            target = %ctx.target,
            damage = hit.dealt,
            drained,
            "hp drained"
        );
    }
}

#[cfg(test)]
mod tests {
    use crate::effect::EffectKind;
    use crate::state::{Character, CharacterKind, ObjectId};
    use crate::testing::{Fixture, build};

    #[test]
    fn heal_never_exceeds_max() {
        let fx = Fixture::new();
        let caster = fx.spawn(1, CharacterKind::Player);
        let target = fx.spawn(2, CharacterKind::Player);
        target.set_hp(900);

        build(EffectKind::Heal, &[("power", "5000")]).on_start(&fx.context(&caster, &target));
        assert_eq!(target.hp(), 1000);
    }

    #[test]
    fn heal_skips_dead_target() {
        let fx = Fixture::new();
        let caster = fx.spawn(1, CharacterKind::Player);
        let target = fx.spawn(2, CharacterKind::Player);
        target.set_hp(0);

        build(EffectKind::Heal, &[("power", "100")]).on_start(&fx.context(&caster, &target));
        assert_eq!(target.hp(), 0);
        assert!(target.is_dead());
    }

    #[test]
    fn mp_heal_has_no_death_gate() {
        let fx = Fixture::new();
        let caster = fx.spawn(1, CharacterKind::Player);
        let target = fx.spawn(2, CharacterKind::Player);
        target.set_mp(100);
        target.set_hp(0);

        build(EffectKind::MpHeal, &[("power", "1000")]).on_start(&fx.context(&caster, &target));
        assert_eq!(target.mp(), 500);
    }

    #[test]
    fn drain_heals_caster_by_fraction_of_damage() {
        let fx = Fixture::new();
        let caster = fx.spawn_with(
            Character::builder(ObjectId(1), CharacterKind::Npc)
                .level(0)
                .build(),
        );
        let target = fx.spawn(2, CharacterKind::Npc);
        caster.set_hp(500);

        // 91 damage at level 0, half of it absorbed
        build(EffectKind::HpDrain, &[("power", "10"), ("absorbPart", "0.5")])
            .on_start(&fx.context(&caster, &target));
        assert_eq!(target.hp(), 909);
        assert_eq!(caster.hp(), 545);
    }

    #[test]
    fn drain_heal_is_clamped() {
        let fx = Fixture::new();
        let caster = fx.spawn(1, CharacterKind::Npc);
        let target = fx.spawn(2, CharacterKind::Npc);
        caster.set_hp(990);

        build(EffectKind::HpDrain, &[("power", "10"), ("absorbPart", "1")])
            .on_start(&fx.context(&caster, &target));
        assert_eq!(caster.hp(), 1000);
    }
}
