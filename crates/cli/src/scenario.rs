//! Demo world and the scripted sequence of casts.

use std::time::Duration;

use anyhow::Result;
use skill_core::{
    Character, CharacterKind, ObjectId, Position, SkillId, SkillTemplate, Stat, TargetType,
};
use skill_runtime::{CastManager, WorldRegistry};

const HERO: ObjectId = ObjectId(1);
const GOBLIN: ObjectId = ObjectId(100);

const WIND_STRIKE: SkillId = SkillId(1177);
const HEAL: SkillId = SkillId(1011);
const WEAPON_MASTERY: SkillId = SkillId(228);
const SHOCK_BLOW: SkillId = SkillId(100);
const POISON: SkillId = SkillId(129);
const HEALING_POTION: SkillId = SkillId(2031);

pub fn catalog() -> skill_runtime::SkillCatalog {
    [
        SkillTemplate::new(WIND_STRIKE, 1)
            .named("Wind Strike")
            .mp_consume(30)
            .hit_time(1000)
            .reuse_delay(2000)
            .cast_range(600)
            .target(TargetType::Single)
            .debuff()
            .effect("MagicalDamage", [("power", "10")]),
        SkillTemplate::new(HEAL, 1)
            .named("Heal")
            .mp_consume(30)
            .effect("Heal", [("power", "100")]),
        SkillTemplate::new(WEAPON_MASTERY, 1)
            .named("Weapon Mastery")
            .passive()
            .effect("Buff", [("stat", "pAtk"), ("value", "50")]),
        SkillTemplate::new(SHOCK_BLOW, 1)
            .named("Shock Blow")
            .mp_consume(20)
            .reuse_delay(5000)
            .cast_range(400)
            .target(TargetType::Single)
            .debuff()
            .abnormal("stun", 1, 2)
            .effect("Stun", std::iter::empty()),
        SkillTemplate::new(POISON, 1)
            .named("Poison")
            .mp_consume(15)
            .cast_range(600)
            .target(TargetType::Single)
            .debuff()
            .abnormal("poison", 1, 3)
            .effect("DamageOverTime", [("power", "25")]),
        SkillTemplate::new(HEALING_POTION, 1)
            .named("Healing Potion")
            .reuse_delay(10_000)
            .effect("Heal", [("power", "50")]),
    ]
    .into_iter()
    .collect()
}

pub async fn run(manager: &CastManager, world: &WorldRegistry) -> Result<()> {
    let limits = manager.config().effect_limits();
    let hero = world.spawn(
        Character::builder(HERO, CharacterKind::Player)
            .level(20)
            .vitals(1200, 500)
            .skill(WIND_STRIKE, 1)
            .skill(HEAL, 1)
            .skill(WEAPON_MASTERY, 1)
            .skill(SHOCK_BLOW, 1)
            .skill(POISON, 1)
            .limits(limits)
            .build(),
    );
    let goblin = world.spawn(
        Character::builder(GOBLIN, CharacterKind::Npc)
            .level(15)
            .vitals(800, 0)
            .position(Position::new(300, 0, 0))
            .limits(limits)
            .build(),
    );

    // ========================================================================
    // Passives
    // ========================================================================
    let installed = manager.apply_passives(&hero);
    tracing::info!(
        installed,
        p_atk = hero.effective_stat(Stat::PAtk),
        "Passives applied"
    );

    // ========================================================================
    // Instant casts
    // ========================================================================
    hero.set_hp(900);
    let outcome = manager.use_magic(&hero, HEAL)?;
    tracing::info!(?outcome, hp = hero.hp(), mp = hero.mp(), "Heal cast");

    let outcome = manager.use_item_skill(&hero, HEALING_POTION, 1)?;
    tracing::info!(?outcome, hp = hero.hp(), "Potion used");

    // ========================================================================
    // Delayed cast and cooldown
    // ========================================================================
    hero.set_target(Some(goblin.id()));
    let outcome = manager.use_magic(&hero, WIND_STRIKE)?;
    tracing::info!(?outcome, casting = manager.is_casting(hero.id()), "Wind Strike started");

    tokio::time::sleep(Duration::from_millis(1100)).await;
    tracing::info!(goblin_hp = goblin.hp(), "Wind Strike landed");

    if let Err(e) = manager.use_magic(&hero, WIND_STRIKE) {
        tracing::info!(reason = %e, "Wind Strike rejected");
    }

    // ========================================================================
    // Interrupt
    // ========================================================================
    tokio::time::sleep(Duration::from_millis(1000)).await;
    manager.use_magic(&hero, WIND_STRIKE)?;
    tokio::time::sleep(Duration::from_millis(300)).await;
    let interrupted = manager.interrupt_cast(&hero);
    tokio::time::sleep(Duration::from_millis(1000)).await;
    tracing::info!(interrupted, goblin_hp = goblin.hp(), "Wind Strike interrupted");

    // ========================================================================
    // Continuous effects
    // ========================================================================
    manager.use_magic(&hero, SHOCK_BLOW)?;
    manager.use_magic(&hero, POISON)?;
    for summary in goblin.effects().debuffs() {
        tracing::info!(effect = %summary.kind, remaining_ms = summary.remaining_ms, "Goblin afflicted");
    }

    let mut ticker = tokio::time::interval(Duration::from_secs(1));
    ticker.tick().await;
    for second in 1..=4 {
        ticker.tick().await;
        for character in [&hero, &goblin] {
            character.effects().tick(1000);
        }
        tracing::info!(
            second,
            goblin_hp = goblin.hp(),
            debuffs = goblin.effects().debuffs().len(),
            "Effects ticked"
        );
    }

    for entry in manager.all_cooldowns(hero.id()) {
        tracing::info!(skill = %entry.skill, remaining_ms = entry.remaining_ms, "Cooldown");
    }

    world.despawn(hero.id());
    world.despawn(goblin.id());
    Ok(())
}
