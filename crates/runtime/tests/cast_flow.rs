//! End-to-end cast requests against an in-memory world.
//!
//! Every test runs on a paused tokio clock so hit times and cooldowns elapse
//! deterministically.

mod common;

use common::{
    BLOOD_PACT, HEAL, Harness, MANA_GIFT, PASSIVE_MASTERY, POTION_HEAL, SHOCK_BLOW, SHORT_BURST,
    WIND_STRIKE, settle,
};
use skill_core::{ObjectId, Position, SkillId, SkillKey};
use skill_runtime::{CastError, CastEvent, CastOutcome, CooldownEntry, EngineConfig, Recipient};

// ============================================================================
// Instant casts
// ============================================================================

/// A 30 MP instant skill used by a player with 500 MP costs exactly 30 MP,
/// lands immediately and produces one use and one launch notification.
#[tokio::test(start_paused = true)]
async fn instant_cast_deducts_mp_and_notifies_once() {
    let h = Harness::new();
    let player = h.player(1, 0);
    player.set_hp(500);

    let outcome = h.manager.use_magic(&player, HEAL).expect("heal should be accepted");

    assert_eq!(outcome, CastOutcome::Launched);
    assert_eq!(player.mp(), 470);
    assert_eq!(player.hp(), 600);
    assert_eq!(h.sink.labels(player.id()), vec!["skill_use", "skill_launched"]);
    assert!(h.manager.all_cooldowns(player.id()).is_empty());
    assert!(!h.manager.is_casting(player.id()));
}

#[tokio::test(start_paused = true)]
async fn notifications_reach_client_and_observers() {
    let h = Harness::new();
    let player = h.player(1, 0);
    h.manager.use_magic(&player, HEAL).expect("heal should be accepted");

    let deliveries = h.sink.deliveries();
    assert_eq!(deliveries.len(), 4);
    assert_eq!(deliveries[0].recipient, Recipient::Player(player.id()));
    assert_eq!(deliveries[1].recipient, Recipient::Near(player.id()));
    assert_eq!(
        deliveries[0].event,
        CastEvent::SkillUse {
            caster: player.id(),
            target: player.id(),
            skill: SkillKey::new(HEAL, 1),
            hit_time_ms: 0,
            reuse_delay_ms: 0,
        }
    );
}

#[tokio::test(start_paused = true)]
async fn npc_casts_only_broadcast() {
    let h = Harness::new();
    let npc = h.npc(50, 0);
    npc.learn_skill(HEAL, 1);

    h.manager.use_magic(&npc, HEAL).expect("heal should be accepted");

    let deliveries = h.sink.deliveries();
    assert_eq!(deliveries.len(), 2);
    assert!(deliveries.iter().all(|d| d.recipient == Recipient::Near(npc.id())));
}

#[tokio::test(start_paused = true)]
async fn instant_debuff_lands_on_selected_target() {
    let h = Harness::new();
    let player = h.player(1, 0);
    let npc = h.npc(2, 50);
    player.set_target(Some(npc.id()));

    h.manager.use_magic(&player, SHOCK_BLOW).expect("stun should be accepted");

    assert_eq!(npc.effects().debuffs().len(), 1);
    assert!(npc.effects().has_abnormal("stun"));
    assert!(player.effects().is_empty());
}

/// Instant casts skip completion-time target checks; each effect decides
/// whether a dead target takes it.
#[tokio::test(start_paused = true)]
async fn instant_mp_heal_reaches_dead_ally() {
    let h = Harness::new();
    let player = h.player(1, 0);
    let ally = h.player(2, 200);
    ally.set_mp(100);
    ally.set_hp(0);
    player.set_target(Some(ally.id()));

    assert_eq!(
        h.manager.use_magic(&player, MANA_GIFT),
        Ok(CastOutcome::Launched)
    );
    assert_eq!(player.mp(), 490);
    assert_eq!(ally.mp(), 200);
    assert_eq!(h.sink.labels(player.id()), vec!["skill_use", "skill_launched"]);
}

#[tokio::test(start_paused = true)]
async fn instant_cast_ignores_effect_range() {
    let h = Harness::new();
    let player = h.player(1, 0);
    let npc = h.npc(2, 300);
    player.set_target(Some(npc.id()));

    assert_eq!(
        h.manager.use_magic(&player, SHORT_BURST),
        Ok(CastOutcome::Launched)
    );
    assert_eq!(player.mp(), 490);
    assert_eq!(npc.hp(), 1000 - 91);
    assert_eq!(h.sink.labels(player.id()), vec!["skill_use", "skill_launched"]);
}

// ============================================================================
// Rejections
// ============================================================================

/// Passive skills cannot be cast; nothing is deducted and nothing is sent.
#[tokio::test(start_paused = true)]
async fn passive_skill_is_rejected() {
    let h = Harness::new();
    let player = h.player(1, 0);

    let err = h.manager.use_magic(&player, PASSIVE_MASTERY).unwrap_err();

    assert_eq!(err, CastError::Passive);
    assert_eq!(player.mp(), 500);
    assert!(h.sink.is_empty());
}

#[tokio::test(start_paused = true)]
async fn unknown_skills_are_rejected() {
    let h = Harness::new();
    let player = h.player(1, 0);

    assert_eq!(
        h.manager.use_magic(&player, SkillId(4242)).unwrap_err(),
        CastError::NotLearned
    );

    // Learned at a level the catalog does not define.
    player.learn_skill(HEAL, 7);
    assert_eq!(
        h.manager.use_magic(&player, HEAL).unwrap_err(),
        CastError::TemplateNotFound
    );
    assert!(h.sink.is_empty());
}

#[tokio::test(start_paused = true)]
async fn insufficient_resources_are_rejected() {
    let h = Harness::new();
    let player = h.player(1, 0);

    player.set_mp(20);
    assert_eq!(
        h.manager.use_magic(&player, HEAL).unwrap_err(),
        CastError::NotEnoughMp
    );
    assert_eq!(player.mp(), 20);

    // HP cost must leave the caster alive.
    player.set_hp(200);
    assert_eq!(
        h.manager.use_magic(&player, BLOOD_PACT).unwrap_err(),
        CastError::NotEnoughHp
    );
    assert_eq!(player.hp(), 200);
    assert!(h.sink.is_empty());

    player.set_hp(201);
    h.manager
        .use_magic(&player, BLOOD_PACT)
        .expect("201 HP covers a 200 HP cost");
    assert_eq!(player.hp(), 1);
    assert_eq!(player.mp(), 120);
}

#[tokio::test(start_paused = true)]
async fn dead_caster_is_rejected() {
    let h = Harness::new();
    let player = h.player(1, 0);
    player.set_hp(0);

    assert_eq!(h.manager.use_magic(&player, HEAL).unwrap_err(), CastError::Dead);
    assert_eq!(player.mp(), 500);
}

#[tokio::test(start_paused = true)]
async fn resource_checks_precede_death_check() {
    let h = Harness::new();
    let player = h.player(1, 0);
    player.set_hp(0);
    player.set_mp(0);

    assert_eq!(
        h.manager.use_magic(&player, HEAL).unwrap_err(),
        CastError::NotEnoughMp
    );
}

#[tokio::test(start_paused = true)]
async fn out_of_range_target_is_rejected() {
    let h = Harness::new();
    let player = h.player(1, 0);
    let npc = h.npc(2, 700);
    player.set_target(Some(npc.id()));

    assert_eq!(
        h.manager.use_magic(&player, WIND_STRIKE).unwrap_err(),
        CastError::OutOfRange
    );
    assert_eq!(player.mp(), 500);
    assert!(!h.manager.is_casting(player.id()));

    npc.set_position(Position::new(600, 0, 0));
    assert_eq!(
        h.manager.use_magic(&player, WIND_STRIKE),
        Ok(CastOutcome::Casting { hit_time_ms: 1000 })
    );
}

#[tokio::test(start_paused = true)]
async fn unresolvable_target_follows_range_policy() {
    let open = Harness::new();
    let player = open.player(1, 0);
    player.set_target(Some(ObjectId(99)));
    open.manager
        .use_magic(&player, SHOCK_BLOW)
        .expect("fail-open accepts an unknown target");
    // Nothing to land on, but an instant cast still launches.
    assert_eq!(
        open.sink.labels(player.id()),
        vec!["skill_use", "skill_launched"]
    );
    assert_eq!(player.mp(), 480);

    let closed = Harness::with_config(EngineConfig {
        fail_closed_range: true,
        ..EngineConfig::default()
    });
    let player = closed.player(1, 0);
    player.set_target(Some(ObjectId(99)));
    assert_eq!(
        closed.manager.use_magic(&player, SHOCK_BLOW).unwrap_err(),
        CastError::TargetNotFound
    );
    assert_eq!(player.mp(), 500);
}

// ============================================================================
// Cooldowns
// ============================================================================

#[tokio::test(start_paused = true)]
async fn cooldown_blocks_until_reuse_delay_elapses() {
    let h = Harness::new();
    let player = h.player(1, 0);

    h.manager.use_magic(&player, SHOCK_BLOW).expect("first cast");
    assert!(h.manager.is_on_cooldown(player.id(), SHOCK_BLOW));
    assert_eq!(
        h.manager.use_magic(&player, SHOCK_BLOW).unwrap_err(),
        CastError::OnCooldown { remaining_ms: 5000 }
    );
    assert_eq!(player.mp(), 480);

    settle(4999).await;
    assert!(matches!(
        h.manager.use_magic(&player, SHOCK_BLOW),
        Err(CastError::OnCooldown { remaining_ms: 1 })
    ));

    settle(1).await;
    assert!(!h.manager.is_on_cooldown(player.id(), SHOCK_BLOW));
    h.manager
        .use_magic(&player, SHOCK_BLOW)
        .expect("cast after the reuse delay");
    assert_eq!(player.mp(), 460);
}

#[tokio::test(start_paused = true)]
async fn cooldowns_are_per_caster_and_listed() {
    let h = Harness::new();
    let first = h.player(1, 0);
    let second = h.player(2, 0);

    h.manager.use_magic(&first, SHOCK_BLOW).expect("stun");
    settle(1000).await;
    assert_eq!(
        h.manager.use_magic(&first, POTION_HEAL).unwrap_err(),
        CastError::NotLearned
    );
    h.manager
        .use_item_skill(&first, POTION_HEAL, 1)
        .expect("potion");

    assert_eq!(
        h.manager.all_cooldowns(first.id()),
        vec![
            CooldownEntry {
                skill: SHOCK_BLOW,
                remaining_ms: 4000,
            },
            CooldownEntry {
                skill: POTION_HEAL,
                remaining_ms: 1000,
            },
        ]
    );
    assert!(h.manager.all_cooldowns(second.id()).is_empty());
    h.manager
        .use_magic(&second, SHOCK_BLOW)
        .expect("another caster is not affected");

    settle(1000).await;
    assert_eq!(h.manager.all_cooldowns(first.id()).len(), 1);
}

#[tokio::test(start_paused = true)]
async fn item_skill_needs_no_learning() {
    let h = Harness::new();
    let player = h.player(1, 0);
    player.set_hp(100);

    assert_eq!(
        h.manager.use_magic(&player, POTION_HEAL).unwrap_err(),
        CastError::NotLearned
    );
    assert_eq!(
        h.manager.use_item_skill(&player, POTION_HEAL, 1),
        Ok(CastOutcome::Launched)
    );
    assert_eq!(player.hp(), 150);
    assert_eq!(
        h.manager.use_item_skill(&player, POTION_HEAL, 1).unwrap_err(),
        CastError::OnCooldown { remaining_ms: 1000 }
    );
    assert_eq!(
        h.manager.use_item_skill(&player, POTION_HEAL, 2).unwrap_err(),
        CastError::TemplateNotFound
    );
}

// ============================================================================
// Delayed casts
// ============================================================================

#[tokio::test(start_paused = true)]
async fn delayed_cast_lands_after_hit_time() {
    let h = Harness::new();
    let player = h.player(1, 0);
    let npc = h.npc(2, 300);
    player.set_target(Some(npc.id()));

    let outcome = h.manager.use_magic(&player, WIND_STRIKE).expect("nuke");

    // Costs and cooldown are committed when the cast starts.
    assert_eq!(outcome, CastOutcome::Casting { hit_time_ms: 1000 });
    assert_eq!(player.mp(), 470);
    assert!(h.manager.is_on_cooldown(player.id(), WIND_STRIKE));
    assert!(h.manager.is_casting(player.id()));
    assert!(player.is_casting());
    assert_eq!(
        h.manager.current_cast(player.id()),
        Some(SkillKey::new(WIND_STRIKE, 1))
    );
    assert_eq!(h.sink.labels(player.id()), vec!["skill_use"]);

    settle(999).await;
    assert_eq!(npc.hp(), 1000);
    assert!(h.manager.is_casting(player.id()));

    settle(2).await;
    assert_eq!(npc.hp(), 1000 - 91);
    assert!(!h.manager.is_casting(player.id()));
    assert!(!player.is_casting());
    assert_eq!(h.sink.labels(player.id()), vec!["skill_use", "skill_launched"]);
}

#[tokio::test(start_paused = true)]
async fn second_cast_while_casting_is_rejected() {
    let h = Harness::new();
    let player = h.player(1, 0);

    h.manager.use_magic(&player, WIND_STRIKE).expect("nuke");
    assert_eq!(
        h.manager.use_magic(&player, HEAL).unwrap_err(),
        CastError::AlreadyCasting
    );
    assert_eq!(player.mp(), 470);

    settle(1001).await;
    h.manager
        .use_magic(&player, HEAL)
        .expect("slot is free after completion");
}

#[tokio::test(start_paused = true)]
async fn target_leaving_range_during_cast_takes_nothing() {
    let h = Harness::new();
    let player = h.player(1, 0);
    let npc = h.npc(2, 300);
    player.set_target(Some(npc.id()));

    h.manager.use_magic(&player, WIND_STRIKE).expect("nuke");
    npc.set_position(Position::new(900, 0, 0));
    settle(1001).await;

    assert_eq!(npc.hp(), 1000);
    assert!(!h.manager.is_casting(player.id()));
    assert_eq!(h.sink.labels(player.id()), vec!["skill_use"]);
}

#[tokio::test(start_paused = true)]
async fn despawned_or_dead_target_takes_nothing() {
    let h = Harness::new();
    let player = h.player(1, 0);
    let npc = h.npc(2, 300);
    player.set_target(Some(npc.id()));

    h.manager.use_magic(&player, WIND_STRIKE).expect("nuke");
    h.world.despawn(npc.id());
    settle(1001).await;
    assert_eq!(npc.hp(), 1000);

    settle(2000).await;
    let npc = h.npc(3, 300);
    player.set_target(Some(npc.id()));
    h.manager.use_magic(&player, WIND_STRIKE).expect("nuke");
    npc.set_hp(0);
    settle(1001).await;

    assert_eq!(h.sink.count(player.id(), "skill_launched"), 0);
    assert!(!h.manager.is_casting(player.id()));
}
