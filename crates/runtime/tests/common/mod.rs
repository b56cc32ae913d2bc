//! Shared harness for the runtime integration tests.
#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use skill_core::{
    Character, CharacterKind, ObjectId, Position, SkillId, SkillTemplate, TargetType,
};
use skill_runtime::{
    CastEvent, CastManager, Delivery, EngineConfig, PacketSink, Recipient, SkillCatalog,
    WorldRegistry,
};

// ============================================================================
// Skills
// ============================================================================

pub const WIND_STRIKE: SkillId = SkillId(1177);
pub const HEAL: SkillId = SkillId(1011);
pub const PASSIVE_MASTERY: SkillId = SkillId(228);
pub const SHOCK_BLOW: SkillId = SkillId(100);
pub const BLOOD_PACT: SkillId = SkillId(9001);
pub const POTION_HEAL: SkillId = SkillId(2031);
pub const SURGE: SkillId = SkillId(1230);
pub const FLASH: SkillId = SkillId(1400);
pub const FIRE_NOVA: SkillId = SkillId(1285);
pub const MANA_GIFT: SkillId = SkillId(1013);
pub const SHORT_BURST: SkillId = SkillId(1239);

pub fn catalog() -> SkillCatalog {
    SkillCatalog::new()
        // delayed single-target nuke: 1s hit time, 2s cooldown
        .with(
            SkillTemplate::new(WIND_STRIKE, 1)
                .named("Wind Strike")
                .mp_consume(30)
                .hit_time(1000)
                .reuse_delay(2000)
                .cast_range(600)
                .target(TargetType::Single)
                .debuff()
                .effect("MagicalDamage", [("power", "10")]),
        )
        // instant self heal, no cooldown
        .with(
            SkillTemplate::new(HEAL, 1)
                .named("Heal")
                .mp_consume(30)
                .effect("Heal", [("power", "100")]),
        )
        .with(
            SkillTemplate::new(PASSIVE_MASTERY, 1)
                .named("Weapon Mastery")
                .passive()
                .effect("Buff", [("stat", "pAtk"), ("value", "50")]),
        )
        // instant stun with a 5s cooldown
        .with(
            SkillTemplate::new(SHOCK_BLOW, 1)
                .named("Shock Blow")
                .mp_consume(20)
                .reuse_delay(5000)
                .cast_range(100)
                .target(TargetType::Single)
                .debuff()
                .abnormal("stun", 1, 9)
                .effect("Stun", std::iter::empty()),
        )
        .with(
            SkillTemplate::new(BLOOD_PACT, 1)
                .named("Blood Pact")
                .hp_consume(200)
                .effect("MpHeal", [("power", "100")]),
        )
        .with(
            SkillTemplate::new(POTION_HEAL, 1)
                .named("Healing Potion")
                .reuse_delay(1000)
                .effect("Heal", [("power", "50")]),
        )
        // delayed self skill without cooldown
        .with(
            SkillTemplate::new(SURGE, 1)
                .named("Surge")
                .mp_consume(10)
                .hit_time(1000)
                .effect("MpHeal", [("power", "5")]),
        )
        // 1ms hit time for racing completion against interrupts
        .with(
            SkillTemplate::new(FLASH, 1)
                .named("Flash")
                .hit_time(1)
                .effect("MpHeal", [("power", "1")]),
        )
        // one unregistered effect name between two known ones
        .with(
            SkillTemplate::new(FIRE_NOVA, 1)
                .named("Fire Nova")
                .mp_consume(40)
                .cast_range(600)
                .target(TargetType::Single)
                .debuff()
                .abnormal("speed_down", 2, 30)
                .effect("MagicalDamage", [("power", "10")])
                .effect("Meteor", [("power", "999")])
                .effect("SpeedChange", [("value", "-20")]),
        )
        // instant mana transfer to the selected target
        .with(
            SkillTemplate::new(MANA_GIFT, 1)
                .named("Mana Gift")
                .mp_consume(10)
                .cast_range(600)
                .target(TargetType::Single)
                .effect("MpHeal", [("power", "100")]),
        )
        // instant nuke whose effect range is shorter than its cast range
        .with(
            SkillTemplate::new(SHORT_BURST, 1)
                .named("Short Burst")
                .mp_consume(10)
                .cast_range(600)
                .effect_range(100)
                .target(TargetType::Single)
                .debuff()
                .effect("MagicalDamage", [("power", "10")]),
        )
}

// ============================================================================
// Sink
// ============================================================================

/// Records every delivery in emission order.
#[derive(Default)]
pub struct RecordingSink {
    deliveries: Mutex<Vec<Delivery>>,
}

impl RecordingSink {
    pub fn deliveries(&self) -> Vec<Delivery> {
        self.deliveries.lock().clone()
    }

    /// Events sent to `player`'s own client.
    pub fn direct(&self, player: ObjectId) -> Vec<CastEvent> {
        self.deliveries
            .lock()
            .iter()
            .filter(|d| d.recipient == Recipient::Player(player))
            .map(|d| d.event.clone())
            .collect()
    }

    /// Labels of the events sent to `player`'s own client.
    pub fn labels(&self, player: ObjectId) -> Vec<&'static str> {
        self.direct(player).iter().map(CastEvent::label).collect()
    }

    pub fn count(&self, player: ObjectId, label: &str) -> usize {
        self.labels(player).into_iter().filter(|l| *l == label).count()
    }

    pub fn is_empty(&self) -> bool {
        self.deliveries.lock().is_empty()
    }

    pub fn clear(&self) {
        self.deliveries.lock().clear();
    }
}

impl PacketSink for RecordingSink {
    fn send_to_player(&self, player: ObjectId, event: &CastEvent) {
        self.deliveries.lock().push(Delivery {
            recipient: Recipient::Player(player),
            event: event.clone(),
        });
    }

    fn broadcast_near(&self, source: ObjectId, event: &CastEvent) {
        self.deliveries.lock().push(Delivery {
            recipient: Recipient::Near(source),
            event: event.clone(),
        });
    }
}

// ============================================================================
// Harness
// ============================================================================

pub struct Harness {
    pub manager: CastManager,
    pub world: Arc<WorldRegistry>,
    pub sink: Arc<RecordingSink>,
}

impl Harness {
    /// Must be called from inside a tokio runtime.
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    pub fn with_config(config: EngineConfig) -> Self {
        let world = Arc::new(WorldRegistry::new());
        let sink = Arc::new(RecordingSink::default());
        let manager = CastManager::builder()
            .config(config)
            .templates(Arc::new(catalog()))
            .world(world.clone())
            .sink(sink.clone())
            .build()
            .expect("cast manager should build inside a runtime");
        Self {
            manager,
            world,
            sink,
        }
    }

    /// Player at `x` on the x axis knowing every test skill at level 1.
    pub fn player(&self, id: u32, x: i32) -> Arc<Character> {
        let mut builder = Character::builder(ObjectId(id), CharacterKind::Player)
            .position(Position::new(x, 0, 0))
            .limits(self.manager.config().effect_limits());
        for skill in [
            WIND_STRIKE,
            HEAL,
            PASSIVE_MASTERY,
            SHOCK_BLOW,
            BLOOD_PACT,
            SURGE,
            MANA_GIFT,
            SHORT_BURST,
        ] {
            builder = builder.skill(skill, 1);
        }
        self.world.spawn(builder.build())
    }

    pub fn npc(&self, id: u32, x: i32) -> Arc<Character> {
        self.world.spawn(
            Character::builder(ObjectId(id), CharacterKind::Npc)
                .position(Position::new(x, 0, 0))
                .limits(self.manager.config().effect_limits())
                .build(),
        )
    }
}

/// Lets the virtual clock run for `ms` and drains ready tasks.
pub async fn settle(ms: u64) {
    tokio::time::sleep(Duration::from_millis(ms)).await;
    for _ in 0..4 {
        tokio::task::yield_now().await;
    }
}
