//! Shared character objects (players and NPCs).
//!
//! A [`Character`] is reached concurrently from many casts, from the combat
//! layer and from the tick driver. Vitals sit behind one short-lived lock and
//! the effect collections behind the [`EffectManager`]'s own lock, so two
//! different characters never contend with each other.

use std::collections::HashMap;

use parking_lot::RwLock;

use super::common::{ObjectId, Position, SkillId, SkillKey};
use super::status::StatusFlags;
use crate::config::EffectLimits;
use crate::effect::EffectManager;
use crate::stats::Stat;

/// Whether a character is controlled by a connected client.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CharacterKind {
    Player,
    Npc,
}

/// Base combat attributes before any effect bonus.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatStats {
    pub p_atk: f64,
    pub m_atk: f64,
    pub p_def: f64,
    pub m_def: f64,
}

impl Default for CombatStats {
    fn default() -> Self {
        Self {
            p_atk: 100.0,
            m_atk: 100.0,
            p_def: 100.0,
            m_def: 100.0,
        }
    }
}

/// Mutable per-character vitals and flags.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CharacterState {
    pub hp: u32,
    pub max_hp: u32,
    pub mp: u32,
    pub max_mp: u32,
    pub position: Position,
    pub dead: bool,
    pub casting: bool,
    pub target: Option<ObjectId>,
    pub status: StatusFlags,
}

/// Which resource could not cover a skill's cost.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResourceShortfall {
    Mp,
    Hp,
}

/// A player or NPC living in the shared world.
#[derive(Debug)]
pub struct Character {
    id: ObjectId,
    kind: CharacterKind,
    level: u32,
    stats: CombatStats,
    state: RwLock<CharacterState>,
    skills: RwLock<HashMap<SkillId, u32>>,
    effects: EffectManager,
}

impl Character {
    pub fn builder(id: ObjectId, kind: CharacterKind) -> CharacterBuilder {
        CharacterBuilder::new(id, kind)
    }

    pub fn id(&self) -> ObjectId {
        self.id
    }

    pub fn kind(&self) -> CharacterKind {
        self.kind
    }

    pub fn is_player(&self) -> bool {
        self.kind == CharacterKind::Player
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn base_stats(&self) -> CombatStats {
        self.stats
    }

    pub fn effects(&self) -> &EffectManager {
        &self.effects
    }

    /// Copy of the current vitals.
    pub fn snapshot(&self) -> CharacterState {
        *self.state.read()
    }

    pub fn hp(&self) -> u32 {
        self.state.read().hp
    }

    pub fn mp(&self) -> u32 {
        self.state.read().mp
    }

    pub fn is_dead(&self) -> bool {
        self.state.read().dead
    }

    pub fn position(&self) -> Position {
        self.state.read().position
    }

    pub fn set_position(&self, position: Position) {
        self.state.write().position = position;
    }

    pub fn target(&self) -> Option<ObjectId> {
        self.state.read().target
    }

    pub fn set_target(&self, target: Option<ObjectId>) {
        self.state.write().target = target;
    }

    pub fn is_casting(&self) -> bool {
        self.state.read().casting
    }

    pub fn set_casting(&self, casting: bool) {
        self.state.write().casting = casting;
    }

    pub fn has_status(&self, flag: StatusFlags) -> bool {
        self.state.read().status.contains(flag)
    }

    pub fn set_status(&self, flag: StatusFlags, enabled: bool) {
        self.state.write().status.set(flag, enabled);
    }

    // ========================================================================
    // Skills
    // ========================================================================

    /// Level at which this character knows `skill`, if learned.
    pub fn skill_level(&self, skill: SkillId) -> Option<u32> {
        self.skills.read().get(&skill).copied()
    }

    pub fn learn_skill(&self, skill: SkillId, level: u32) {
        self.skills.write().insert(skill, level);
    }

    pub fn known_skills(&self) -> Vec<SkillKey> {
        let mut keys: Vec<SkillKey> = self
            .skills
            .read()
            .iter()
            .map(|(id, level)| SkillKey::new(*id, *level))
            .collect();
        keys.sort();
        keys
    }

    // ========================================================================
    // Stats
    // ========================================================================

    fn base_stat(&self, stat: Stat) -> f64 {
        match stat {
            Stat::PAtk => self.stats.p_atk,
            Stat::MAtk => self.stats.m_atk,
            Stat::PDef => self.stats.p_def,
            Stat::MDef => self.stats.m_def,
            _ => 0.0,
        }
    }

    /// Base attribute plus the aggregated bonus of every active effect.
    pub fn effective_stat(&self, stat: Stat) -> f64 {
        self.base_stat(stat) + self.effects.stat_bonus(stat)
    }

    // ========================================================================
    // Resources
    // ========================================================================

    /// Deducts skill costs atomically.
    ///
    /// HP cost must leave the character alive. Nothing is deducted on failure.
    pub fn try_consume(&self, mp: u32, hp: u32) -> Result<(), ResourceShortfall> {
        let mut state = self.state.write();
        if state.mp < mp {
            return Err(ResourceShortfall::Mp);
        }
        if hp > 0 && state.hp <= hp {
            return Err(ResourceShortfall::Hp);
        }
        state.mp -= mp;
        state.hp -= hp;
        Ok(())
    }

    /// Applies damage and returns the amount actually removed.
    ///
    /// With `can_kill == false` HP never drops below 1. Dead characters take
    /// no damage.
    pub fn apply_damage(&self, amount: u32, can_kill: bool) -> u32 {
        let mut state = self.state.write();
        if state.dead {
            return 0;
        }
        let floor = if can_kill { 0 } else { 1.min(state.hp) };
        let actual = amount.min(state.hp - floor);
        state.hp -= actual;
        if state.hp == 0 {
            state.dead = true;
        }
        actual
    }

    /// Restores HP up to the maximum and returns the amount healed.
    pub fn restore_hp(&self, amount: u32) -> u32 {
        let mut state = self.state.write();
        if state.dead {
            return 0;
        }
        let actual = amount.min(state.max_hp.saturating_sub(state.hp));
        state.hp += actual;
        actual
    }

    /// Restores MP up to the maximum and returns the amount restored.
    ///
    /// Unlike HP, MP can be restored on a dead character.
    pub fn restore_mp(&self, amount: u32) -> u32 {
        let mut state = self.state.write();
        let actual = amount.min(state.max_mp.saturating_sub(state.mp));
        state.mp += actual;
        actual
    }

    /// Overwrites current HP (clamped to the maximum), updating the dead flag.
    pub fn set_hp(&self, hp: u32) {
        let mut state = self.state.write();
        state.hp = hp.min(state.max_hp);
        state.dead = state.hp == 0;
    }

    /// Overwrites current MP (clamped to the maximum).
    pub fn set_mp(&self, mp: u32) {
        let mut state = self.state.write();
        state.mp = mp.min(state.max_mp);
    }
}

/// Builder for [`Character`] with test-friendly defaults.
pub struct CharacterBuilder {
    id: ObjectId,
    kind: CharacterKind,
    level: u32,
    stats: CombatStats,
    max_hp: u32,
    max_mp: u32,
    position: Position,
    skills: HashMap<SkillId, u32>,
    limits: EffectLimits,
}

impl CharacterBuilder {
    fn new(id: ObjectId, kind: CharacterKind) -> Self {
        Self {
            id,
            kind,
            level: 1,
            stats: CombatStats::default(),
            max_hp: 1000,
            max_mp: 500,
            position: Position::ORIGIN,
            skills: HashMap::new(),
            limits: EffectLimits::default(),
        }
    }

    pub fn level(mut self, level: u32) -> Self {
        self.level = level;
        self
    }

    pub fn stats(mut self, stats: CombatStats) -> Self {
        self.stats = stats;
        self
    }

    /// Maximum HP and MP; the character starts full.
    pub fn vitals(mut self, max_hp: u32, max_mp: u32) -> Self {
        self.max_hp = max_hp;
        self.max_mp = max_mp;
        self
    }

    pub fn position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    pub fn skill(mut self, skill: SkillId, level: u32) -> Self {
        self.skills.insert(skill, level);
        self
    }

    pub fn limits(mut self, limits: EffectLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn build(self) -> Character {
        Character {
            id: self.id,
            kind: self.kind,
            level: self.level,
            stats: self.stats,
            state: RwLock::new(CharacterState {
                hp: self.max_hp,
                max_hp: self.max_hp,
                mp: self.max_mp,
                max_mp: self.max_mp,
                position: self.position,
                dead: self.max_hp == 0,
                casting: false,
                target: None,
                status: StatusFlags::empty(),
            }),
            skills: RwLock::new(self.skills),
            effects: EffectManager::new(self.limits),
        }
    }
}
