use crate::effect::EffectParams;
use crate::state::{SkillId, SkillKey};

/// Who a skill lands on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum TargetType {
    /// Always the caster.
    #[default]
    #[strum(serialize = "Self")]
    SelfTarget,
    /// The caster's current target, or the caster when nothing is targeted.
    #[strum(serialize = "One")]
    Single,
}

/// Abnormal-state descriptor deciding how same-category effects stack.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AbnormalState {
    /// Category name; empty means the effect never collides with others.
    pub kind: String,
    /// Strength tier within the category.
    pub level: i32,
    /// Duration of continuous effects, in seconds.
    pub time_secs: u32,
}

impl AbnormalState {
    pub fn duration_ms(&self) -> i64 {
        i64::from(self.time_secs) * 1000
    }
}

/// One entry of a skill's effect list: a factory name plus raw parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EffectDefinition {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub params: EffectParams,
}

impl EffectDefinition {
    pub fn new<'a>(
        name: impl Into<String>,
        params: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Self {
        Self {
            name: name.into(),
            params: EffectParams::from_pairs(params),
        }
    }
}

/// Immutable definition of a skill at one level.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkillTemplate {
    pub id: SkillId,
    pub level: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub mp_consume: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub hp_consume: u32,
    /// Cast duration before effects land, in milliseconds.
    #[cfg_attr(feature = "serde", serde(default))]
    pub hit_time_ms: u64,
    /// Cooldown after use, in milliseconds.
    #[cfg_attr(feature = "serde", serde(default))]
    pub reuse_delay_ms: u64,
    /// Maximum distance to the target when the cast starts (0 = unlimited).
    #[cfg_attr(feature = "serde", serde(default))]
    pub cast_range: i32,
    /// Maximum distance when effects land (0 = fall back to `cast_range`).
    #[cfg_attr(feature = "serde", serde(default))]
    pub effect_range: i32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub target_type: TargetType,
    /// Content flag for hostile skills. Informational: effects choose their
    /// collection by kind, not by this flag.
    #[cfg_attr(feature = "serde", serde(default))]
    pub is_debuff: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    pub is_passive: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    pub abnormal: AbnormalState,
    #[cfg_attr(feature = "serde", serde(default))]
    pub effects: Vec<EffectDefinition>,
}

impl SkillTemplate {
    /// Creates an instant, free, self-targeted template with no effects.
    pub fn new(id: SkillId, level: u32) -> Self {
        Self {
            id,
            level,
            name: String::new(),
            mp_consume: 0,
            hp_consume: 0,
            hit_time_ms: 0,
            reuse_delay_ms: 0,
            cast_range: 0,
            effect_range: 0,
            target_type: TargetType::SelfTarget,
            is_debuff: false,
            is_passive: false,
            abnormal: AbnormalState::default(),
            effects: Vec::new(),
        }
    }

    pub fn key(&self) -> SkillKey {
        SkillKey::new(self.id, self.level)
    }

    /// Range used when re-validating the target at completion.
    pub fn completion_range(&self) -> i32 {
        if self.effect_range > 0 {
            self.effect_range
        } else {
            self.cast_range
        }
    }

    pub fn is_instant_cast(&self) -> bool {
        self.hit_time_ms == 0
    }
}

/// Builder methods (fluent)
impl SkillTemplate {
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn mp_consume(mut self, mp: u32) -> Self {
        self.mp_consume = mp;
        self
    }

    pub fn hp_consume(mut self, hp: u32) -> Self {
        self.hp_consume = hp;
        self
    }

    pub fn hit_time(mut self, ms: u64) -> Self {
        self.hit_time_ms = ms;
        self
    }

    pub fn reuse_delay(mut self, ms: u64) -> Self {
        self.reuse_delay_ms = ms;
        self
    }

    pub fn cast_range(mut self, range: i32) -> Self {
        self.cast_range = range;
        self
    }

    pub fn effect_range(mut self, range: i32) -> Self {
        self.effect_range = range;
        self
    }

    pub fn target(mut self, target_type: TargetType) -> Self {
        self.target_type = target_type;
        self
    }

    pub fn debuff(mut self) -> Self {
        self.is_debuff = true;
        self
    }

    pub fn passive(mut self) -> Self {
        self.is_passive = true;
        self
    }

    pub fn abnormal(mut self, kind: impl Into<String>, level: i32, time_secs: u32) -> Self {
        self.abnormal = AbnormalState {
            kind: kind.into(),
            level,
            time_secs,
        };
        self
    }

    pub fn effect<'a>(
        mut self,
        name: &str,
        params: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Self {
        self.effects.push(EffectDefinition::new(name, params));
        self
    }
}
