//! Engine configuration and loaders.
use std::env;
use std::path::Path;

use serde::{Deserialize, Serialize};
use skill_core::EffectLimits;

use crate::api::{Result, RuntimeError};

/// Tunables shared by the cast engine and the characters it serves.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Buff capacity of every character's effect manager.
    pub max_buffs: usize,
    /// Debuff capacity of every character's effect manager.
    pub max_debuffs: usize,
    /// Reject casts whose target the world cannot resolve instead of letting
    /// them pass the range check.
    pub fail_closed_range: bool,
    /// Per-topic capacity of the event bus.
    pub event_buffer_size: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_buffs: EffectLimits::DEFAULT_MAX_BUFFS,
            max_debuffs: EffectLimits::DEFAULT_MAX_DEBUFFS,
            fail_closed_range: false,
            event_buffer_size: 256,
        }
    }
}

impl EngineConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `SKILL_MAX_BUFFS` - Buff capacity (default: 24)
    /// - `SKILL_MAX_DEBUFFS` - Debuff capacity (default: 8)
    /// - `SKILL_FAIL_CLOSED_RANGE` - Reject unresolvable targets (default: false)
    /// - `SKILL_EVENT_BUFFER` - Event bus capacity (default: 256)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(max) = read_env::<usize>("SKILL_MAX_BUFFS") {
            config.max_buffs = max;
        }
        if let Some(max) = read_env::<usize>("SKILL_MAX_DEBUFFS") {
            config.max_debuffs = max;
        }
        if let Some(enable) = read_env::<bool>("SKILL_FAIL_CLOSED_RANGE") {
            config.fail_closed_range = enable;
        }
        if let Some(capacity) = read_env::<usize>("SKILL_EVENT_BUFFER") {
            config.event_buffer_size = capacity.max(1);
        }

        config
    }

    /// Parse a TOML document; missing keys keep their defaults.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Read and parse a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| RuntimeError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&source)
    }

    pub fn effect_limits(&self) -> EffectLimits {
        EffectLimits::new(self.max_buffs, self.max_debuffs)
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
