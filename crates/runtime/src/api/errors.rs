//! Error types surfaced by the runtime API.
//!
//! [`CastError`] is the typed rejection returned by cast requests; nothing is
//! deducted and nothing is emitted when one is returned. [`RuntimeError`]
//! covers engine construction and configuration.
use std::path::PathBuf;

use skill_core::{ErrorSeverity, GameError, ResourceShortfall};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RuntimeError>;

/// Why a cast request was rejected.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CastError {
    #[error("not learned")]
    NotLearned,

    #[error("template not found")]
    TemplateNotFound,

    #[error("passive")]
    Passive,

    #[error("already casting")]
    AlreadyCasting,

    #[error("on cooldown")]
    OnCooldown { remaining_ms: u64 },

    #[error("not enough MP")]
    NotEnoughMp,

    #[error("not enough HP")]
    NotEnoughHp,

    #[error("cannot cast while dead")]
    Dead,

    #[error("out of range")]
    OutOfRange,

    #[error("target not found")]
    TargetNotFound,
}

impl From<ResourceShortfall> for CastError {
    fn from(shortfall: ResourceShortfall) -> Self {
        match shortfall {
            ResourceShortfall::Mp => Self::NotEnoughMp,
            ResourceShortfall::Hp => Self::NotEnoughHp,
        }
    }
}

impl GameError for CastError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::AlreadyCasting
            | Self::OnCooldown { .. }
            | Self::NotEnoughMp
            | Self::NotEnoughHp
            | Self::OutOfRange
            | Self::TargetNotFound => ErrorSeverity::Recoverable,
            Self::NotLearned | Self::Passive | Self::Dead => ErrorSeverity::Validation,
            // Content-data problem, rejected like a user error.
            Self::TemplateNotFound => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NotLearned => "CAST_NOT_LEARNED",
            Self::TemplateNotFound => "CAST_TEMPLATE_NOT_FOUND",
            Self::Passive => "CAST_PASSIVE",
            Self::AlreadyCasting => "CAST_ALREADY_CASTING",
            Self::OnCooldown { .. } => "CAST_ON_COOLDOWN",
            Self::NotEnoughMp => "CAST_NOT_ENOUGH_MP",
            Self::NotEnoughHp => "CAST_NOT_ENOUGH_HP",
            Self::Dead => "CAST_DEAD",
            Self::OutOfRange => "CAST_OUT_OF_RANGE",
            Self::TargetNotFound => "CAST_TARGET_NOT_FOUND",
        }
    }
}

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("cast manager requires a skill template oracle")]
    MissingTemplates,

    #[error("cast manager requires a world resolver")]
    MissingWorld,

    #[error("cast manager requires a packet sink")]
    MissingSink,

    #[error("cast manager must be built inside a tokio runtime")]
    NoRuntime(#[source] tokio::runtime::TryCurrentError),

    #[error("failed to read config file {path}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid engine config")]
    Config(#[from] toml::de::Error),
}

impl GameError for RuntimeError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_match_failure_names() {
        assert_eq!(CastError::NotLearned.to_string(), "not learned");
        assert_eq!(CastError::OnCooldown { remaining_ms: 10 }.to_string(), "on cooldown");
        assert_eq!(CastError::NotEnoughMp.to_string(), "not enough MP");
        assert_eq!(CastError::Dead.to_string(), "cannot cast while dead");
    }

    #[test]
    fn shortfall_maps_to_cast_error() {
        assert_eq!(CastError::from(ResourceShortfall::Mp), CastError::NotEnoughMp);
        assert_eq!(CastError::from(ResourceShortfall::Hp), CastError::NotEnoughHp);
        assert_eq!(CastError::Passive.severity(), ErrorSeverity::Validation);
        assert!(CastError::OnCooldown { remaining_ms: 1 }.severity().is_recoverable());
        assert_eq!(CastError::OutOfRange.error_code(), "CAST_OUT_OF_RANGE");
    }
}
