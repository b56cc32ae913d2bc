//! Error classification shared by every crate in the workspace.
//!
//! Concrete errors live beside the code that raises them: the effect factory
//! owns `EffectBuildError`, the runtime owns `CastError` and `RuntimeError`.
//! Each implements [`GameError`] so callers can log and route failures
//! uniformly without matching on foreign enums.

/// How a caller should react to a failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::IntoStaticStr, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "lowercase")]
pub enum ErrorSeverity {
    /// The same request may succeed later (cooldown, range, busy caster).
    Recoverable,
    /// The request can never succeed as issued (unknown or passive skill).
    Validation,
    /// Content data disagrees with itself (missing template, bad effect name).
    Internal,
    /// The engine was wired incorrectly and cannot run.
    Fatal,
}

impl ErrorSeverity {
    pub fn as_str(self) -> &'static str {
        self.into()
    }

    pub const fn is_recoverable(self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Whether the failure points at data or wiring rather than the request.
    pub const fn is_internal(self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Uniform view over engine errors.
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    fn severity(&self) -> ErrorSeverity;

    /// Stable identifier for logs. Defaults to the type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
