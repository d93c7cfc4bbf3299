//! Common error infrastructure for projection-core.
//!
//! Gameplay outcomes (an off-grid target, a disallowed self hit, a zero
//! divisor) are never errors. Errors are reserved for infrastructure failures,
//! such as a collaborator that the host forgot to supply.

use crate::env::OracleError;

/// How a caller should treat a failed resolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Retrying the same projection may succeed.
    Recoverable,
    /// The request itself is malformed and must be changed before retrying.
    Validation,
    /// The engine reached a state it considers impossible.
    Internal,
    /// The environment is incomplete; nothing can be resolved with it.
    Fatal,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// True for failures that point at a host or engine bug rather than input.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Classification shared by every error in this crate.
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    fn severity(&self) -> ErrorSeverity;

    /// Stable identifier for logs and host-side matching. Falls back to the
    /// type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

/// Errors raised while resolving a projection against the player.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ProjectionError {
    /// A collaborator required by the resolution was unavailable.
    #[error(transparent)]
    Oracle(#[from] OracleError),
}

impl GameError for ProjectionError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Oracle(err) => err.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Oracle(err) => err.error_code(),
        }
    }
}
