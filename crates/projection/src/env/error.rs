//! Oracle access errors.

use crate::error::{ErrorSeverity, GameError};

/// Errors that occur when accessing an oracle.
///
/// Missing oracles mean the host assembled an incomplete [`super::ProjectionEnv`];
/// the resolution cannot proceed without them.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OracleError {
    /// CaveOracle is not available in the environment.
    #[error("CaveOracle not available")]
    CaveNotAvailable,

    /// MonsterOracle is not available in the environment.
    #[error("MonsterOracle not available")]
    MonstersNotAvailable,

    /// GearOracle is not available in the environment.
    #[error("GearOracle not available")]
    GearNotAvailable,

    /// EffectOracle is not available in the environment.
    #[error("EffectOracle not available")]
    EffectsNotAvailable,

    /// MessageSink is not available in the environment.
    #[error("MessageSink not available")]
    MessagesNotAvailable,

    /// ConfigOracle is not available in the environment.
    #[error("ConfigOracle not available")]
    ConfigNotAvailable,

    /// RngOracle is not available in the environment.
    #[error("RngOracle not available")]
    RngNotAvailable,
}

impl GameError for OracleError {
    fn severity(&self) -> ErrorSeverity {
        use OracleError::*;
        match self {
            CaveNotAvailable | MonstersNotAvailable | GearNotAvailable | EffectsNotAvailable
            | MessagesNotAvailable | ConfigNotAvailable | RngNotAvailable => ErrorSeverity::Fatal,
        }
    }

    fn error_code(&self) -> &'static str {
        use OracleError::*;
        match self {
            CaveNotAvailable => "ORACLE_CAVE_NOT_AVAILABLE",
            MonstersNotAvailable => "ORACLE_MONSTERS_NOT_AVAILABLE",
            GearNotAvailable => "ORACLE_GEAR_NOT_AVAILABLE",
            EffectsNotAvailable => "ORACLE_EFFECTS_NOT_AVAILABLE",
            MessagesNotAvailable => "ORACLE_MESSAGES_NOT_AVAILABLE",
            ConfigNotAvailable => "ORACLE_CONFIG_NOT_AVAILABLE",
            RngNotAvailable => "ORACLE_RNG_NOT_AVAILABLE",
        }
    }
}
