//! Who or what launched a projection.
//!
//! The origin decides the cause-of-death string recorded if the projection
//! kills the player, and whether the player saw the attacker. Monster origins
//! also let the monster learn how well the player resists.

use crate::env::{OracleError, ProjectionEnv};
use crate::projection::ProjectionKind;
use crate::state::{MonsterId, PlayerState, Position, TimedEffect};

/// Handle to an object known to the gear oracle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ObjectHandle(pub u32);

/// A trap set into the dungeon floor.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrapRef {
    /// Kind description without article ("fire trap").
    pub kind_desc: String,
    pub grid: Position,
}

/// A trap on a chest.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChestTrapRef {
    /// Complete cause-of-death text ("a gas trap").
    pub death_message: String,
    pub grid: Position,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Origin {
    #[default]
    None,
    Player,
    Monster(MonsterId),
    Trap(TrapRef),
    Object(ObjectHandle),
    ChestTrap(ChestTrapRef),
}

/// Identity resolved from an [`Origin`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OriginIdentity {
    /// Cause of death if the projection proves fatal.
    pub killer: String,
    /// Whether the player perceived the source.
    pub visible: bool,
}

/// Resolves `origin` into a killer string and visibility.
///
/// Returns `Ok(None)` when the player is the origin and self hits are not
/// allowed; the projection then has no effect. A blind player never sees the
/// source.
///
/// # Errors
///
/// Returns `OracleError::MonstersNotAvailable` or `OracleError::GearNotAvailable`
/// when a monster or object origin cannot be looked up.
pub fn resolve_origin(
    origin: &Origin,
    kind: ProjectionKind,
    player: &PlayerState,
    env: &mut ProjectionEnv<'_>,
    allow_self: bool,
) -> Result<Option<OriginIdentity>, OracleError> {
    let mut visible = !player.timed.is_active(TimedEffect::Blind);

    let killer = match origin {
        Origin::Player => {
            if !allow_self {
                return Ok(None);
            }
            "yourself".to_owned()
        }
        Origin::Monster(id) => {
            let monsters = env.monsters()?;
            if !monsters.is_visible(*id) {
                visible = false;
            }
            let killer = monsters.describe(*id).unwrap_or_else(|| "it".to_owned());
            monsters.learn_from_projection(*id, kind, player);
            killer
        }
        Origin::Trap(trap) => format!("a {}", trap.kind_desc),
        Origin::Object(handle) => env.gear()?.object_name(*handle),
        Origin::ChestTrap(trap) => trap.death_message.clone(),
        Origin::None => {
            tracing::warn!(%kind, "projection without an origin");
            "a bug".to_owned()
        }
    };

    Ok(Some(OriginIdentity { killer, visible }))
}

/// Grid a projection is considered to emanate from.
///
/// Sources without a location of their own (no origin, an object carried in
/// the pack, a monster the host cannot place) are placed on the player.
///
/// # Errors
///
/// Returns `OracleError::MonstersNotAvailable` or `OracleError::GearNotAvailable`
/// when the oracle needed to locate the origin was not provided.
pub fn origin_location(
    origin: &Origin,
    player: &PlayerState,
    env: &mut ProjectionEnv<'_>,
) -> Result<Position, OracleError> {
    Ok(match origin {
        Origin::None | Origin::Player => player.grid,
        Origin::Monster(id) => env.monsters()?.grid(*id).unwrap_or(player.grid),
        Origin::Trap(trap) => trap.grid,
        Origin::Object(handle) => env.gear()?.object_grid(*handle).unwrap_or(player.grid),
        Origin::ChestTrap(trap) => trap.grid,
    })
}
