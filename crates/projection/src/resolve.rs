//! Resolution of a single projection against the player.
//!
//! # Pipeline
//!
//! 1. A decoy on the target grid absorbs the hit (and is destroyed) if the
//!    projection carries damage.
//! 2. Nothing further happens unless the player stands on the grid.
//! 3. The origin is resolved into a killer string and visibility; a
//!    disallowed self hit stops here.
//! 4. Primary damage is adjusted for resistance, scaled down if self-inflicted,
//!    reduced, and applied.
//! 5. If the player survived, the kind's handler runs on the adjusted damage;
//!    its extra damage is reduced and applied in turn.
//! 6. The player is disturbed and the projection reported as noticed.

use crate::adjust::{Defender, adjust_damage};
use crate::config::ProjectionConfig;
use crate::env::{Message, OracleError, ProjectionEnv};
use crate::error::ProjectionError;
use crate::handlers::{HandlerContext, handler};
use crate::origin::{Origin, resolve_origin};
use crate::projection::{ProjectionKind, RoundingAspect};
use crate::state::{HitOutcome, PlayerState, Position};

/// An immutable description of a projection reaching a grid.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProjectionEvent {
    pub origin: Origin,
    /// Distance from the centre of the effect; damage is already scaled for it.
    pub distance: i32,
    pub grid: Position,
    pub damage: i32,
    pub kind: ProjectionKind,
    /// Spell power of the source, if a monster.
    pub power: i32,
}

impl ProjectionEvent {
    #[must_use]
    pub fn new(origin: Origin, grid: Position, damage: i32, kind: ProjectionKind) -> Self {
        Self {
            origin,
            distance: 0,
            grid,
            damage,
            kind,
            power: 0,
        }
    }

    #[must_use]
    pub fn with_power(mut self, power: i32) -> Self {
        self.power = power;
        self
    }

    #[must_use]
    pub fn with_distance(mut self, distance: i32) -> Self {
        self.distance = distance;
        self
    }
}

/// Applies `event` to the player.
///
/// `allow_self` lets a projection launched by the player affect the player;
/// such damage is divided by [`ProjectionConfig::SELF_DAMAGE_DIVISOR`].
///
/// Returns `Ok(false)` when the projection had no effect on the player (not
/// on the grid, or a disallowed self hit). Otherwise the player is assumed to
/// be aware of some effect and `Ok(true)` is returned, even for an unseen
/// attacker or a side effect that went unnoticed.
///
/// # Errors
///
/// Returns [`ProjectionError::Oracle`] if a collaborator needed by this
/// projection is missing from `env`.
pub fn project_player(
    player: &mut PlayerState,
    env: &mut ProjectionEnv<'_>,
    event: &ProjectionEvent,
    allow_self: bool,
) -> Result<bool, ProjectionError> {
    let kind = event.kind;
    let grid = event.grid;

    let cave = env.cave()?;
    if cave.is_decoyed(grid) && event.damage != 0 {
        tracing::debug!(?grid, "decoy destroyed");
        cave.destroy_decoy(grid);
    }
    if !cave.is_player(grid) {
        return Ok(false);
    }

    let Some(identity) = resolve_origin(&event.origin, kind, player, env, allow_self)? else {
        tracing::debug!(%kind, "self hit not allowed");
        return Ok(false);
    };
    tracing::debug!(
        %kind,
        killer = %identity.killer,
        visible = identity.visible,
        "origin resolved"
    );

    if !identity.visible {
        env.notify(Message::UnseenHit(kind))?;
    }

    let config = env.config()?;
    let show_damage = config.show_damage();
    let warn = config.hitpoint_warn();

    let resist = player.resist_level(kind);
    let mut dam = {
        let (gear, dice) = env.gear_and_dice()?;
        adjust_damage(
            Some(Defender {
                player: &mut *player,
                gear,
            }),
            kind,
            event.damage,
            RoundingAspect::Randomise,
            resist,
            true,
            dice,
        )
    };
    tracing::debug!(%kind, raw = event.damage, adjusted = dam, "damage adjusted");

    if dam != 0 {
        if allow_self {
            dam /= ProjectionConfig::SELF_DAMAGE_DIVISOR;
        }
        let reduced = player.apply_damage_reduction(dam);
        if reduced > 0 && show_damage {
            env.notify(Message::DamageTaken(reduced))?;
        }
        apply_hit(player, env, reduced, &identity.killer, warn)?;
    }

    if !player.is_dead {
        let mut ctx = HandlerContext {
            origin: &event.origin,
            distance: event.distance,
            grid,
            dam,
            kind,
            power: event.power,
            obvious: true,
            player: &mut *player,
            env: &mut *env,
        };
        let extra = handler(kind)(&mut ctx)?;
        tracing::debug!(%kind, extra, noticed = ctx.obvious, "side effects applied");

        let extra = player.apply_damage_reduction(extra);
        if extra > 0 && show_damage {
            env.notify(Message::ExtraDamageTaken(extra))?;
        }
        apply_hit(player, env, extra, &identity.killer, warn)?;
    }

    player.disturb();
    Ok(true)
}

fn apply_hit(
    player: &mut PlayerState,
    env: &mut ProjectionEnv<'_>,
    dam: i32,
    killer: &str,
    warn: i32,
) -> Result<(), OracleError> {
    match player.take_hit(dam, killer, warn) {
        HitOutcome::Survived {
            low_hp_warning: true,
        } => env.notify(Message::LowHitpointWarning),
        HitOutcome::Died => {
            tracing::debug!(killer, "projection was fatal");
            Ok(())
        }
        _ => Ok(()),
    }
}
