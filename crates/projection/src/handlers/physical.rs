//! Water, ice, gravity, inertia, force, time and plasma.
//!
//! None of these are resisted as a whole; individual side effects check their
//! own protections.

use strum::IntoEnumIterator;

use crate::env::{Message, NamedEffect};
use crate::error::ProjectionError;
use crate::origin::{Origin, origin_location};
use crate::projection::ProjectionKind;
use crate::state::{DIRECTIONS, Stat, TimedEffect};

use super::HandlerContext;

pub(super) fn water(ctx: &mut HandlerContext<'_, '_>) -> Result<i32, ProjectionError> {
    let turns = 5 + ctx.randint1(5)?;
    ctx.inc_timed(TimedEffect::Confused, turns, true, true)?;

    let turns = ctx.randint1(40)?;
    ctx.inc_timed(TimedEffect::Stun, turns, true, true)?;
    Ok(0)
}

pub(super) fn ice(ctx: &mut HandlerContext<'_, '_>) -> Result<i32, ProjectionError> {
    ctx.expose_inventory(ProjectionKind::Cold)?;

    if ctx.player.resists(ProjectionKind::Shard) {
        ctx.notify(Message::Resisted)?;
    } else {
        let turns = ctx.damroll(5, 8)?;
        ctx.inc_timed(TimedEffect::Cut, turns, true, false)?;
    }

    let turns = ctx.randint1(15)?;
    ctx.inc_timed(TimedEffect::Stun, turns, true, true)?;
    Ok(0)
}

pub(super) fn gravity(ctx: &mut HandlerContext<'_, '_>) -> Result<i32, ProjectionError> {
    ctx.notify(Message::GravityWarps)?;

    if ctx.randint1(127)? > ctx.player.level {
        let range = ctx.env.config()?.gravity_blink_range();
        ctx.invoke(NamedEffect::Teleport { range })?;
    }

    let turns = 4 + ctx.randint0(4)?;
    ctx.inc_timed(TimedEffect::Slow, turns, true, false)?;

    ctx.stun_unless_protected(ctx.dam / 3)?;
    Ok(0)
}

pub(super) fn inertia(ctx: &mut HandlerContext<'_, '_>) -> Result<i32, ProjectionError> {
    let turns = 4 + ctx.randint0(4)?;
    ctx.inc_timed(TimedEffect::Slow, turns, true, false)?;
    Ok(0)
}

/// Stuns and thrusts the player away from the source. A player standing on
/// the trap that fired is pushed from a random neighbouring grid instead.
pub(super) fn force(ctx: &mut HandlerContext<'_, '_>) -> Result<i32, ProjectionError> {
    let mut centre = origin_location(ctx.origin, ctx.player, ctx.env)?;

    if matches!(ctx.origin, Origin::Trap(_)) && ctx.player.grid == centre {
        let d = ctx.randint0(DIRECTIONS.len() as i32)?;
        centre = centre + DIRECTIONS[d as usize];
    }

    let turns = ctx.randint1(20)?;
    ctx.inc_timed(TimedEffect::Stun, turns, true, true)?;

    ctx.invoke(NamedEffect::ThrustAway {
        centre,
        grid: ctx.grid,
        distance: 3 + ctx.dam / 20,
    })?;
    Ok(0)
}

/// Half the time drains experience; otherwise drains two random stats, or
/// (one time in five) every stat.
pub(super) fn time(ctx: &mut HandlerContext<'_, '_>) -> Result<i32, ProjectionError> {
    if ctx.one_in(2)? {
        let drain = 100 + (ctx.player.exp / 100) * ctx.life_drain_percent()?;
        ctx.notify(Message::LifeDraining)?;
        ctx.player.lose_exp(drain, false);
    } else if !ctx.one_in(5)? {
        for _ in 0..2 {
            let Some(stat) = Stat::from_roll(ctx.randint1(5)?) else {
                continue;
            };
            ctx.notify(Message::StatDrained(stat))?;
            ctx.player.stats.decrease(stat, false);
        }
    } else {
        ctx.notify(Message::AllStatsDrained)?;
        for stat in Stat::iter() {
            ctx.player.stats.decrease(stat, false);
        }
    }
    Ok(0)
}

pub(super) fn plasma(ctx: &mut HandlerContext<'_, '_>) -> Result<i32, ProjectionError> {
    ctx.stun_unless_protected(ctx.dam * 3 / 4)?;
    Ok(0)
}
