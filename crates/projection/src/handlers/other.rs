//! Non-elemental projections. Only weak darkness affects the player.

use crate::env::Message;
use crate::error::ProjectionError;
use crate::projection::ProjectionKind;
use crate::state::{PlayerFlags, TimedEffect};

use super::HandlerContext;

pub(super) fn dark_weak(ctx: &mut HandlerContext<'_, '_>) -> Result<i32, ProjectionError> {
    if ctx.player.resists(ProjectionKind::Dark) {
        if !ctx.player.flags.contains(PlayerFlags::UNLIGHT) {
            ctx.notify(Message::Resisted)?;
        }
        return Ok(0);
    }

    let turns = 3 + ctx.randint1(5)?;
    ctx.inc_timed(TimedEffect::Blind, turns, true, true)?;
    Ok(0)
}

pub(super) fn unaffected(_ctx: &mut HandlerContext<'_, '_>) -> Result<i32, ProjectionError> {
    Ok(0)
}
