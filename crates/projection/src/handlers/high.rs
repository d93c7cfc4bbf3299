//! High elements: light, dark, sound, shards, nexus, nether, chaos and
//! disenchantment. Resisting any of them cancels every side effect.

use crate::env::{Message, NamedEffect};
use crate::error::ProjectionError;
use crate::origin::Origin;
use crate::projection::ProjectionKind;
use crate::state::{EquipFlags, TimedEffect};

use super::HandlerContext;

pub(super) fn light(ctx: &mut HandlerContext<'_, '_>) -> Result<i32, ProjectionError> {
    if ctx.resisted(ProjectionKind::Light)? {
        return Ok(0);
    }

    let turns = 2 + ctx.randint1(5)?;
    ctx.inc_timed(TimedEffect::Blind, turns, true, true)?;

    if ctx.dam > 300 {
        ctx.confuse_with(Message::Dazzled)?;
    }
    Ok(0)
}

pub(super) fn dark(ctx: &mut HandlerContext<'_, '_>) -> Result<i32, ProjectionError> {
    if ctx.resisted(ProjectionKind::Dark)? {
        return Ok(0);
    }

    let turns = 2 + ctx.randint1(5)?;
    ctx.inc_timed(TimedEffect::Blind, turns, true, true)?;

    if ctx.power >= 70 {
        if ctx.randint0(ctx.dam)? > 100 {
            ctx.drain_life(ctx.dam, Message::DarknessStealsLife)?;
        }
        if ctx.randint0(ctx.dam)? > 200 {
            ctx.notify(Message::UnsureInDarkness)?;
            ctx.inc_timed(TimedEffect::Slow, ctx.dam / 100, true, false)?;
        }
        if ctx.randint0(ctx.dam)? > 300 {
            ctx.notify(Message::DarknessPenetratesMind)?;
            ctx.inc_timed(TimedEffect::Amnesia, ctx.dam / 100, true, false)?;
        }
    }
    Ok(0)
}

pub(super) fn sound(ctx: &mut HandlerContext<'_, '_>) -> Result<i32, ProjectionError> {
    if ctx.resisted(ProjectionKind::Sound)? {
        return Ok(0);
    }

    ctx.stun_unless_protected(ctx.dam / 3)?;

    if ctx.dam > 300 {
        ctx.confuse_with(Message::NoiseDisorients)?;
    }
    Ok(0)
}

pub(super) fn shard(ctx: &mut HandlerContext<'_, '_>) -> Result<i32, ProjectionError> {
    if ctx.resisted(ProjectionKind::Shard)? {
        return Ok(0);
    }

    let turns = ctx.randint1(ctx.dam)?;
    ctx.inc_timed(TimedEffect::Cut, turns, true, false)?;
    Ok(0)
}

/// Scrambles stats (saving throw applies), then teleports: to the casting
/// monster one time in three, otherwise off the level one time in four
/// (saving throw applies again), otherwise a long random teleport.
pub(super) fn nexus(ctx: &mut HandlerContext<'_, '_>) -> Result<i32, ProjectionError> {
    // A caster the host cannot place counts as no caster.
    let caster = match ctx.origin {
        Origin::Monster(id) => ctx.env.monsters()?.grid(*id),
        _ => None,
    };

    if ctx.resisted(ProjectionKind::Nexus)? {
        return Ok(0);
    }

    if ctx.randint0(100)? < ctx.player.skill_save {
        ctx.notify(Message::Avoided)?;
    } else {
        let turns = ctx.randint0(20)? + 20;
        ctx.inc_timed(TimedEffect::Scramble, turns, true, true)?;
    }

    if ctx.one_in(3)?
        && let Some(grid) = caster
    {
        ctx.invoke(NamedEffect::TeleportTo { grid })?;
    } else if ctx.one_in(4)? {
        if ctx.randint0(100)? < ctx.player.skill_save {
            ctx.notify(Message::Avoided)?;
            return Ok(0);
        }
        ctx.invoke(NamedEffect::TeleportLevel)?;
    } else {
        let range = ctx.env.config()?.nexus_teleport_range();
        ctx.invoke(NamedEffect::Teleport { range })?;
    }
    Ok(0)
}

/// Drains experience; powerful nether also dulls the mind and saps energy.
pub(super) fn nether(ctx: &mut HandlerContext<'_, '_>) -> Result<i32, ProjectionError> {
    let drain = 200 + (ctx.player.exp / 100) * ctx.life_drain_percent()?;

    if ctx.player.resists(ProjectionKind::Nether)
        || ctx.player.has_equip_flag(EquipFlags::HOLD_LIFE)
    {
        ctx.notify(Message::Resisted)?;
        ctx.player.learn_equip_flag(EquipFlags::HOLD_LIFE);
        return Ok(0);
    }

    ctx.notify(Message::LifeDraining)?;
    ctx.player.lose_exp(drain, false);

    if ctx.power >= 80 {
        if ctx.randint0(ctx.dam)? > 100 && ctx.player.mana.maximum != 0 {
            ctx.notify(Message::MindDulled)?;
            let mana = &mut ctx.player.mana;
            mana.current -= mana.current.min(ctx.dam / 10);
        }
        if ctx.randint0(ctx.dam)? > 200 {
            ctx.notify(Message::EnergySapped)?;
            ctx.player.energy = 0;
        }
    }
    Ok(0)
}

pub(super) fn chaos(ctx: &mut HandlerContext<'_, '_>) -> Result<i32, ProjectionError> {
    if ctx.resisted(ProjectionKind::Chaos)? {
        return Ok(0);
    }

    let turns = ctx.randint1(10)?;
    ctx.inc_timed(TimedEffect::Image, turns, true, false)?;

    let turns = 10 + ctx.randint0(20)?;
    ctx.inc_timed(TimedEffect::Confused, turns, true, true)?;

    let drain = ((ctx.player.exp * 3) / (100 * 2)) * ctx.life_drain_percent()?;
    ctx.drain_life(drain, Message::LifeDraining)?;
    Ok(0)
}

pub(super) fn disenchant(ctx: &mut HandlerContext<'_, '_>) -> Result<i32, ProjectionError> {
    if ctx.resisted(ProjectionKind::Disenchant)? {
        return Ok(0);
    }

    ctx.invoke(NamedEffect::Disenchant)?;
    Ok(0)
}
