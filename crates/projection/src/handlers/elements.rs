//! The four base elements and poison.
//!
//! Base elements expose the inventory unless the player is immune. Powerful
//! fire and cold have rare extra consequences.

use crate::adjust::{Defender, adjust_damage};
use crate::env::Message;
use crate::error::ProjectionError;
use crate::projection::{ProjectionKind, RoundingAspect};
use crate::state::{Stat, TimedEffect};

use super::HandlerContext;

pub(super) fn acid(ctx: &mut HandlerContext<'_, '_>) -> Result<i32, ProjectionError> {
    ctx.expose_inventory(ProjectionKind::Acid)?;
    Ok(0)
}

pub(super) fn elec(ctx: &mut HandlerContext<'_, '_>) -> Result<i32, ProjectionError> {
    ctx.expose_inventory(ProjectionKind::Elec)?;
    Ok(0)
}

pub(super) fn fire(ctx: &mut HandlerContext<'_, '_>) -> Result<i32, ProjectionError> {
    if !ctx.expose_inventory(ProjectionKind::Fire)? {
        return Ok(0);
    }

    if ctx.power >= 80 {
        if ctx.randint0(ctx.dam)? > 500 {
            ctx.notify(Message::HeatSaps)?;
            ctx.drain_stat(Stat::Str)?;
        }
        if ctx.randint0(ctx.dam)? > 500 {
            let turns = ctx.randint1(ctx.dam / 100)?;
            if ctx.inc_timed(TimedEffect::Blind, turns, true, true)? {
                ctx.notify(Message::SmokeInEyes)?;
            }
        }
        if ctx.randint0(ctx.dam)? > 500 {
            let turns = ctx.randint1(ctx.dam / 10)?;
            if ctx.inc_timed(TimedEffect::Poisoned, turns, true, true)? {
                ctx.notify(Message::PoisonousFumes)?;
            }
        }
    }
    Ok(0)
}

pub(super) fn cold(ctx: &mut HandlerContext<'_, '_>) -> Result<i32, ProjectionError> {
    if !ctx.expose_inventory(ProjectionKind::Cold)? {
        return Ok(0);
    }

    if ctx.power >= 80 {
        if ctx.randint0(ctx.dam)? > 500 {
            ctx.notify(Message::ColdSeeps)?;
            ctx.drain_stat(Stat::Dex)?;
        }
        if ctx.randint0(ctx.dam)? > 500 {
            ctx.drain_life(ctx.dam, Message::ColdWithersLife)?;
        }
    }
    Ok(0)
}

/// Poisons; strong venom also burns like acid (extra damage) and sickens.
pub(super) fn poison(ctx: &mut HandlerContext<'_, '_>) -> Result<i32, ProjectionError> {
    let mut extra = 0;

    let turns = 10 + ctx.randint1(ctx.dam)?;
    if !ctx.inc_timed(TimedEffect::Poisoned, turns, true, true)? {
        ctx.notify(Message::Resisted)?;
    }

    if ctx.power >= 60 {
        if ctx.randint0(ctx.dam)? > 200 && !ctx.player.is_immune(ProjectionKind::Acid) {
            let dam = ctx.dam / 5;
            ctx.notify(Message::VenomStings)?;

            let resist = ctx.player.resist_level(ProjectionKind::Acid);
            let (gear, dice) = ctx.env.gear_and_dice()?;
            gear.damage_inventory(ProjectionKind::Acid, dam);
            extra += adjust_damage(
                Some(Defender {
                    player: &mut *ctx.player,
                    gear,
                }),
                ProjectionKind::Acid,
                dam,
                RoundingAspect::Randomise,
                resist,
                true,
                dice,
            );
        }
        if ctx.randint0(ctx.dam)? > 200 {
            ctx.notify(Message::StenchSickens)?;
            ctx.drain_stat(Stat::Con)?;
        }
    }
    Ok(extra)
}

#[cfg(test)]
mod tests {
    use crate::env::{Message, NamedEffect};
    use crate::origin::Origin;
    use crate::projection::{ProjectionKind, ResistLevel};
    use crate::state::{EquipFlags, MonsterId, PlayerState, Position, TimedEffect};
    use crate::testing::Fixture;

    fn player() -> PlayerState {
        PlayerState::new(Position::new(2, 2), 200).with_exp(1000)
    }

    const MONSTER: Origin = Origin::Monster(MonsterId(1));

    #[test]
    fn base_elements_expose_the_inventory() {
        for (kind, dam, chance) in [
            (ProjectionKind::Acid, 10, 50),
            (ProjectionKind::Elec, 100, 300),
            (ProjectionKind::Fire, 50, 250),
            (ProjectionKind::Cold, 61, 300),
        ] {
            let mut fx = Fixture::new(Position::new(2, 2), &[]);
            let mut p = player();
            let (extra, _) = fx.run_handler(&mut p, &MONSTER, kind, dam, 10).unwrap();
            assert_eq!(extra, 0);
            assert_eq!(fx.gear.damaged, vec![(kind, chance)]);
            assert_eq!(fx.rng.consumed(), 0);
        }
    }

    #[test]
    fn immunity_protects_the_inventory() {
        let mut fx = Fixture::new(Position::new(2, 2), &[900, 900, 900]);
        let mut p = player().with_resist(ProjectionKind::Fire, ResistLevel::IMMUNE);
        fx.run_handler(&mut p, &MONSTER, ProjectionKind::Fire, 1000, 100)
            .unwrap();
        assert!(fx.gear.damaged.is_empty());
        assert_eq!(fx.rng.consumed(), 0);
    }

    #[test]
    fn intense_fire_saps_blinds_and_poisons() {
        // Three passing rolls, then blind 1d10 and poison 1d100.
        let mut fx = Fixture::new(Position::new(2, 2), &[600, 601, 4, 700, 19]);
        let mut p = player();
        let (_, obvious) = fx
            .run_handler(&mut p, &MONSTER, ProjectionKind::Fire, 1000, 80)
            .unwrap();
        assert!(obvious);
        assert_eq!(fx.effects.invoked, vec![NamedEffect::DrainStat(crate::state::Stat::Str)]);
        assert_eq!(p.timed.get(TimedEffect::Blind), 5);
        assert_eq!(p.timed.get(TimedEffect::Poisoned), 20);
        assert_eq!(
            fx.messages,
            vec![
                Message::HeatSaps,
                Message::StatusGained(TimedEffect::Blind),
                Message::SmokeInEyes,
                Message::StatusGained(TimedEffect::Poisoned),
                Message::PoisonousFumes,
            ]
        );
    }

    #[test]
    fn weak_sources_skip_the_rolls() {
        let mut fx = Fixture::new(Position::new(2, 2), &[999]);
        let mut p = player();
        fx.run_handler(&mut p, &MONSTER, ProjectionKind::Fire, 1000, 79)
            .unwrap();
        assert_eq!(fx.rng.consumed(), 0);
        assert!(fx.effects.invoked.is_empty());
    }

    #[test]
    fn unnoticed_drain_clears_obviousness() {
        let mut fx = Fixture::new(Position::new(2, 2), &[999, 0, 0]);
        fx.effects.noticed = false;
        let mut p = player();
        let (_, obvious) = fx
            .run_handler(&mut p, &MONSTER, ProjectionKind::Cold, 1000, 90)
            .unwrap();
        assert!(!obvious);
        assert_eq!(fx.effects.invoked, vec![NamedEffect::DrainStat(crate::state::Stat::Dex)]);
    }

    #[test]
    fn bitter_cold_withers_life_unless_held() {
        let mut fx = Fixture::new(Position::new(2, 2), &[0, 800]);
        let mut p = player();
        fx.run_handler(&mut p, &MONSTER, ProjectionKind::Cold, 900, 80)
            .unwrap();
        assert_eq!(p.exp, 100);
        assert_eq!(fx.messages, vec![Message::ColdWithersLife]);

        let mut fx = Fixture::new(Position::new(2, 2), &[0, 800]);
        let mut p = player().with_equip_flags(EquipFlags::HOLD_LIFE);
        fx.run_handler(&mut p, &MONSTER, ProjectionKind::Cold, 900, 80)
            .unwrap();
        assert_eq!(p.exp, 1000);
        assert!(p.knowledge.knows_flag(EquipFlags::HOLD_LIFE));
        assert!(fx.messages.is_empty());
    }

    #[test]
    fn poison_is_resisted_with_a_message() {
        let mut fx = Fixture::new(Position::new(2, 2), &[5]);
        let mut p = player().with_resist(ProjectionKind::Poison, ResistLevel::RESIST);
        fx.run_handler(&mut p, &MONSTER, ProjectionKind::Poison, 30, 0)
            .unwrap();
        assert!(!p.timed.is_active(TimedEffect::Poisoned));
        assert_eq!(fx.messages, vec![Message::Resisted]);
    }

    #[test]
    fn strong_venom_burns_like_acid() {
        // poison 10 + 1d500, venom roll, stench roll fails
        let mut fx = Fixture::new(Position::new(2, 2), &[9, 300, 0]);
        let mut p = player();
        let (extra, _) = fx
            .run_handler(&mut p, &MONSTER, ProjectionKind::Poison, 500, 60)
            .unwrap();
        assert_eq!(p.timed.get(TimedEffect::Poisoned), 20);
        assert_eq!(extra, 100);
        assert_eq!(fx.gear.damaged, vec![(ProjectionKind::Acid, 100)]);
        assert!(p.knowledge.knows_element(ProjectionKind::Acid));
        assert_eq!(
            fx.messages,
            vec![
                Message::StatusGained(TimedEffect::Poisoned),
                Message::VenomStings
            ]
        );
    }

    #[test]
    fn venom_spares_the_acid_immune() {
        let mut fx = Fixture::new(Position::new(2, 2), &[9, 300, 300]);
        let mut p = player().with_resist(ProjectionKind::Acid, ResistLevel::IMMUNE);
        let (extra, _) = fx
            .run_handler(&mut p, &MONSTER, ProjectionKind::Poison, 500, 60)
            .unwrap();
        assert_eq!(extra, 0);
        assert!(fx.gear.damaged.is_empty());
        assert_eq!(fx.effects.invoked, vec![NamedEffect::DrainStat(crate::state::Stat::Con)]);
        assert_eq!(fx.messages.last(), Some(&Message::StenchSickens));
    }
}
