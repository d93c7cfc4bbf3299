//! Per-kind side effects of a projection that reached the player.
//!
//! Every [`ProjectionKind`] maps to exactly one [`Handler`] through the
//! exhaustive match in [`handler`]. A handler mutates the player (timed
//! effects, experience, stats, mana, energy), talks to the collaborators in the
//! environment, and returns extra damage to apply on top of the primary hit.
//!
//! Handlers receive the primary damage after resistance adjustment but before
//! damage reduction. Random rolls are made independently per side effect, in a
//! fixed order, so a seeded stream always yields the same outcome.
mod elements;
mod high;
mod other;
mod physical;

use crate::env::{Message, NamedEffect, OracleError, ProjectionEnv};
use crate::error::ProjectionError;
use crate::origin::Origin;
use crate::projection::ProjectionKind;
use crate::state::{EquipFlags, PlayerState, Position, Stat, TimedChange, TimedEffect};

/// Side-effect handler: (mutates player state) -> extra damage.
pub type Handler = fn(&mut HandlerContext<'_, '_>) -> Result<i32, ProjectionError>;

/// Inputs shared by every handler.
pub struct HandlerContext<'c, 'a> {
    pub origin: &'c Origin,
    /// Distance from the centre of the effect.
    pub distance: i32,
    pub grid: Position,
    /// Primary damage after resistance adjustment.
    pub dam: i32,
    pub kind: ProjectionKind,
    /// Spell power of the source, if a monster.
    pub power: i32,
    /// Whether the player noticed the effect. A stat drain may clear it.
    pub obvious: bool,
    pub player: &'c mut PlayerState,
    pub env: &'c mut ProjectionEnv<'a>,
}

impl HandlerContext<'_, '_> {
    fn randint0(&mut self, m: i32) -> Result<i32, OracleError> {
        Ok(self.env.dice()?.randint0(m))
    }

    fn randint1(&mut self, m: i32) -> Result<i32, OracleError> {
        Ok(self.env.dice()?.randint1(m))
    }

    fn one_in(&mut self, x: i32) -> Result<bool, OracleError> {
        Ok(self.env.dice()?.one_in(x))
    }

    fn damroll(&mut self, num: i32, sides: i32) -> Result<i32, OracleError> {
        Ok(self.env.dice()?.damroll(num, sides))
    }

    fn notify(&mut self, message: Message) -> Result<(), OracleError> {
        self.env.notify(message)
    }

    /// Extends a timed effect, announcing it when it begins and `notify` is set.
    ///
    /// Returns whether the counter changed.
    fn inc_timed(
        &mut self,
        effect: TimedEffect,
        amount: i32,
        notify: bool,
        check: bool,
    ) -> Result<bool, OracleError> {
        let cap = self.env.config()?.max_timed_duration();
        let change = self.player.inc_timed(effect, amount, check, cap);
        tracing::trace!(%effect, amount, ?change, "timed effect");
        if notify && change == TimedChange::Started {
            self.notify(Message::StatusGained(effect))?;
        }
        Ok(change.applied())
    }

    fn invoke(&mut self, effect: NamedEffect) -> Result<bool, OracleError> {
        tracing::trace!(?effect, "named effect");
        Ok(self.env.effects()?.invoke(effect, self.origin, self.player))
    }

    fn life_drain_percent(&self) -> Result<i32, OracleError> {
        Ok(self.env.config()?.life_drain_percent())
    }

    /// Exposes the inventory to `kind` unless the player is immune.
    ///
    /// Returns false for an immune player.
    fn expose_inventory(&mut self, kind: ProjectionKind) -> Result<bool, OracleError> {
        if self.player.is_immune(kind) {
            return Ok(false);
        }
        let chance = (self.dam * 5).min(300);
        self.env.gear()?.damage_inventory(kind, chance);
        Ok(true)
    }

    /// Drains one stat through the effect system; the outcome decides obviousness.
    fn drain_stat(&mut self, stat: Stat) -> Result<(), OracleError> {
        self.obvious = self.invoke(NamedEffect::DrainStat(stat))?;
        Ok(())
    }

    /// Loses `drain` experience unless life is held, in which case the
    /// protection is learnt instead.
    fn drain_life(&mut self, drain: i32, message: Message) -> Result<(), OracleError> {
        if self.player.has_equip_flag(EquipFlags::HOLD_LIFE) {
            self.player.learn_equip_flag(EquipFlags::HOLD_LIFE);
            return Ok(());
        }
        self.notify(message)?;
        self.player.lose_exp(drain, false);
        Ok(())
    }

    /// Stuns for `5 + randint1(max_roll)` turns (at most 35) unless stun
    /// protection is worn, which is then learnt.
    fn stun_unless_protected(&mut self, max_roll: i32) -> Result<(), OracleError> {
        if self.player.has_equip_flag(EquipFlags::PROT_STUN) {
            self.player.learn_equip_flag(EquipFlags::PROT_STUN);
            return Ok(());
        }
        let duration = (5 + self.randint1(max_roll)?).min(35);
        self.inc_timed(TimedEffect::Stun, duration, true, true)?;
        Ok(())
    }

    /// Confuses for `2 + randint1(dam / 100)`, announcing `message` first if
    /// confusion can take hold.
    fn confuse_with(&mut self, message: Message) -> Result<(), OracleError> {
        if self.player.inc_check(TimedEffect::Confused, false) {
            self.notify(message)?;
        }
        let turns = 2 + self.randint1(self.dam / 100)?;
        self.inc_timed(TimedEffect::Confused, turns, true, true)?;
        Ok(())
    }

    /// Reports resistance to the element and returns true if it is resisted.
    fn resisted(&mut self, kind: ProjectionKind) -> Result<bool, OracleError> {
        if !self.player.resists(kind) {
            return Ok(false);
        }
        self.notify(Message::Resisted)?;
        Ok(true)
    }
}

/// Handler for `kind`.
pub fn handler(kind: ProjectionKind) -> Handler {
    use ProjectionKind::*;
    match kind {
        Acid => elements::acid,
        Elec => elements::elec,
        Fire => elements::fire,
        Cold => elements::cold,
        Poison => elements::poison,
        Light => high::light,
        Dark => high::dark,
        Sound => high::sound,
        Shard => high::shard,
        Nexus => high::nexus,
        Nether => high::nether,
        Chaos => high::chaos,
        Disenchant => high::disenchant,
        Water => physical::water,
        Ice => physical::ice,
        Gravity => physical::gravity,
        Inertia => physical::inertia,
        Force => physical::force,
        Time => physical::time,
        Plasma => physical::plasma,
        DarkWeak => other::dark_weak,
        Meteor | Missile | Mana | HolyOrb | Arrow | LightWeak | KillWall | KillDoor | KillTrap
        | MakeDoor | MakeTrap | AwayUndead | AwayEvil | AwaySpirit | AwayAll | TurnUndead
        | TurnEvil | TurnLiving | TurnAll | DispUndead | DispEvil | DispAll | SleepUndead
        | SleepEvil | SleepAll | MonClone | MonPoly | MonHeal | MonSpeed | MonSlow | MonConf
        | MonHold | MonStun | MonDrain | MonCrush => other::unaffected,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::Fixture;
    use strum::IntoEnumIterator;

    const INERT: [ProjectionKind; 35] = {
        use ProjectionKind::*;
        [
            Meteor, Missile, Mana, HolyOrb, Arrow, LightWeak, KillWall, KillDoor, KillTrap,
            MakeDoor, MakeTrap, AwayUndead, AwayEvil, AwaySpirit, AwayAll, TurnUndead, TurnEvil,
            TurnLiving, TurnAll, DispUndead, DispEvil, DispAll, SleepUndead, SleepEvil, SleepAll,
            MonClone, MonPoly, MonHeal, MonSpeed, MonSlow, MonConf, MonHold, MonStun, MonDrain,
            MonCrush,
        ]
    };

    #[test]
    fn inert_kinds_do_nothing() {
        for kind in INERT {
            let mut fx = Fixture::new(Position::ORIGIN, &[]);
            let mut player = PlayerState::new(Position::ORIGIN, 100);
            let before = player.clone();
            let (extra, obvious) = fx
                .run_handler(&mut player, &Origin::None, kind, 500, 100)
                .unwrap();
            assert_eq!(extra, 0, "{kind}");
            assert!(obvious);
            assert_eq!(player, before);
            assert!(fx.messages.is_empty());
            assert_eq!(fx.rng.consumed(), 0);
        }
    }

    #[test]
    fn every_kind_resolves_for_an_immune_player() {
        for kind in ProjectionKind::iter() {
            let mut fx = Fixture::new(Position::ORIGIN, &[]);
            let mut player = PlayerState::new(Position::ORIGIN, 100);
            for element in ProjectionKind::iter().filter(|k| k.is_element()) {
                player.resists.set(element, crate::projection::ResistLevel::IMMUNE);
            }
            let result = fx.run_handler(&mut player, &Origin::None, kind, 0, 0);
            assert!(result.is_ok(), "{kind}");
            assert!(!player.is_dead);
        }
    }
}
