//! The player character as seen by projection resolution.

use crate::config::ProjectionConfig;
use crate::projection::{ProjectionKind, ResistLevel, ResistanceProfile};
use crate::state::{
    EquipFlags, Knowledge, PlayerFlags, Pool, Position, Protection, StatBlock, TimedChange,
    TimedEffect, TimedEffects,
};

/// Base experience needed to reach level `n + 2`, before the experience factor.
pub const PLAYER_EXP: [i32; ProjectionConfig::MAX_LEVEL as usize] = [
    10, 25, 45, 70, 100, 140, 200, 280, 380, 500, 650, 850, 1100, 1400, 1800, 2300, 2900, 3600,
    4400, 5400, 6800, 8400, 10200, 12500, 17500, 25000, 35000, 50000, 75000, 100000, 150000,
    200000, 275000, 350000, 450000, 550000, 700000, 850000, 1000000, 1250000, 1500000, 1800000,
    2100000, 2400000, 2700000, 3000000, 3500000, 4000000, 4500000, 5000000,
];

/// Flat and percentage damage reduction from equipment and abilities.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DamageReduction {
    pub flat: i32,
    pub percent: i32,
}

/// Repeated or automatic activity that a hit interrupts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Activity {
    pub resting: bool,
    pub running: bool,
    pub repeating: bool,
}

impl Activity {
    pub fn is_idle(&self) -> bool {
        !(self.resting || self.running || self.repeating)
    }
}

/// Result of [`PlayerState::take_hit`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HitOutcome {
    /// No damage, or the player was already dead.
    Ignored,
    Survived { low_hp_warning: bool },
    Died,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerState {
    pub grid: Position,
    pub level: i32,
    pub exp: i32,
    pub max_exp: i32,
    /// Experience factor in percent (race + class).
    pub exp_factor: i32,
    pub hp: Pool,
    pub mana: Pool,
    pub energy: i32,
    pub stats: StatBlock,
    pub timed: TimedEffects,
    pub resists: ResistanceProfile,
    pub equip_flags: EquipFlags,
    pub flags: PlayerFlags,
    /// Saving throw, 0..=100.
    pub skill_save: i32,
    pub damage_reduction: DamageReduction,
    pub knowledge: Knowledge,
    pub activity: Activity,
    pub is_dead: bool,
    pub died_from: Option<String>,
}

impl PlayerState {
    pub fn new(grid: Position, max_hp: i32) -> Self {
        Self {
            grid,
            level: 1,
            exp: 0,
            max_exp: 0,
            exp_factor: 100,
            hp: Pool::full(max_hp),
            mana: Pool::default(),
            energy: 0,
            stats: StatBlock::default(),
            timed: TimedEffects::default(),
            resists: ResistanceProfile::default(),
            equip_flags: EquipFlags::empty(),
            flags: PlayerFlags::empty(),
            skill_save: 0,
            damage_reduction: DamageReduction::default(),
            knowledge: Knowledge::default(),
            activity: Activity::default(),
            is_dead: false,
            died_from: None,
        }
    }

    #[must_use]
    pub fn with_resist(mut self, kind: ProjectionKind, level: ResistLevel) -> Self {
        self.resists.set(kind, level);
        self
    }

    #[must_use]
    pub fn with_equip_flags(mut self, flags: EquipFlags) -> Self {
        self.equip_flags |= flags;
        self
    }

    /// Sets experience and the matching level.
    #[must_use]
    pub fn with_exp(mut self, exp: i32) -> Self {
        self.exp = exp;
        self.max_exp = exp;
        self.adjust_level();
        self
    }

    #[must_use]
    pub fn with_mana(mut self, mana: Pool) -> Self {
        self.mana = mana;
        self
    }

    #[must_use]
    pub fn with_skill_save(mut self, skill_save: i32) -> Self {
        self.skill_save = skill_save;
        self
    }

    // ===== resistances =====

    /// Resistance tier against `kind`; non-elements are never resisted.
    pub fn resist_level(&self, kind: ProjectionKind) -> ResistLevel {
        self.resists.get(kind)
    }

    pub fn resists(&self, kind: ProjectionKind) -> bool {
        self.resists.resists(kind)
    }

    pub fn is_immune(&self, kind: ProjectionKind) -> bool {
        self.resists.is_immune(kind)
    }

    pub fn learn_element(&mut self, kind: ProjectionKind) {
        if self.knowledge.learn_element(kind) {
            tracing::trace!(%kind, "learnt element");
        }
    }

    // ===== equipment flags =====

    pub fn has_equip_flag(&self, flag: EquipFlags) -> bool {
        self.equip_flags.contains(flag)
    }

    /// Learns `flag` from equipment, if the equipment actually has it.
    pub fn learn_equip_flag(&mut self, flag: EquipFlags) {
        if self.has_equip_flag(flag) && self.knowledge.learn_flag(flag) {
            tracing::trace!(?flag, "learnt equipment flag");
        }
    }

    // ===== timed effects =====

    /// Returns false if something protects against `effect`.
    ///
    /// With `lore` set, a protecting equipment flag becomes known.
    pub fn inc_check(&mut self, effect: TimedEffect, lore: bool) -> bool {
        match effect.protection() {
            Some(Protection::Flag(flag)) if self.has_equip_flag(flag) => {
                if lore {
                    self.learn_equip_flag(flag);
                }
                false
            }
            Some(Protection::Resist(kind)) if self.resists(kind) => {
                if lore {
                    self.learn_element(kind);
                }
                false
            }
            _ => true,
        }
    }

    /// Extends `effect` by `amount` turns, capped at `cap`.
    ///
    /// With `check` set, protections are consulted (and learnt) first.
    pub fn inc_timed(
        &mut self,
        effect: TimedEffect,
        amount: i32,
        check: bool,
        cap: i32,
    ) -> TimedChange {
        if amount <= 0 {
            return TimedChange::Ignored;
        }
        if check && !self.inc_check(effect, true) {
            return TimedChange::Blocked;
        }
        self.timed.extend(effect, amount, cap)
    }

    // ===== hit points =====

    /// Damage left after invulnerability and reductions, never negative.
    pub fn apply_damage_reduction(&self, dam: i32) -> i32 {
        if self.timed.is_active(TimedEffect::Invulnerable)
            && dam < ProjectionConfig::INVULNERABILITY_LIMIT
        {
            return 0;
        }
        let mut dam = dam - self.damage_reduction.flat;
        if self.damage_reduction.percent != 0 {
            dam -= dam * self.damage_reduction.percent / 100;
        }
        dam.max(0)
    }

    /// Subtracts `dam` hit points; `killer` is recorded on death.
    ///
    /// `warn_tenths` is the low hit point warning threshold in tenths of max.
    pub fn take_hit(&mut self, dam: i32, killer: &str, warn_tenths: i32) -> HitOutcome {
        if self.is_dead || dam <= 0 {
            return HitOutcome::Ignored;
        }

        self.disturb();
        self.hp.current -= dam;

        if self.hp.current < 0 {
            self.is_dead = true;
            self.died_from = Some(killer.to_owned());
            tracing::debug!(killer, "player killed");
            return HitOutcome::Died;
        }

        let warning = self.hp.maximum * warn_tenths / 10;
        HitOutcome::Survived {
            low_hp_warning: self.hp.current < warning,
        }
    }

    // ===== experience =====

    /// Loses up to `amount` experience; `permanent` also lowers the maximum.
    pub fn lose_exp(&mut self, amount: i32, permanent: bool) {
        let amount = amount.clamp(0, self.exp);
        self.exp -= amount;
        if permanent {
            self.max_exp -= amount;
        }
        self.adjust_level();
    }

    fn adjust_level(&mut self) {
        self.level = self.level.clamp(1, ProjectionConfig::MAX_LEVEL);
        self.exp = self.exp.max(0);
        self.max_exp = self.max_exp.max(self.exp);

        while self.level > 1 && i64::from(self.exp) < self.exp_to_reach(self.level) {
            self.level -= 1;
        }
        while self.level < ProjectionConfig::MAX_LEVEL
            && i64::from(self.exp) >= self.exp_to_reach(self.level + 1)
        {
            self.level += 1;
        }
    }

    /// Experience needed to reach `level` (>= 2).
    fn exp_to_reach(&self, level: i32) -> i64 {
        let base = PLAYER_EXP[(level - 2) as usize];
        i64::from(base) * i64::from(self.exp_factor) / 100
    }

    // ===== activity =====

    /// Interrupts resting, running and command repetition.
    pub fn disturb(&mut self) {
        self.activity = Activity::default();
    }
}
