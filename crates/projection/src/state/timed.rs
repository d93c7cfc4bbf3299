//! Timed status counters.
//!
//! Each effect is a countdown in game turns; zero means inactive. Some effects
//! can be blocked outright, either by an equipment flag or by resisting an
//! element.

use strum::EnumCount;

use crate::projection::ProjectionKind;
use crate::state::EquipFlags;

/// Timed effects a projection can inflict.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumIter,
    strum::EnumCount,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum TimedEffect {
    Blind,
    Confused,
    Poisoned,
    Cut,
    Stun,
    Slow,
    /// Hallucination.
    Image,
    Amnesia,
    /// Stats shuffled by nexus.
    Scramble,
    Invulnerable,
}

/// What can prevent a timed effect from taking hold.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Protection {
    Flag(EquipFlags),
    Resist(ProjectionKind),
}

impl TimedEffect {
    pub fn protection(self) -> Option<Protection> {
        match self {
            Self::Blind => Some(Protection::Flag(EquipFlags::PROT_BLIND)),
            Self::Confused => Some(Protection::Flag(EquipFlags::PROT_CONF)),
            Self::Stun => Some(Protection::Flag(EquipFlags::PROT_STUN)),
            Self::Amnesia => Some(Protection::Flag(EquipFlags::PROT_AMNESIA)),
            Self::Poisoned => Some(Protection::Resist(ProjectionKind::Poison)),
            Self::Image => Some(Protection::Resist(ProjectionKind::Chaos)),
            Self::Cut | Self::Slow | Self::Scramble | Self::Invulnerable => None,
        }
    }

    /// Text shown when the effect begins.
    pub fn on_begin(self) -> &'static str {
        match self {
            Self::Blind => "You are blind.",
            Self::Confused => "You are confused!",
            Self::Poisoned => "You are poisoned!",
            Self::Cut => "You have been given a graze.",
            Self::Stun => "You have been stunned.",
            Self::Slow => "You feel yourself moving slower!",
            Self::Image => "You feel drugged!",
            Self::Amnesia => "You feel your memories fade.",
            Self::Scramble => "Your body starts to scramble...",
            Self::Invulnerable => "You feel invulnerable!",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Outcome of trying to extend a timed effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimedChange {
    /// A protection prevented the effect.
    Blocked,
    /// Nothing to add.
    Ignored,
    /// The effect was inactive and has now begun.
    Started,
    /// An active effect was extended.
    Increased,
}

impl TimedChange {
    /// True if the counter actually changed.
    pub fn applied(self) -> bool {
        matches!(self, Self::Started | Self::Increased)
    }
}

/// Counters for every timed effect.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimedEffects {
    counters: [i32; TimedEffect::COUNT],
}

impl TimedEffects {
    pub fn get(&self, effect: TimedEffect) -> i32 {
        self.counters[effect.index()]
    }

    pub fn is_active(&self, effect: TimedEffect) -> bool {
        self.get(effect) > 0
    }

    pub fn set(&mut self, effect: TimedEffect, turns: i32) {
        self.counters[effect.index()] = turns.max(0);
    }

    /// Adds `amount` turns, capped at `cap`.
    pub(crate) fn extend(&mut self, effect: TimedEffect, amount: i32, cap: i32) -> TimedChange {
        if amount <= 0 {
            return TimedChange::Ignored;
        }
        let old = self.get(effect);
        let new = old.saturating_add(amount).min(cap);
        if new == old {
            return TimedChange::Ignored;
        }
        self.set(effect, new);
        if old == 0 {
            TimedChange::Started
        } else {
            TimedChange::Increased
        }
    }
}
