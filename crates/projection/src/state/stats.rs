//! Primary stats and stat drain.
//!
//! Stat values use the classic encoding: 3..=18 are plain values and
//! `18 + n` stands for "18/n" (so 28 is 18/10).

use strum::EnumCount;

/// The five primary stats.
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
pub enum Stat {
    Str,
    Int,
    Wis,
    Dex,
    Con,
}

impl Stat {
    /// Stat selected by a `randint1(5)` roll.
    pub fn from_roll(roll: i32) -> Option<Self> {
        match roll {
            1 => Some(Self::Str),
            2 => Some(Self::Int),
            3 => Some(Self::Wis),
            4 => Some(Self::Dex),
            5 => Some(Self::Con),
            _ => None,
        }
    }

    /// Adjective used in drain messages.
    pub fn adjective(self) -> &'static str {
        match self {
            Self::Str => "strong",
            Self::Int => "bright",
            Self::Wis => "wise",
            Self::Dex => "agile",
            Self::Con => "hale",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Lowest value a stat can be drained to.
const STAT_FLOOR: i32 = 3;
/// Encoded 18/10.
const STAT_18_10: i32 = 18 + 10;

/// Current and maximum values for every stat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatBlock {
    current: [i32; Stat::COUNT],
    maximum: [i32; Stat::COUNT],
}

impl StatBlock {
    /// Every stat at `value`, current equal to maximum.
    pub fn uniform(value: i32) -> Self {
        Self {
            current: [value; Stat::COUNT],
            maximum: [value; Stat::COUNT],
        }
    }

    pub fn with(mut self, stat: Stat, value: i32) -> Self {
        self.current[stat.index()] = value;
        self.maximum[stat.index()] = value;
        self
    }

    pub fn current(&self, stat: Stat) -> i32 {
        self.current[stat.index()]
    }

    pub fn maximum(&self, stat: Stat) -> i32 {
        self.maximum[stat.index()]
    }

    /// Lowers `stat` by one drain step; `permanent` also lowers the maximum.
    ///
    /// Returns whether anything changed.
    pub fn decrease(&mut self, stat: Stat, permanent: bool) -> bool {
        let i = stat.index();
        let cur = drained(self.current[i]);
        let mut changed = cur != self.current[i];
        self.current[i] = cur;

        if permanent {
            let max = drained(self.maximum[i]);
            changed |= max != self.maximum[i];
            self.maximum[i] = max;
        }
        changed
    }
}

impl Default for StatBlock {
    fn default() -> Self {
        Self::uniform(10)
    }
}

fn drained(value: i32) -> i32 {
    if value > STAT_18_10 {
        value - 10
    } else if value > 18 {
        18
    } else if value > STAT_FLOOR {
        value - 1
    } else {
        value
    }
}
