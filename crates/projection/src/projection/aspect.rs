use crate::env::Dice;

/// Policy for collapsing a random range to a single value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum RoundingAspect {
    Minimise,
    Maximise,
    Average,
    Extremify,
    Randomise,
}

impl RoundingAspect {
    /// Aspect to use for a value that divides.
    ///
    /// The smallest damage comes from the largest divisor, so minimising and
    /// maximising swap; the other aspects are unchanged.
    pub fn for_divisor(self) -> Self {
        match self {
            Self::Minimise => Self::Maximise,
            Self::Maximise => Self::Minimise,
            other => other,
        }
    }
}

/// `base + dice d sides`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RandomValue {
    pub base: i32,
    pub dice: i32,
    pub sides: i32,
}

impl RandomValue {
    pub const fn new(base: i32, dice: i32, sides: i32) -> Self {
        Self { base, dice, sides }
    }

    pub const fn fixed(base: i32) -> Self {
        Self::new(base, 0, 0)
    }

    /// Resolves the value under `aspect`. Only `Randomise` consumes rolls.
    pub fn calc(&self, aspect: RoundingAspect, dice: &mut Dice<'_>) -> i32 {
        let rolled = match aspect {
            RoundingAspect::Minimise => self.dice,
            RoundingAspect::Maximise | RoundingAspect::Extremify => self.dice * self.sides,
            RoundingAspect::Average => self.dice * (self.sides + 1) / 2,
            RoundingAspect::Randomise => dice.damroll(self.dice, self.sides),
        };
        self.base + rolled
    }
}
