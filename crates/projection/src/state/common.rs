use std::fmt;
use std::ops::Add;

/// Identifier of a monster in the host's monster list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MonsterId(pub u32);

impl fmt::Display for MonsterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Discrete grid position expressed in tile coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::ORIGIN
    }
}

impl Add for Position {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

/// The eight neighbouring offsets, orthogonal first.
pub const DIRECTIONS: [Position; 8] = [
    Position::new(0, 1),
    Position::new(0, -1),
    Position::new(1, 0),
    Position::new(-1, 0),
    Position::new(1, 1),
    Position::new(-1, 1),
    Position::new(1, -1),
    Position::new(-1, -1),
];

/// A current/maximum resource pair (hit points, mana).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pool {
    pub current: i32,
    pub maximum: i32,
}

impl Pool {
    pub const fn full(maximum: i32) -> Self {
        Self {
            current: maximum,
            maximum,
        }
    }

    pub const fn new(current: i32, maximum: i32) -> Self {
        Self { current, maximum }
    }
}
