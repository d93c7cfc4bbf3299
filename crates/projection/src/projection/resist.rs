use super::{ELEMENT_COUNT, ProjectionKind};

/// Resistance tier against one element.
///
/// -1 is vulnerable, 0 is unprotected, 1 and 2 apply the element's ratio that
/// many times, and 3 is immune.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResistLevel(i8);

impl ResistLevel {
    pub const VULNERABLE: Self = Self(-1);
    pub const NONE: Self = Self(0);
    pub const RESIST: Self = Self(1);
    pub const IMMUNE: Self = Self(3);

    /// Builds a level, clamping into `-1..=3`.
    pub const fn new(level: i8) -> Self {
        if level < -1 {
            Self::VULNERABLE
        } else if level > 3 {
            Self::IMMUNE
        } else {
            Self(level)
        }
    }

    pub const fn get(self) -> i8 {
        self.0
    }

    pub const fn is_immune(self) -> bool {
        self.0 == Self::IMMUNE.0
    }

    pub const fn is_vulnerable(self) -> bool {
        self.0 < 0
    }

    pub const fn resists(self) -> bool {
        self.0 > 0
    }

    /// Number of times the resistance ratio is applied.
    pub const fn tiers(self) -> i32 {
        if self.0 > 0 { self.0 as i32 } else { 0 }
    }
}

/// Resistance levels for every element.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResistanceProfile {
    levels: [ResistLevel; ELEMENT_COUNT],
}

impl ResistanceProfile {
    /// Level against `kind`; non-elements always report [`ResistLevel::NONE`].
    pub fn get(&self, kind: ProjectionKind) -> ResistLevel {
        kind.element_index()
            .map_or(ResistLevel::NONE, |index| self.levels[index])
    }

    /// Sets the level against an element. Non-elements are ignored.
    pub fn set(&mut self, kind: ProjectionKind, level: ResistLevel) {
        if let Some(index) = kind.element_index() {
            self.levels[index] = level;
        }
    }

    pub fn with(mut self, kind: ProjectionKind, level: ResistLevel) -> Self {
        self.set(kind, level);
        self
    }

    pub fn resists(&self, kind: ProjectionKind) -> bool {
        self.get(kind).resists()
    }

    pub fn is_immune(&self, kind: ProjectionKind) -> bool {
        self.get(kind).is_immune()
    }
}
