//! The closed set of projection kinds and their static properties.

use super::RandomValue;

/// Number of resistible kinds; they occupy the first slots of [`ProjectionKind`].
pub const ELEMENT_COUNT: usize = 25;

/// Every kind of projection.
///
/// The first [`ELEMENT_COUNT`] variants are elements, which the player can
/// resist. The rest only matter to monsters and terrain and leave the player
/// untouched beyond their primary damage.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumIter,
    strum::EnumCount,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
#[repr(u8)]
pub enum ProjectionKind {
    // ========================================================================
    // Elements
    // ========================================================================
    Acid,
    Elec,
    Fire,
    Cold,
    Poison,
    Light,
    Dark,
    Sound,
    Shard,
    Nexus,
    Nether,
    Chaos,
    Disenchant,
    Water,
    Ice,
    Gravity,
    Inertia,
    Force,
    Time,
    Plasma,
    Meteor,
    Missile,
    Mana,
    HolyOrb,
    Arrow,

    // ========================================================================
    // Non-elemental projections
    // ========================================================================
    LightWeak,
    DarkWeak,
    KillWall,
    KillDoor,
    KillTrap,
    MakeDoor,
    MakeTrap,
    AwayUndead,
    AwayEvil,
    AwaySpirit,
    AwayAll,
    TurnUndead,
    TurnEvil,
    TurnLiving,
    TurnAll,
    DispUndead,
    DispEvil,
    DispAll,
    SleepUndead,
    SleepEvil,
    SleepAll,
    MonClone,
    MonPoly,
    MonHeal,
    MonSpeed,
    MonSlow,
    MonConf,
    MonHold,
    MonStun,
    MonDrain,
    MonCrush,
}

/// Static properties of a projection kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProjectionInfo {
    /// Multiplier applied once per resistance tier.
    pub numerator: i32,
    /// Divisor applied once per resistance tier.
    pub denominator: RandomValue,
    /// What a blind player feels.
    pub blind_desc: &'static str,
}

impl ProjectionInfo {
    const fn new(numerator: i32, denominator: RandomValue, blind_desc: &'static str) -> Self {
        Self {
            numerator,
            denominator,
            blind_desc,
        }
    }
}

const BASE_ELEMENT: RandomValue = RandomValue::fixed(3);
const HIGH_ELEMENT: RandomValue = RandomValue::new(6, 1, 6);
const UNIT: RandomValue = RandomValue::fixed(1);

impl ProjectionKind {
    pub fn is_element(self) -> bool {
        (self as usize) < ELEMENT_COUNT
    }

    /// Slot in per-element tables, if this kind is an element.
    pub fn element_index(self) -> Option<usize> {
        self.is_element().then_some(self as usize)
    }

    pub fn info(self) -> ProjectionInfo {
        use ProjectionKind::*;
        match self {
            Acid => ProjectionInfo::new(1, BASE_ELEMENT, "acid"),
            Elec => ProjectionInfo::new(1, BASE_ELEMENT, "lightning"),
            Fire => ProjectionInfo::new(1, BASE_ELEMENT, "fire"),
            Cold => ProjectionInfo::new(1, BASE_ELEMENT, "cold"),
            Poison => ProjectionInfo::new(1, BASE_ELEMENT, "poison"),
            Light | Dark => ProjectionInfo::new(4, HIGH_ELEMENT, "something"),
            Sound => ProjectionInfo::new(5, HIGH_ELEMENT, "noise"),
            Shard => ProjectionInfo::new(6, HIGH_ELEMENT, "something sharp"),
            Nexus | Chaos | Disenchant => ProjectionInfo::new(6, HIGH_ELEMENT, "something strange"),
            Nether => ProjectionInfo::new(6, HIGH_ELEMENT, "something cold"),
            Water => ProjectionInfo::new(1, UNIT, "water"),
            Ice | Arrow => ProjectionInfo::new(1, UNIT, "something sharp"),
            Gravity | Inertia | Time => ProjectionInfo::new(1, UNIT, "something strange"),
            Force => ProjectionInfo::new(1, UNIT, "something hard"),
            _ => ProjectionInfo::new(1, UNIT, "something"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::{EnumCount, IntoEnumIterator};

    #[test]
    fn elements_come_first() {
        assert_eq!(ProjectionKind::COUNT, 56);
        let elements: Vec<_> = ProjectionKind::iter().filter(|k| k.is_element()).collect();
        assert_eq!(elements.len(), ELEMENT_COUNT);
        assert_eq!(elements.first(), Some(&ProjectionKind::Acid));
        assert_eq!(elements.last(), Some(&ProjectionKind::Arrow));
        assert_eq!(ProjectionKind::LightWeak.element_index(), None);
        assert_eq!(ProjectionKind::Ice.element_index(), Some(14));
    }

    #[test]
    fn resistance_ratios() {
        assert_eq!(ProjectionKind::Fire.info().numerator, 1);
        assert_eq!(ProjectionKind::Fire.info().denominator, RandomValue::fixed(3));
        assert_eq!(ProjectionKind::Sound.info().numerator, 5);
        assert_eq!(ProjectionKind::Nether.info().denominator, RandomValue::new(6, 1, 6));
    }

    #[test]
    fn names_are_snake_case() {
        assert_eq!(ProjectionKind::HolyOrb.to_string(), "holy_orb");
        assert_eq!(ProjectionKind::MonCrush.as_ref(), "mon_crush");
    }
}
