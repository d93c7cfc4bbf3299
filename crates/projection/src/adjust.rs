//! Damage adjustment for resistance, vulnerability and immunity.
//!
//! Each resistance tier multiplies damage by the kind's ratio
//! (`numerator / denominator`). Because the denominator may be random, the
//! requested rounding aspect is inverted for it: the minimum damage comes from
//! the maximum divisor.

use crate::env::{Dice, GearOracle};
use crate::projection::{ProjectionKind, ResistLevel, RoundingAspect};
use crate::state::PlayerState;

/// A concrete player whose own resistances and armour take part.
pub struct Defender<'d> {
    pub player: &'d mut PlayerState,
    pub gear: &'d mut dyn GearOracle,
}

/// Adjusts raw damage `dam` of `kind` for resistance.
///
/// With a `defender`, the caller's `resist` is replaced by the player's own
/// level (ice uses cold's), `learn` marks that element as known, and acid may
/// be halved by armour. Without one this is a pure calculation on `resist`.
pub fn adjust_damage(
    mut defender: Option<Defender<'_>>,
    kind: ProjectionKind,
    dam: i32,
    aspect: RoundingAspect,
    resist: ResistLevel,
    learn: bool,
    dice: &mut Dice<'_>,
) -> i32 {
    let mut resist = resist;
    if let Some(defender) = defender.as_mut() {
        let resist_kind = match kind {
            ProjectionKind::Ice => ProjectionKind::Cold,
            other => other,
        };
        resist = defender.player.resist_level(resist_kind);
        if learn {
            defender.player.learn_element(resist_kind);
        }
    }

    if resist.is_immune() {
        return 0;
    }

    let mut dam = dam;
    if kind == ProjectionKind::Acid
        && let Some(defender) = defender.as_mut()
        && defender.gear.armour_absorbs_acid()
    {
        dam = (dam + 1) / 2;
    }

    if resist.is_vulnerable() {
        return dam * 4 / 3;
    }

    let info = kind.info();
    let denom = info.denominator.calc(aspect.for_divisor(), dice);
    let adjusted = scale_by_tiers(dam, info.numerator, denom, resist.tiers());
    tracing::trace!(%kind, dam, adjusted, denom, tiers = resist.tiers(), "adjusted damage");
    adjusted
}

/// Applies `numerator / denom` once per tier; a zero divisor leaves damage alone.
fn scale_by_tiers(dam: i32, numerator: i32, denom: i32, tiers: i32) -> i32 {
    if denom == 0 {
        return dam;
    }
    (0..tiers).fold(dam, |dam, _| dam * numerator / denom)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::PcgRng;
    use crate::state::Position;
    use crate::testing::{ScriptedRng, TestGear};
    use strum::IntoEnumIterator;

    fn calc(kind: ProjectionKind, dam: i32, aspect: RoundingAspect, resist: i8) -> i32 {
        let mut dice = Dice::new(&PcgRng, 11, 2);
        adjust_damage(None, kind, dam, aspect, ResistLevel::new(resist), false, &mut dice)
    }

    #[test]
    fn immunity_always_zeroes() {
        for kind in ProjectionKind::iter() {
            for dam in [0, 1, 57, 1600] {
                assert_eq!(calc(kind, dam, RoundingAspect::Randomise, 3), 0, "{kind}");
            }
        }
    }

    #[test]
    fn vulnerability_adds_a_third() {
        for dam in [0, 1, 2, 100, 999] {
            assert_eq!(
                calc(ProjectionKind::Fire, dam, RoundingAspect::Randomise, -1),
                dam * 4 / 3
            );
        }
    }

    #[test]
    fn base_element_tiers() {
        assert_eq!(calc(ProjectionKind::Fire, 90, RoundingAspect::Average, 1), 30);
        assert_eq!(calc(ProjectionKind::Fire, 90, RoundingAspect::Average, 2), 10);
        assert_eq!(calc(ProjectionKind::Fire, 90, RoundingAspect::Average, 0), 90);
    }

    #[test]
    fn variable_denominator_inverts_the_aspect() {
        assert_eq!(calc(ProjectionKind::Light, 100, RoundingAspect::Minimise, 1), 33);
        assert_eq!(calc(ProjectionKind::Light, 100, RoundingAspect::Maximise, 1), 57);
        assert_eq!(calc(ProjectionKind::Light, 100, RoundingAspect::Average, 1), 44);
        assert_eq!(calc(ProjectionKind::Light, 100, RoundingAspect::Extremify, 1), 33);
    }

    #[test]
    fn zero_denominator_skips_the_tier() {
        assert_eq!(scale_by_tiers(40, 1, 0, 2), 40);
        assert_eq!(scale_by_tiers(40, 1, 2, 2), 10);
    }

    #[test]
    fn armour_halves_acid_rounding_up() {
        let mut player = PlayerState::new(Position::ORIGIN, 100);
        let mut gear = TestGear {
            armour_absorbs: true,
            ..TestGear::default()
        };
        let mut dice = Dice::new(&PcgRng, 0, 0);
        let dam = adjust_damage(
            Some(Defender {
                player: &mut player,
                gear: &mut gear,
            }),
            ProjectionKind::Acid,
            101,
            RoundingAspect::Average,
            ResistLevel::NONE,
            true,
            &mut dice,
        );
        assert_eq!(dam, 51);
        assert_eq!(gear.acid_checks, 1);
        assert!(player.knowledge.knows_element(ProjectionKind::Acid));
    }

    #[test]
    fn defender_overrides_the_supplied_level() {
        let mut player = PlayerState::new(Position::ORIGIN, 100)
            .with_resist(ProjectionKind::Cold, ResistLevel::IMMUNE);
        let mut gear = TestGear::default();
        let rng = ScriptedRng::new(&[]);
        let mut dice = Dice::new(&rng, 0, 0);
        let dam = adjust_damage(
            Some(Defender {
                player: &mut player,
                gear: &mut gear,
            }),
            ProjectionKind::Ice,
            80,
            RoundingAspect::Randomise,
            ResistLevel::VULNERABLE,
            true,
            &mut dice,
        );
        assert_eq!(dam, 0);
        assert!(player.knowledge.knows_element(ProjectionKind::Cold));
        assert!(!player.knowledge.knows_element(ProjectionKind::Ice));
        assert_eq!(rng.consumed(), 0);
    }

    #[test]
    fn immune_acid_never_touches_armour() {
        let mut player = PlayerState::new(Position::ORIGIN, 100)
            .with_resist(ProjectionKind::Acid, ResistLevel::IMMUNE);
        let mut gear = TestGear {
            armour_absorbs: true,
            ..TestGear::default()
        };
        let mut dice = Dice::new(&PcgRng, 0, 0);
        let dam = adjust_damage(
            Some(Defender {
                player: &mut player,
                gear: &mut gear,
            }),
            ProjectionKind::Acid,
            50,
            RoundingAspect::Randomise,
            ResistLevel::NONE,
            false,
            &mut dice,
        );
        assert_eq!(dam, 0);
        assert_eq!(gear.acid_checks, 0);
        assert!(!player.knowledge.knows_element(ProjectionKind::Acid));
    }
}
