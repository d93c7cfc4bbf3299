//! Notification events emitted during resolution.

use std::fmt;

use crate::projection::ProjectionKind;
use crate::state::{Stat, TimedEffect};

/// Abstract notification; the host decides how (or whether) to show it.
///
/// `Display` renders the canonical English text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Message {
    /// Hit by something the player could not see.
    UnseenHit(ProjectionKind),
    DamageTaken(i32),
    ExtraDamageTaken(i32),
    LowHitpointWarning,
    /// A timed effect has just begun.
    StatusGained(TimedEffect),
    Resisted,
    Avoided,
    HeatSaps,
    SmokeInEyes,
    PoisonousFumes,
    ColdSeeps,
    ColdWithersLife,
    VenomStings,
    StenchSickens,
    Dazzled,
    DarknessStealsLife,
    UnsureInDarkness,
    DarknessPenetratesMind,
    NoiseDisorients,
    LifeDraining,
    MindDulled,
    EnergySapped,
    GravityWarps,
    StatDrained(Stat),
    AllStatsDrained,
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnseenHit(kind) => write!(f, "You are hit by {}!", kind.info().blind_desc),
            Self::DamageTaken(dam) => write!(f, "You take {dam} damage."),
            Self::ExtraDamageTaken(dam) => write!(f, "You take an extra {dam} damage."),
            Self::LowHitpointWarning => f.write_str("*** LOW HITPOINT WARNING! ***"),
            Self::StatusGained(effect) => f.write_str(effect.on_begin()),
            Self::Resisted => f.write_str("You resist the effect!"),
            Self::Avoided => f.write_str("You avoid the effect!"),
            Self::HeatSaps => f.write_str("The intense heat saps you."),
            Self::SmokeInEyes => f.write_str("Your eyes fill with smoke!"),
            Self::PoisonousFumes => f.write_str("You are assailed by poisonous fumes!"),
            Self::ColdSeeps => f.write_str("The cold seeps into your bones."),
            Self::ColdWithersLife => f.write_str("The cold withers your life force!"),
            Self::VenomStings => f.write_str("The venom stings your skin!"),
            Self::StenchSickens => f.write_str("The stench sickens you."),
            Self::Dazzled => f.write_str("You are dazzled!"),
            Self::DarknessStealsLife => f.write_str("The darkness steals your life force!"),
            Self::UnsureInDarkness => f.write_str("You feel unsure of yourself in the darkness."),
            Self::DarknessPenetratesMind => f.write_str("Darkness penetrates your mind!"),
            Self::NoiseDisorients => f.write_str("The noise disorients you."),
            Self::LifeDraining => f.write_str("You feel your life force draining away!"),
            Self::MindDulled => f.write_str("Your mind is dulled."),
            Self::EnergySapped => f.write_str("Your energy is sapped!"),
            Self::GravityWarps => f.write_str("Gravity warps around you."),
            Self::StatDrained(stat) => {
                write!(f, "You're not as {} as you used to be...", stat.adjective())
            }
            Self::AllStatsDrained => f.write_str("You're not as powerful as you used to be..."),
        }
    }
}

/// Receives notifications in the order they occur.
pub trait MessageSink {
    fn push(&mut self, message: Message);
}

impl MessageSink for Vec<Message> {
    fn push(&mut self, message: Message) {
        Vec::push(self, message);
    }
}
