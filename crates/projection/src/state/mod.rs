//! Player model mutated by projections.
//!
//! The engine borrows the player mutably for one resolution. Everything here is
//! plain data plus the small rule helpers (timed effects, hit points, experience,
//! stat drain) that the handlers compose.
mod common;
mod flags;
mod knowledge;
mod player;
mod stats;
mod timed;

pub use common::{DIRECTIONS, MonsterId, Pool, Position};
pub use flags::{EquipFlags, PlayerFlags};
pub use knowledge::Knowledge;
pub use player::{Activity, DamageReduction, HitOutcome, PLAYER_EXP, PlayerState};
pub use stats::{Stat, StatBlock};
pub use timed::{Protection, TimedChange, TimedEffect, TimedEffects};
