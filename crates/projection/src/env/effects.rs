//! Named effects delegated to the host's effect system.

use crate::origin::Origin;
use crate::state::{PlayerState, Position, Stat};

/// Effects whose full behaviour lives outside this crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NamedEffect {
    /// Drain one stat, honouring sustains.
    DrainStat(Stat),
    /// Random teleport up to `range` grids away.
    Teleport { range: i32 },
    /// Teleport the player next to `grid`.
    TeleportTo { grid: Position },
    /// Move the player up or down a level.
    TeleportLevel,
    /// Reduce the enchantment of a random equipped item.
    Disenchant,
    /// Push the player away from `centre`, starting at `grid`.
    ThrustAway {
        centre: Position,
        grid: Position,
        distance: i32,
    },
}

/// Effect collaborator supplied by the host.
pub trait EffectOracle {
    /// Runs `effect` on behalf of `origin`.
    ///
    /// Returns whether the effect was noticed by the player.
    fn invoke(&mut self, effect: NamedEffect, origin: &Origin, player: &mut PlayerState) -> bool;
}
