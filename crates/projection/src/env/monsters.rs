//! Monster queries used for origin identity and lore.

use crate::projection::ProjectionKind;
use crate::state::{MonsterId, PlayerState, Position};

/// Monster collaborator supplied by the host.
pub trait MonsterOracle {
    /// Capitalised, pronoun-aware description suitable for a cause of death
    /// ("The cave orc", "Grip, Farmer Maggot's Dog").
    ///
    /// Returns `None` when the host cannot describe the monster.
    fn describe(&self, id: MonsterId) -> Option<String>;

    /// Whether the player can currently see the monster.
    fn is_visible(&self, id: MonsterId) -> bool;

    /// Current grid of the monster, or `None` if it no longer exists.
    fn grid(&self, id: MonsterId) -> Option<Position>;

    /// Records that the monster observed how the player fared against `kind`.
    fn learn_from_projection(&mut self, id: MonsterId, kind: ProjectionKind, player: &PlayerState);
}
