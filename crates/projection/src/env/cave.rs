//! Dungeon grid queries needed when a projection lands.

use crate::state::Position;

/// Grid-level collaborator supplied by the host.
///
/// The engine never walks the map; it only asks about the single grid a
/// projection is being applied to.
pub trait CaveOracle {
    /// Returns true if a decoy occupies `grid`.
    fn is_decoyed(&self, grid: Position) -> bool;

    /// Removes the decoy at `grid`.
    fn destroy_decoy(&mut self, grid: Position);

    /// Returns true if the player stands on `grid`.
    fn is_player(&self, grid: Position) -> bool;
}
