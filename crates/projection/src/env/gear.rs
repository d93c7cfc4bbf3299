//! Inventory and equipment collaborator.

use crate::origin::ObjectHandle;
use crate::projection::ProjectionKind;
use crate::state::Position;

/// Gear collaborator supplied by the host.
pub trait GearOracle {
    /// Prefixed base-form name of an object ("a Flask of Oil").
    fn object_name(&self, handle: ObjectHandle) -> String;

    /// Grid the object occupies, if it is on the floor.
    fn object_grid(&self, handle: ObjectHandle) -> Option<Position>;

    /// Exposes the inventory to `kind`. Vulnerable items are destroyed with
    /// a host-defined probability scaled by `chance`.
    fn damage_inventory(&mut self, kind: ProjectionKind, chance: i32);

    /// Lets a random armour piece soak up acid. Returns true if any armour
    /// took the hit, which halves the incoming acid damage.
    fn armour_absorbs_acid(&mut self) -> bool;
}
