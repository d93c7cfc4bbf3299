use crate::projection::{ELEMENT_COUNT, ProjectionKind};
use crate::state::EquipFlags;

/// What the player has learnt about their own defences.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Knowledge {
    elements: [bool; ELEMENT_COUNT],
    flags: EquipFlags,
}

impl Knowledge {
    /// Marks an element as known. Non-elements are ignored.
    ///
    /// Returns true if this was new knowledge.
    pub fn learn_element(&mut self, kind: ProjectionKind) -> bool {
        let Some(index) = kind.element_index() else {
            return false;
        };
        let fresh = !self.elements[index];
        self.elements[index] = true;
        fresh
    }

    pub fn knows_element(&self, kind: ProjectionKind) -> bool {
        kind.element_index()
            .is_some_and(|index| self.elements[index])
    }

    /// Returns true if any of `flags` was new knowledge.
    pub fn learn_flag(&mut self, flags: EquipFlags) -> bool {
        let fresh = !self.flags.contains(flags);
        self.flags.insert(flags);
        fresh
    }

    pub fn knows_flag(&self, flag: EquipFlags) -> bool {
        self.flags.contains(flag)
    }
}

impl Default for Knowledge {
    fn default() -> Self {
        Self {
            elements: [false; ELEMENT_COUNT],
            flags: EquipFlags::empty(),
        }
    }
}
