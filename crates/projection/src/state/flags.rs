use bitflags::bitflags;

bitflags! {
    /// Protective properties granted by worn equipment.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct EquipFlags: u16 {
        /// Experience cannot be drained.
        const HOLD_LIFE    = 1 << 0;
        const PROT_STUN    = 1 << 1;
        const PROT_CONF    = 1 << 2;
        const PROT_BLIND   = 1 << 3;
        const PROT_AMNESIA = 1 << 4;
    }
}

bitflags! {
    /// Intrinsic player properties (race/class abilities).
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct PlayerFlags: u16 {
        /// At home in the dark; weak darkness is shrugged off silently.
        const UNLIGHT = 1 << 0;
    }
}
