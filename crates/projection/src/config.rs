use crate::env::ConfigOracle;

/// Projection tunables and constants.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProjectionConfig {
    /// Experience drained per 100 points of experience by nether, chaos and time.
    pub life_drain_percent: i32,
    /// Report damage taken as a message.
    pub show_damage: bool,
    /// Low hit point warning threshold, in tenths of maximum hit points.
    pub hitpoint_warn: i32,
    pub nexus_teleport_range: i32,
    pub gravity_blink_range: i32,
    pub max_timed_duration: i32,
}

impl ProjectionConfig {
    // ===== compile-time constants =====
    /// Self-inflicted projection damage is divided by this.
    pub const SELF_DAMAGE_DIVISOR: i32 = 10;
    /// Maximum character level.
    pub const MAX_LEVEL: i32 = 50;
    /// Damage at or above which invulnerability no longer protects.
    pub const INVULNERABILITY_LIMIT: i32 = 9000;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_LIFE_DRAIN_PERCENT: i32 = 2;
    pub const DEFAULT_HITPOINT_WARN: i32 = 3;
    pub const DEFAULT_NEXUS_TELEPORT_RANGE: i32 = 200;
    pub const DEFAULT_GRAVITY_BLINK_RANGE: i32 = 5;
    pub const DEFAULT_MAX_TIMED_DURATION: i32 = 10_000;

    pub fn new() -> Self {
        Self {
            life_drain_percent: Self::DEFAULT_LIFE_DRAIN_PERCENT,
            show_damage: false,
            hitpoint_warn: Self::DEFAULT_HITPOINT_WARN,
            nexus_teleport_range: Self::DEFAULT_NEXUS_TELEPORT_RANGE,
            gravity_blink_range: Self::DEFAULT_GRAVITY_BLINK_RANGE,
            max_timed_duration: Self::DEFAULT_MAX_TIMED_DURATION,
        }
    }

    #[must_use]
    pub fn with_show_damage(mut self, show_damage: bool) -> Self {
        self.show_damage = show_damage;
        self
    }

    #[must_use]
    pub fn with_life_drain_percent(mut self, percent: i32) -> Self {
        self.life_drain_percent = percent;
        self
    }

    #[must_use]
    pub fn with_hitpoint_warn(mut self, tenths: i32) -> Self {
        self.hitpoint_warn = tenths;
        self
    }
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigOracle for ProjectionConfig {
    fn life_drain_percent(&self) -> i32 {
        self.life_drain_percent
    }

    fn show_damage(&self) -> bool {
        self.show_damage
    }

    fn hitpoint_warn(&self) -> i32 {
        self.hitpoint_warn
    }

    fn nexus_teleport_range(&self) -> i32 {
        self.nexus_teleport_range
    }

    fn gravity_blink_range(&self) -> i32 {
        self.gravity_blink_range
    }

    fn max_timed_duration(&self) -> i32 {
        self.max_timed_duration
    }
}
