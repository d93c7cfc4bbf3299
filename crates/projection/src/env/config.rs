//! Configuration oracle for exposing tunables to the engine.

/// Provides access to runtime configuration values.
pub trait ConfigOracle: Send + Sync {
    /// Percentage of experience drained per 100 points by life-draining kinds.
    fn life_drain_percent(&self) -> i32;

    /// Whether damage taken is reported as a message.
    fn show_damage(&self) -> bool;

    /// Low hit point warning threshold, in tenths of maximum hit points.
    fn hitpoint_warn(&self) -> i32;

    /// Range of the random teleport caused by nexus.
    fn nexus_teleport_range(&self) -> i32;

    /// Range of the short blink caused by gravity.
    fn gravity_blink_range(&self) -> i32;

    /// Upper bound for any timed effect counter.
    fn max_timed_duration(&self) -> i32;
}
