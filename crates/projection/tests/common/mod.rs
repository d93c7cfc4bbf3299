//! Shared setup for the integration tests.

use projection_core::Position;
use projection_core::testing::Fixture;

/// Installs a test-writer subscriber once per test binary.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// A fresh set of collaborators with the player on `player`.
pub fn world(player: Position, script: &[u32]) -> Fixture {
    init_tracing();
    Fixture::new(player, script)
}
