// ============================================================================
// Logging Setup
// Optional tracing subscriber for embedders and test runs
// ============================================================================

use tracing::Level;

/// Install a formatted `tracing` subscriber as the global default.
///
/// The library itself never installs a subscriber; call this from a binary or
/// test that wants to see validator diagnostics. Returns `false` if a global
/// subscriber was already set.
pub fn init_tracing(max_level: Level) -> bool {
    tracing_subscriber::fmt()
        .with_max_level(max_level)
        .with_target(true)
        .try_init()
        .is_ok()
}
