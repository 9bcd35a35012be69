// ============================================================================
// Logging Setup
// Installs a tracing subscriber for binaries and demos
// ============================================================================

use tracing::Level;

/// Install a global fmt subscriber at `level`.
///
/// Libraries never call this; the embedding program decides. Fails if a
/// global subscriber is already set.
pub fn init_tracing(level: Level) -> Result<(), String> {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .try_init()
        .map_err(|err| format!("Failed to install tracing subscriber: {}", err))
}
