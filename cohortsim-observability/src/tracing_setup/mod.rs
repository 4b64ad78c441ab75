//! Tracing setup: structured logging with span definitions and event helpers.

pub mod events;
pub mod spans;

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter directive.
pub const LOG_ENV_VAR: &str = "COHORTSIM_LOG";

/// Initialize the global subscriber with structured JSON output.
///
/// Respects `COHORTSIM_LOG` for filtering and defaults to `info`.
/// Returns `false` if a global subscriber was already installed.
pub fn init_tracing() -> bool {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .json()
        .try_init()
        .is_ok()
}

/// Initialize with an explicit filter, e.g. `ObservabilityConfig::log_level`.
///
/// Returns `false` if a global subscriber was already installed.
pub fn init_tracing_with_filter(filter: &str) -> bool {
    let filter = EnvFilter::new(filter);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .json()
        .try_init()
        .is_ok()
}
