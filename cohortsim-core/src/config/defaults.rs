// Single source of truth for all default values.

// --- Simulation ---
pub const DEFAULT_HORIZON_DAYS: usize = 30;
pub const DEFAULT_ARPPU: f64 = 5.0;
pub const DEFAULT_REPORT_DAYS: [usize; 2] = [15, 30];
pub const DEFAULT_PARALLEL: bool = false;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";

// --- Environment overrides ---
pub const ENV_HORIZON_DAYS: &str = "COHORTSIM_HORIZON_DAYS";
pub const ENV_ARPPU: &str = "COHORTSIM_ARPPU";
pub const ENV_LOG_LEVEL: &str = "COHORTSIM_LOG_LEVEL";
