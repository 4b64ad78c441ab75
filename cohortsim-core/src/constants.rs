/// cohortsim version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Age of a cohort on its install day.
pub const INSTALL_DAY_AGE: i64 = 1;

/// Minimum number of known points needed to extrapolate a point table.
pub const MIN_EXTRAPOLATION_POINTS: usize = 2;

/// Ad impressions are priced per mille.
pub const IMPRESSIONS_PER_MILLE: f64 = 1000.0;
