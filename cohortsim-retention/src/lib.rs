//! # cohortsim-retention
//!
//! Retention curves mapping cohort age (install day = age 1) to the share of
//! the cohort still active.
//!
//! | Curve | Age ≤ 0 | Age 1 | Beyond the data |
//! |-------|---------|-------|-----------------|
//! | [`PointTableRetention`] | 1.0 | 1.0 | linear extrapolation, floored at 0.0 |
//! | [`ExponentialRetention`] | 0.0 | `r0` | `r0 * exp(-k * (age - 1))` |
//!
//! The two curves disagree below age 1 on purpose. They model different
//! acquisition sources and unifying them would change simulation output.

pub mod curve;
pub mod exponential;
pub mod point_table;

pub use curve::RetentionCurve;
pub use exponential::ExponentialRetention;
pub use point_table::PointTableRetention;
