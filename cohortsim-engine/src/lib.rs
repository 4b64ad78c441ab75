//! # cohortsim-engine
//!
//! Deterministic cohort simulation for A/B variant comparison.
//!
//! ```text
//! installs ──► CohortSimulator (per source, with a RetentionModel) ──► DAU
//!          ──► SourceCombiner ──► total DAU
//!          ──► RevenueSimulator (variant, total installs, total DAU, sale) ──► revenue
//! ```
//!
//! Every operation is a pure function of its inputs. Independent variants and
//! scenarios can run in parallel without coordination; [`ScenarioRunner`]
//! does so on the rayon pool when configured.

pub mod cohort;
pub mod combine;
pub mod report;
pub mod revenue;
pub mod scenario;

pub use cohort::CohortSimulator;
pub use combine::SourceCombiner;
pub use report::{VariantComparison, Winner};
pub use revenue::RevenueSimulator;
pub use scenario::{ReportTotal, ScenarioReport, ScenarioRunner, SourceDau, VariantOutcome};
