//! # cohortsim-core
//!
//! Foundation crate for the cohort simulation engine.
//! Defines the value types, the retention trait, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::SimulationConfig;
pub use errors::{ConfigError, ConfigurationError, SimError, SimResult};
pub use models::{DailyRevenue, RetentionPoint, SaleWindow, VariantConfig};
pub use traits::{FnRetention, RetentionModel};
