//! Configuration for cohortsim.
//! TOML-based; resolution order is env > file > compiled defaults.

pub mod defaults;
pub mod observability_config;
pub mod retention_config;
pub mod simulation_config;
pub mod source_config;
pub mod variant_config;

pub use observability_config::ObservabilityConfig;
pub use retention_config::RetentionSpec;
pub use simulation_config::{SimulationConfig, SimulationSettings};
pub use source_config::{InstallSegment, SourceConfig};
pub use variant_config::VariantSection;
