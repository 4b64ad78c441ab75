//! Top-level simulation configuration.

use std::collections::BTreeSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{defaults, ObservabilityConfig, SourceConfig, VariantSection};
use crate::errors::{ConfigError, ConfigurationError, SimResult};
use crate::models::SaleWindow;

/// Horizon, ARPPU, and reporting settings shared by every variant.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationSettings {
    /// Number of simulated calendar days.
    pub horizon_days: usize,
    /// Average revenue per paying user.
    pub arppu: f64,
    /// Days at which cumulative totals are reported.
    pub report_days: Vec<usize>,
    /// Evaluate variants and cohort sums on the rayon pool.
    pub parallel: bool,
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            horizon_days: defaults::DEFAULT_HORIZON_DAYS,
            arppu: defaults::DEFAULT_ARPPU,
            report_days: defaults::DEFAULT_REPORT_DAYS.to_vec(),
            parallel: defaults::DEFAULT_PARALLEL,
        }
    }
}

/// Root configuration for one A/B scenario.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`COHORTSIM_*`)
/// 2. The TOML file passed to [`SimulationConfig::load`]
/// 3. Compiled defaults
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub simulation: SimulationSettings,
    pub observability: ObservabilityConfig,
    pub sources: Vec<SourceConfig>,
    pub variants: Vec<VariantSection>,
    pub sale: Option<SaleWindow>,
}

impl SimulationConfig {
    /// Load a config file, apply environment overrides, then validate.
    pub fn load(path: &Path) -> SimResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        let mut config: SimulationConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Parse a config from a TOML string without validating it.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Apply `COHORTSIM_*` environment overrides. Unparseable values are ignored.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var(defaults::ENV_HORIZON_DAYS) {
            if let Ok(v) = val.parse::<usize>() {
                self.simulation.horizon_days = v;
            }
        }
        if let Ok(val) = std::env::var(defaults::ENV_ARPPU) {
            if let Ok(v) = val.parse::<f64>() {
                self.simulation.arppu = v;
            }
        }
        if let Ok(val) = std::env::var(defaults::ENV_LOG_LEVEL) {
            self.observability.log_level = val;
        }
    }

    /// Best-effort semantic validation of the whole scenario.
    pub fn validate(&self) -> SimResult<()> {
        let settings = &self.simulation;
        if settings.horizon_days == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "simulation.horizon_days".to_string(),
                message: "must be at least 1".to_string(),
            }
            .into());
        }
        if settings.report_days.contains(&0) {
            return Err(ConfigError::ValidationFailed {
                field: "simulation.report_days".to_string(),
                message: "report days are 1-based".to_string(),
            }
            .into());
        }
        if !settings.arppu.is_finite() || settings.arppu < 0.0 {
            return Err(ConfigurationError::invalid(
                "simulation.arppu",
                settings.arppu,
                "must be finite and non-negative",
            )
            .into());
        }

        let mut source_names = BTreeSet::new();
        for source in &self.sources {
            if !source_names.insert(source.name.as_str()) {
                return Err(ConfigError::ValidationFailed {
                    field: "sources".to_string(),
                    message: format!("duplicate source name {}", source.name),
                }
                .into());
            }
        }

        let mut variant_names = BTreeSet::new();
        for variant in &self.variants {
            if !variant_names.insert(variant.name.as_str()) {
                return Err(ConfigError::ValidationFailed {
                    field: "variants".to_string(),
                    message: format!("duplicate variant name {}", variant.name),
                }
                .into());
            }
            variant.variant_config().validate()?;
            for (source_name, spec) in &variant.retention {
                if !source_names.contains(source_name.as_str()) {
                    return Err(ConfigurationError::UnknownSource {
                        variant: variant.name.clone(),
                        source_name: source_name.clone(),
                    }
                    .into());
                }
                spec.validate()?;
            }
            for source in &self.sources {
                if !variant.retention.contains_key(&source.name) {
                    return Err(ConfigError::ValidationFailed {
                        field: format!("variants.{}.retention", variant.name),
                        message: format!("missing retention curve for source {}", source.name),
                    }
                    .into());
                }
            }
        }

        if let Some(sale) = &self.sale {
            sale.validate()?;
        }
        Ok(())
    }
}
