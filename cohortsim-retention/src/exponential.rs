use cohortsim_core::config::retention_config::validate_decay;
use cohortsim_core::constants::INSTALL_DAY_AGE;
use cohortsim_core::errors::{ConfigurationError, SimResult};
use cohortsim_core::RetentionModel;

/// Smooth exponential decay: `r0 * e^(-k * (age - 1))`.
///
/// Used for acquisition sources without sampled retention data. Unlike
/// [`crate::PointTableRetention`], ages below 1 yield 0.0 and the install
/// day yields `r0` rather than 1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExponentialRetention {
    r0: f64,
    k: f64,
}

impl ExponentialRetention {
    /// Fails if either parameter is negative or not finite.
    pub fn new(r0: f64, k: f64) -> Result<Self, ConfigurationError> {
        validate_decay(r0, k)?;
        Ok(Self { r0, k })
    }

    pub fn r0(&self) -> f64 {
        self.r0
    }

    pub fn k(&self) -> f64 {
        self.k
    }

    /// Retention fraction at `age`. Total: never fails.
    pub fn retention(&self, age: i64) -> f64 {
        if age < INSTALL_DAY_AGE {
            return 0.0;
        }
        self.r0 * (-self.k * (age - INSTALL_DAY_AGE) as f64).exp()
    }
}

impl RetentionModel for ExponentialRetention {
    fn retention(&self, age: i64) -> SimResult<f64> {
        Ok(ExponentialRetention::retention(self, age))
    }
}
