use cohortsim_core::config::RetentionSpec;
use cohortsim_core::errors::{ConfigurationError, SimResult};
use cohortsim_core::RetentionModel;

use crate::{ExponentialRetention, PointTableRetention};

/// Either retention variant behind one type, as built from configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum RetentionCurve {
    PointTable(PointTableRetention),
    Exponential(ExponentialRetention),
}

impl RetentionCurve {
    /// Build a curve from its declarative spec.
    pub fn from_spec(spec: &RetentionSpec) -> Result<Self, ConfigurationError> {
        match spec {
            RetentionSpec::PointTable { points } => {
                PointTableRetention::new(points.iter().copied()).map(Self::PointTable)
            }
            RetentionSpec::Exponential { r0, k } => {
                ExponentialRetention::new(*r0, *k).map(Self::Exponential)
            }
        }
    }

    /// Short label for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            RetentionCurve::PointTable(_) => "point_table",
            RetentionCurve::Exponential(_) => "exponential",
        }
    }
}

impl RetentionModel for RetentionCurve {
    fn retention(&self, age: i64) -> SimResult<f64> {
        match self {
            RetentionCurve::PointTable(table) => table.retention(age),
            RetentionCurve::Exponential(decay) => Ok(decay.retention(age)),
        }
    }
}

impl From<PointTableRetention> for RetentionCurve {
    fn from(table: PointTableRetention) -> Self {
        Self::PointTable(table)
    }
}

impl From<ExponentialRetention> for RetentionCurve {
    fn from(decay: ExponentialRetention) -> Self {
        Self::Exponential(decay)
    }
}

impl TryFrom<&RetentionSpec> for RetentionCurve {
    type Error = ConfigurationError;

    fn try_from(spec: &RetentionSpec) -> Result<Self, Self::Error> {
        Self::from_spec(spec)
    }
}
