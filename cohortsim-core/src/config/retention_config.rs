use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigurationError;
use crate::models::RetentionPoint;

/// Declarative description of a retention curve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RetentionSpec {
    /// Empirical samples, linearly interpolated and extrapolated.
    PointTable { points: Vec<RetentionPoint> },
    /// `r0 * exp(-k * (age - 1))`.
    Exponential { r0: f64, k: f64 },
}

impl RetentionSpec {
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        match self {
            RetentionSpec::PointTable { points } => validate_points(points),
            RetentionSpec::Exponential { r0, k } => validate_decay(*r0, *k),
        }
    }
}

/// Structural checks shared by every point table: non-empty, days start at 1,
/// no duplicate days.
pub fn validate_points(points: &[RetentionPoint]) -> Result<(), ConfigurationError> {
    if points.is_empty() {
        return Err(ConfigurationError::EmptyPointTable);
    }
    let mut seen = BTreeSet::new();
    for point in points {
        if point.day == 0 {
            return Err(ConfigurationError::InvalidDay { day: point.day });
        }
        if !seen.insert(point.day) {
            return Err(ConfigurationError::DuplicateDay { day: point.day });
        }
        if !point.fraction.is_finite() {
            return Err(ConfigurationError::invalid(
                format!("retention.day{}", point.day),
                point.fraction,
                "must be finite",
            ));
        }
    }
    Ok(())
}

/// Parameter checks for exponential decay: both finite and non-negative.
pub fn validate_decay(r0: f64, k: f64) -> Result<(), ConfigurationError> {
    for (field, value) in [("r0", r0), ("k", k)] {
        if !value.is_finite() || value < 0.0 {
            return Err(ConfigurationError::invalid(
                field,
                value,
                "must be finite and non-negative",
            ));
        }
    }
    Ok(())
}
