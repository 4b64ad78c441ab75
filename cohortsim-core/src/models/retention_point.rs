use serde::{Deserialize, Serialize};

/// One known `(day, fraction)` sample of an empirical retention curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RetentionPoint {
    /// Age in days; the install day is day 1.
    pub day: u32,
    /// Share of the cohort still active at `day`.
    pub fraction: f64,
}

impl RetentionPoint {
    pub fn new(day: u32, fraction: f64) -> Self {
        Self { day, fraction }
    }
}

impl From<(u32, f64)> for RetentionPoint {
    fn from((day, fraction): (u32, f64)) -> Self {
        Self { day, fraction }
    }
}
