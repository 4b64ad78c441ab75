use serde::{Deserialize, Serialize};

use crate::models::InstallSeries;

/// A run of consecutive days sharing the same install count.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InstallSegment {
    pub days: usize,
    pub installs: i64,
}

/// One acquisition source and its install schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceConfig {
    pub name: String,
    /// Run-length encoded installs, starting at calendar day 1.
    #[serde(default)]
    pub installs: Vec<InstallSegment>,
}

impl SourceConfig {
    /// Expand the segments into a per-day series of exactly `horizon` days.
    ///
    /// Days past the last segment have zero installs; segments running past
    /// the horizon are cut off.
    pub fn expand(&self, horizon: usize) -> InstallSeries {
        let mut series: InstallSeries = self
            .installs
            .iter()
            .flat_map(|segment| std::iter::repeat(segment.installs).take(segment.days))
            .take(horizon)
            .collect();
        series.resize(horizon, 0);
        series
    }
}
