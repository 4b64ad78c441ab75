use serde::{Deserialize, Serialize};

/// Revenue for one calendar day, split by stream.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyRevenue {
    /// 1-based calendar day.
    pub day: usize,
    /// Purchase rate in effect, including any sale boost.
    pub purchase_rate: f64,
    pub iap: f64,
    pub ads: f64,
    pub total: f64,
}
