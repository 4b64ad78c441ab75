use serde::{Deserialize, Serialize};

use crate::errors::ConfigurationError;

/// Monetization parameters of one A/B variant.
///
/// Created once per variant and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariantConfig {
    /// Reporting label only.
    pub name: String,
    /// Probability that an install converts to a purchase on its install day.
    pub base_purchase_rate: f64,
    /// Revenue per 1000 ad impressions.
    pub ecpm: f64,
    /// Average ad impressions per active user per day.
    pub ad_impressions_per_dau: f64,
}

impl VariantConfig {
    pub fn new(
        name: impl Into<String>,
        base_purchase_rate: f64,
        ecpm: f64,
        ad_impressions_per_dau: f64,
    ) -> Self {
        Self {
            name: name.into(),
            base_purchase_rate,
            ecpm,
            ad_impressions_per_dau,
        }
    }

    /// Best-effort check of the documented preconditions.
    ///
    /// The revenue simulator never calls this; callers that want to reject
    /// bad inputs do so before simulating.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        let rate = self.base_purchase_rate;
        if !rate.is_finite() || !(0.0..=1.0).contains(&rate) {
            return Err(ConfigurationError::invalid(
                format!("{}.base_purchase_rate", self.name),
                rate,
                "must be a probability in [0, 1]",
            ));
        }
        for (field, value) in [
            ("ecpm", self.ecpm),
            ("ad_impressions_per_dau", self.ad_impressions_per_dau),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigurationError::invalid(
                    format!("{}.{field}", self.name),
                    value,
                    "must be finite and non-negative",
                ));
            }
        }
        Ok(())
    }
}
