use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::RetentionSpec;
use crate::models::VariantConfig;

/// A `[[variants]]` entry: monetization parameters plus one retention curve
/// per acquisition source, keyed by source name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariantSection {
    pub name: String,
    pub base_purchase_rate: f64,
    pub ecpm: f64,
    pub ad_impressions_per_dau: f64,
    #[serde(default)]
    pub retention: BTreeMap<String, RetentionSpec>,
}

impl VariantSection {
    /// The monetization record handed to the revenue simulator.
    pub fn variant_config(&self) -> VariantConfig {
        VariantConfig::new(
            self.name.clone(),
            self.base_purchase_rate,
            self.ecpm,
            self.ad_impressions_per_dau,
        )
    }
}
