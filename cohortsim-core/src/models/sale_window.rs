use serde::{Deserialize, Serialize};

use crate::errors::ConfigurationError;

/// Inclusive range of 1-based calendar days with an additive purchase-rate boost.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SaleWindow {
    pub start_day: u32,
    pub end_day: u32,
    /// Absolute boost added to `base_purchase_rate` (0.01 = +1 percentage point).
    pub boost: f64,
}

impl SaleWindow {
    /// Create a sale window, rejecting day 0 and inverted ranges.
    pub fn new(start_day: u32, end_day: u32, boost: f64) -> Result<Self, ConfigurationError> {
        let window = Self {
            start_day,
            end_day,
            boost,
        };
        window.validate()?;
        Ok(window)
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.start_day == 0 || self.start_day > self.end_day {
            return Err(ConfigurationError::InvalidSaleWindow {
                start_day: self.start_day,
                end_day: self.end_day,
            });
        }
        if !self.boost.is_finite() {
            return Err(ConfigurationError::invalid(
                "sale.boost",
                self.boost,
                "must be finite",
            ));
        }
        Ok(())
    }

    /// Whether the 1-based calendar `day` falls inside the window.
    pub fn contains(&self, day: usize) -> bool {
        (self.start_day as usize..=self.end_day as usize).contains(&day)
    }

    /// Number of calendar days covered.
    pub fn len_days(&self) -> usize {
        (self.end_day as usize + 1).saturating_sub(self.start_day as usize)
    }
}
