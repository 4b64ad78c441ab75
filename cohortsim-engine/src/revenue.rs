use cohortsim_core::config::defaults::DEFAULT_ARPPU;
use cohortsim_core::constants::IMPRESSIONS_PER_MILLE;
use cohortsim_core::errors::{SimError, SimResult};
use cohortsim_core::models::{DailyRevenue, RevenueSeries, SaleWindow, VariantConfig};
use cohortsim_observability::{events, revenue_span};

/// Converts installs and DAU into daily IAP + ad revenue for one variant.
///
/// Per calendar day `d`:
///
/// ```text
/// purchase_rate = base_purchase_rate (+ sale.boost if d is in the sale window)
/// iap           = installs[d] * purchase_rate * arppu
/// ads           = dau[d] * ad_impressions_per_dau * ecpm / 1000
/// ```
///
/// IAP is a same-day-install approximation: only that day's new installs can
/// convert, not the installed base. Inputs are not clamped or validated, so
/// negative configuration values propagate into the result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevenueSimulator {
    arppu: f64,
}

impl RevenueSimulator {
    /// Simulator with the default ARPPU of 5.0.
    pub fn new() -> Self {
        Self {
            arppu: DEFAULT_ARPPU,
        }
    }

    pub fn with_arppu(arppu: f64) -> Self {
        Self { arppu }
    }

    pub fn arppu(&self) -> f64 {
        self.arppu
    }

    /// Daily total revenue.
    pub fn simulate(
        &self,
        variant: &VariantConfig,
        installs_total: &[i64],
        dau_total: &[f64],
        sale: Option<&SaleWindow>,
    ) -> SimResult<RevenueSeries> {
        Ok(self
            .simulate_breakdown(variant, installs_total, dau_total, sale)?
            .into_iter()
            .map(|day| day.total)
            .collect())
    }

    /// Daily revenue split into IAP and ads.
    pub fn simulate_breakdown(
        &self,
        variant: &VariantConfig,
        installs_total: &[i64],
        dau_total: &[f64],
        sale: Option<&SaleWindow>,
    ) -> SimResult<Vec<DailyRevenue>> {
        if installs_total.len() != dau_total.len() {
            events::length_mismatch("revenue installs vs dau", installs_total.len(), dau_total.len());
            return Err(SimError::length_mismatch(
                "revenue installs vs dau",
                installs_total.len(),
                dau_total.len(),
            ));
        }

        let horizon = dau_total.len();
        let _span = revenue_span!(variant.name, horizon).entered();

        let days: Vec<DailyRevenue> = installs_total
            .iter()
            .zip(dau_total)
            .enumerate()
            .map(|(idx, (&installs, &dau))| {
                let day = idx + 1;
                let mut purchase_rate = variant.base_purchase_rate;
                if let Some(sale) = sale.filter(|s| s.contains(day)) {
                    purchase_rate += sale.boost;
                }

                let iap = installs as f64 * purchase_rate * self.arppu;
                let impressions = dau * variant.ad_impressions_per_dau;
                let ads = impressions * variant.ecpm / IMPRESSIONS_PER_MILLE;

                DailyRevenue {
                    day,
                    purchase_rate,
                    iap,
                    ads,
                    total: iap + ads,
                }
            })
            .collect();

        events::revenue_simulated(
            &variant.name,
            horizon,
            days.iter().map(|d| d.total).sum(),
            sale.is_some(),
        );
        Ok(days)
    }
}

impl Default for RevenueSimulator {
    fn default() -> Self {
        Self::new()
    }
}
