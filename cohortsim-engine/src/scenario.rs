//! ScenarioRunner: composes cohort, combine, and revenue steps per variant.

use cohortsim_core::config::{SimulationConfig, SimulationSettings};
use cohortsim_core::errors::{ConfigError, SimResult};
use cohortsim_core::models::{SaleWindow, VariantConfig};
use cohortsim_observability::{events, scenario_span};
use cohortsim_retention::RetentionCurve;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::report::{self, VariantComparison};
use crate::{CohortSimulator, RevenueSimulator, SourceCombiner};

/// DAU contributed by one acquisition source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceDau {
    pub source: String,
    pub dau: Vec<f64>,
}

/// Cumulative figures at one reporting day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportTotal {
    pub day: usize,
    /// DAU on that day (the last simulated day if past the horizon).
    pub dau: f64,
    pub revenue: f64,
    pub revenue_with_sale: Option<f64>,
}

/// Everything simulated for one variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariantOutcome {
    pub name: String,
    pub dau_by_source: Vec<SourceDau>,
    pub dau_total: Vec<f64>,
    pub installs_total: Vec<i64>,
    pub revenue: Vec<f64>,
    pub revenue_with_sale: Option<Vec<f64>>,
    pub cumulative_revenue: Vec<f64>,
    pub totals: Vec<ReportTotal>,
    /// Sale revenue minus baseline revenue over the whole horizon.
    pub sale_lift: Option<f64>,
}

impl VariantOutcome {
    /// Totals at a configured reporting day.
    pub fn total_at(&self, day: usize) -> Option<&ReportTotal> {
        self.totals.iter().find(|t| t.day == day)
    }
}

/// Result of running one scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioReport {
    pub horizon_days: usize,
    pub variants: Vec<VariantOutcome>,
    /// Baseline revenue of the first variant against each other variant, per reporting day.
    pub comparisons: Vec<VariantComparison>,
    /// DAU on each reporting day, first variant against each other variant.
    pub dau_comparisons: Vec<VariantComparison>,
}

impl ScenarioReport {
    pub fn variant(&self, name: &str) -> Option<&VariantOutcome> {
        self.variants.iter().find(|v| v.name == name)
    }

    pub fn to_json(&self) -> SimResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

struct PreparedVariant {
    config: VariantConfig,
    /// One curve per source, in source order.
    curves: Vec<RetentionCurve>,
}

/// Runs every variant of a validated [`SimulationConfig`].
pub struct ScenarioRunner {
    settings: SimulationSettings,
    source_names: Vec<String>,
    source_installs: Vec<Vec<i64>>,
    installs_total: Vec<i64>,
    variants: Vec<PreparedVariant>,
    sale: Option<SaleWindow>,
}

impl ScenarioRunner {
    /// Validate the config and build retention curves and install series.
    pub fn from_config(config: &SimulationConfig) -> SimResult<Self> {
        config.validate()?;

        let horizon = config.simulation.horizon_days;
        let source_names: Vec<String> = config.sources.iter().map(|s| s.name.clone()).collect();
        let source_installs: Vec<Vec<i64>> =
            config.sources.iter().map(|s| s.expand(horizon)).collect();
        let installs_total = if source_installs.is_empty() {
            vec![0; horizon]
        } else {
            SourceCombiner::combine(&source_installs)?
        };

        let mut variants = Vec::with_capacity(config.variants.len());
        for section in &config.variants {
            let mut curves = Vec::with_capacity(source_names.len());
            for source in &source_names {
                let spec = section.retention.get(source).ok_or_else(|| {
                    ConfigError::ValidationFailed {
                        field: format!("variants.{}.retention", section.name),
                        message: format!("missing retention curve for source {source}"),
                    }
                })?;
                curves.push(RetentionCurve::from_spec(spec)?);
            }
            variants.push(PreparedVariant {
                config: section.variant_config(),
                curves,
            });
        }

        Ok(Self {
            settings: config.simulation.clone(),
            source_names,
            source_installs,
            installs_total,
            variants,
            sale: config.sale,
        })
    }

    /// Total installs across sources.
    pub fn installs_total(&self) -> &[i64] {
        &self.installs_total
    }

    /// Simulate every variant and compare them.
    pub fn run(&self) -> SimResult<ScenarioReport> {
        let horizon = self.settings.horizon_days;
        let _span = scenario_span!(self.variants.len(), horizon).entered();

        let outcomes: Vec<VariantOutcome> = if self.settings.parallel {
            self.variants
                .par_iter()
                .map(|v| self.run_variant(v))
                .collect::<SimResult<_>>()?
        } else {
            self.variants
                .iter()
                .map(|v| self.run_variant(v))
                .collect::<SimResult<_>>()?
        };

        let comparisons =
            self.compare(&outcomes, |o, day| report::total_through(&o.revenue, day));
        let dau_comparisons = self.compare(&outcomes, |o, day| dau_on(&o.dau_total, day));
        events::scenario_completed(outcomes.len(), horizon);

        Ok(ScenarioReport {
            horizon_days: horizon,
            variants: outcomes,
            comparisons,
            dau_comparisons,
        })
    }

    fn run_variant(&self, variant: &PreparedVariant) -> SimResult<VariantOutcome> {
        let mut dau_by_source = Vec::with_capacity(self.source_names.len());
        for ((name, installs), curve) in self
            .source_names
            .iter()
            .zip(&self.source_installs)
            .zip(&variant.curves)
        {
            let dau = if self.settings.parallel {
                CohortSimulator::simulate_par(installs, curve)?
            } else {
                CohortSimulator::simulate(installs, curve)?
            };
            tracing::debug!(
                variant = %variant.config.name,
                source = %name,
                curve = curve.kind(),
                "source simulated"
            );
            dau_by_source.push(SourceDau {
                source: name.clone(),
                dau,
            });
        }

        let dau_total = if dau_by_source.is_empty() {
            vec![0.0; self.settings.horizon_days]
        } else {
            let series: Vec<&[f64]> = dau_by_source.iter().map(|s| s.dau.as_slice()).collect();
            SourceCombiner::combine(&series)?
        };

        let simulator = RevenueSimulator::with_arppu(self.settings.arppu);
        let revenue = simulator.simulate(&variant.config, &self.installs_total, &dau_total, None)?;
        let revenue_with_sale = self
            .sale
            .as_ref()
            .map(|sale| {
                simulator.simulate(&variant.config, &self.installs_total, &dau_total, Some(sale))
            })
            .transpose()?;

        let totals = self
            .settings
            .report_days
            .iter()
            .map(|&day| ReportTotal {
                day,
                dau: dau_on(&dau_total, day),
                revenue: report::total_through(&revenue, day),
                revenue_with_sale: revenue_with_sale
                    .as_deref()
                    .map(|series| report::total_through(series, day)),
            })
            .collect();

        let sale_lift = revenue_with_sale.as_deref().map(|with_sale| {
            report::lift(revenue.iter().sum(), with_sale.iter().sum())
        });

        Ok(VariantOutcome {
            name: variant.config.name.clone(),
            dau_by_source,
            cumulative_revenue: report::cumulative(&revenue),
            dau_total,
            installs_total: self.installs_total.clone(),
            revenue,
            revenue_with_sale,
            totals,
            sale_lift,
        })
    }

    /// First variant against each other variant on `metric`, per reporting day.
    fn compare<F>(&self, outcomes: &[VariantOutcome], metric: F) -> Vec<VariantComparison>
    where
        F: Fn(&VariantOutcome, usize) -> f64,
    {
        let Some((control, challengers)) = outcomes.split_first() else {
            return Vec::new();
        };
        let mut comparisons = Vec::new();
        for &day in &self.settings.report_days {
            for challenger in challengers {
                comparisons.push(report::compare(
                    day,
                    &control.name,
                    metric(control, day),
                    &challenger.name,
                    metric(challenger, day),
                ));
            }
        }
        comparisons
    }
}

/// DAU on 1-based `day`; past the horizon, the last simulated day.
fn dau_on(dau: &[f64], day: usize) -> f64 {
    dau.get(day.min(dau.len()).saturating_sub(1))
        .copied()
        .unwrap_or(0.0)
}
