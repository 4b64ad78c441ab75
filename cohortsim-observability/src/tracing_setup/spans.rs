//! Span definitions per operation: cohort accumulation, revenue, scenario.

/// Create a cohort accumulation span.
#[macro_export]
macro_rules! cohort_span {
    ($horizon:expr) => {
        tracing::debug_span!("cohortsim.cohort", horizon = $horizon)
    };
}

/// Create a revenue simulation span.
#[macro_export]
macro_rules! revenue_span {
    ($variant:expr, $horizon:expr) => {
        tracing::debug_span!("cohortsim.revenue", variant = %$variant, horizon = $horizon)
    };
}

/// Create a scenario span.
#[macro_export]
macro_rules! scenario_span {
    ($variants:expr, $horizon:expr) => {
        tracing::info_span!("cohortsim.scenario", variants = $variants, horizon = $horizon)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const COHORT: &str = "cohortsim.cohort";
    pub const REVENUE: &str = "cohortsim.revenue";
    pub const SCENARIO: &str = "cohortsim.scenario";
}
