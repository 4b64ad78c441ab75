use cohortsim_core::errors::SimResult;
use cohortsim_core::models::DauSeries;
use cohortsim_core::RetentionModel;
use cohortsim_observability::{cohort_span, events};
use rayon::prelude::*;

/// Turns a daily install series into a daily active-user series.
///
/// Active users on calendar day `t` are
/// `Σ_{s=1..=t} installs[s] * retention(t - s + 1)`: every past cohort
/// contributes every day, weighted by the retention at its own age. No cohort
/// is ever dropped. O(horizon²).
pub struct CohortSimulator;

impl CohortSimulator {
    /// Sequential cohort accumulation.
    ///
    /// Negative install counts are not validated and propagate into the sum.
    /// A retention error aborts the whole run.
    pub fn simulate<R>(installs: &[i64], retention: &R) -> SimResult<DauSeries>
    where
        R: RetentionModel + ?Sized,
    {
        let horizon = installs.len();
        let _span = cohort_span!(horizon).entered();

        let curve = retention_by_age(horizon, retention)?;
        let dau: DauSeries = (1..=horizon)
            .map(|day| active_users_on(day, installs, &curve))
            .collect();

        events::simulation_completed(horizon, dau.last().copied().unwrap_or(0.0));
        Ok(dau)
    }

    /// Same result as [`Self::simulate`], with the outer day loop on the rayon pool.
    ///
    /// Each day reads only the inputs, and the inner sum runs in the same
    /// order, so the output is bit-identical to the sequential version.
    pub fn simulate_par<R>(installs: &[i64], retention: &R) -> SimResult<DauSeries>
    where
        R: RetentionModel + ?Sized,
    {
        let horizon = installs.len();
        let _span = cohort_span!(horizon).entered();

        let curve = retention_by_age(horizon, retention)?;
        let dau: DauSeries = (1..=horizon)
            .into_par_iter()
            .map(|day| active_users_on(day, installs, &curve))
            .collect();

        events::simulation_completed(horizon, dau.last().copied().unwrap_or(0.0));
        Ok(dau)
    }
}

/// Retention at ages `1..=horizon`; `curve[age - 1]`.
///
/// A day-`horizon` sum already touches every age in this range, so evaluating
/// them up front fails exactly when the day loop would.
fn retention_by_age<R>(horizon: usize, retention: &R) -> SimResult<Vec<f64>>
where
    R: RetentionModel + ?Sized,
{
    (1..=horizon as i64)
        .map(|age| retention.retention(age))
        .collect()
}

/// DAU on 1-based calendar `day`.
fn active_users_on(day: usize, installs: &[i64], curve: &[f64]) -> f64 {
    installs[..day]
        .iter()
        .enumerate()
        .fold(0.0, |active, (install_idx, &count)| {
            // Install day `install_idx + 1` has age `day - install_idx` today.
            active + count as f64 * curve[day - install_idx - 1]
        })
}
