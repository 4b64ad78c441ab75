//! Structured log events for key simulation operations.
//!
//! Each function emits a `tracing` event with structured fields.

/// Negative extrapolated retention was floored at zero.
///
/// Emitted inside the O(horizon²) cohort loop, hence `trace`.
pub fn retention_clamped(age: i64, raw: f64) {
    tracing::trace!(
        event = "retention_clamped",
        age = age,
        raw = raw,
        "extrapolated retention clamped to 0.0"
    );
}

/// A point table violates the non-increasing [0, 1] precondition.
pub fn retention_table_suspect(reason: &str) {
    tracing::warn!(
        event = "retention_table_suspect",
        reason = %reason,
        "retention table breaks the monotone precondition"
    );
}

pub fn simulation_completed(horizon: usize, final_dau: f64) {
    tracing::debug!(
        event = "simulation_completed",
        horizon = horizon,
        final_dau = final_dau,
        "cohort simulation completed"
    );
}

pub fn sources_combined(sources: usize, horizon: usize) {
    tracing::debug!(
        event = "sources_combined",
        sources = sources,
        horizon = horizon,
        "sources combined"
    );
}

pub fn revenue_simulated(variant: &str, horizon: usize, total: f64, sale: bool) {
    tracing::debug!(
        event = "revenue_simulated",
        variant = %variant,
        horizon = horizon,
        total = total,
        sale = sale,
        "revenue simulated"
    );
}

/// Two series that must align do not.
pub fn length_mismatch(context: &str, expected: usize, actual: usize) {
    tracing::warn!(
        event = "length_mismatch",
        context = %context,
        expected = expected,
        actual = actual,
        "series length mismatch"
    );
}

pub fn scenario_completed(variants: usize, horizon: usize) {
    tracing::info!(
        event = "scenario_completed",
        variants = variants,
        horizon = horizon,
        "scenario completed"
    );
}
