//! Aggregation helpers over simulated series: running totals, totals through
//! a reporting day, and variant comparison. Rendering is left to callers.

use serde::{Deserialize, Serialize};

/// Running sum: `out[i] = series[0] + … + series[i]`.
pub fn cumulative(series: &[f64]) -> Vec<f64> {
    series
        .iter()
        .scan(0.0, |running, &value| {
            *running += value;
            Some(*running)
        })
        .collect()
}

/// Sum of calendar days `1..=day`. A day past the horizon sums the whole series.
pub fn total_through(series: &[f64], day: usize) -> f64 {
    series.iter().take(day).sum()
}

/// Incremental lift of a scenario total over its baseline.
pub fn lift(baseline: f64, scenario: f64) -> f64 {
    scenario - baseline
}

/// Which side of a comparison came out ahead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Winner {
    A,
    B,
    Tie,
}

/// Head-to-head comparison of two variant totals at one reporting day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariantComparison {
    pub day: usize,
    pub label_a: String,
    pub total_a: f64,
    pub label_b: String,
    pub total_b: f64,
    pub winner: Winner,
    /// `total_a - total_b`.
    pub difference: f64,
}

impl VariantComparison {
    /// Label of the winning variant, `None` on a tie.
    pub fn winner_label(&self) -> Option<&str> {
        match self.winner {
            Winner::A => Some(&self.label_a),
            Winner::B => Some(&self.label_b),
            Winner::Tie => None,
        }
    }
}

/// Compare two totals. Exactly equal totals are a tie.
pub fn compare(
    day: usize,
    label_a: &str,
    total_a: f64,
    label_b: &str,
    total_b: f64,
) -> VariantComparison {
    let winner = if total_a > total_b {
        Winner::A
    } else if total_b > total_a {
        Winner::B
    } else {
        Winner::Tie
    };
    VariantComparison {
        day,
        label_a: label_a.to_string(),
        total_a,
        label_b: label_b.to_string(),
        total_b,
        winner,
        difference: total_a - total_b,
    }
}
