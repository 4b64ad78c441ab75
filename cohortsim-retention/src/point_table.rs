use std::collections::BTreeMap;

use cohortsim_core::config::retention_config::validate_points;
use cohortsim_core::constants::{INSTALL_DAY_AGE, MIN_EXTRAPOLATION_POINTS};
use cohortsim_core::errors::{ConfigurationError, SimResult};
use cohortsim_core::models::RetentionPoint;
use cohortsim_core::RetentionModel;
use cohortsim_observability::events;

/// Piecewise-linear retention from a sparse table of known `(day, fraction)` points.
///
/// Lookup order for an age `day`:
/// 1. `day <= 1` is the install day and always returns 1.0.
/// 2. An exact table key returns the stored fraction unmodified.
/// 3. Past the last known day, the line through the two largest known days is
///    extended and the result floored at 0.0.
/// 4. Otherwise the value is interpolated between the neighbouring known days.
///
/// Callers are expected to supply a non-increasing table with fractions in
/// [0, 1]. Nothing is clamped from above; a table that breaks this is logged
/// at construction and can be rejected with [`Self::check_monotone`].
#[derive(Debug, Clone, PartialEq)]
pub struct PointTableRetention {
    points: BTreeMap<u32, f64>,
}

impl PointTableRetention {
    /// Build a table. Fails on an empty table, day 0, or duplicate days.
    pub fn new<I, P>(points: I) -> Result<Self, ConfigurationError>
    where
        I: IntoIterator<Item = P>,
        P: Into<RetentionPoint>,
    {
        let points: Vec<RetentionPoint> = points.into_iter().map(Into::into).collect();
        validate_points(&points)?;

        let table = Self {
            points: points.iter().map(|p| (p.day, p.fraction)).collect(),
        };
        if let Err(e) = table.check_monotone() {
            events::retention_table_suspect(&e.to_string());
        }
        Ok(table)
    }

    /// Verify that fractions lie in [0, 1] and never rise with age.
    pub fn check_monotone(&self) -> Result<(), ConfigurationError> {
        let mut previous: Option<(u32, f64)> = None;
        for (&day, &fraction) in &self.points {
            if !(0.0..=1.0).contains(&fraction) {
                return Err(ConfigurationError::invalid(
                    format!("retention.day{day}"),
                    fraction,
                    "fraction must be in [0, 1]",
                ));
            }
            if let Some((previous_day, previous_fraction)) = previous {
                if fraction > previous_fraction {
                    return Err(ConfigurationError::NonMonotoneTable {
                        previous_day,
                        previous_fraction,
                        day,
                        fraction,
                    });
                }
            }
            previous = Some((day, fraction));
        }
        Ok(())
    }

    /// Known points in ascending day order.
    pub fn points(&self) -> impl Iterator<Item = RetentionPoint> + '_ {
        self.points
            .iter()
            .map(|(&day, &fraction)| RetentionPoint::new(day, fraction))
    }

    /// Number of known points; at least 1.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always `false`: [`Self::new`] rejects empty tables.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Largest known day.
    pub fn last_day(&self) -> u32 {
        self.points.keys().next_back().copied().unwrap_or(1)
    }

    /// Retention fraction at age `day`.
    ///
    /// Fails with [`ConfigurationError::InsufficientPoints`] only when `day`
    /// lies past the last known day and the table has a single point.
    pub fn retention(&self, day: i64) -> SimResult<f64> {
        if day <= INSTALL_DAY_AGE {
            return Ok(1.0);
        }

        // Exact keys first so known points never pick up slope rounding.
        let key = u32::try_from(day).ok();
        if let Some(fraction) = key.and_then(|k| self.points.get(&k)) {
            return Ok(*fraction);
        }

        if day > i64::from(self.last_day()) {
            return self.extrapolate(day);
        }

        // 1 < day < last_day and not a key, so `key` is set and a successor
        // exists. A missing predecessor means the table starts after the
        // install day, which is implicitly at full retention.
        let k = key.unwrap_or(u32::MAX);
        let (prev_day, prev_fraction) = self
            .points
            .range(..k)
            .next_back()
            .map(|(&d, &r)| (d, r))
            .unwrap_or((1, 1.0));
        let Some((&next_day, &next_fraction)) = self.points.range(k..).next() else {
            return Ok(prev_fraction);
        };

        let slope = (next_fraction - prev_fraction) / f64::from(next_day - prev_day);
        Ok(prev_fraction + slope * (day - i64::from(prev_day)) as f64)
    }

    fn extrapolate(&self, day: i64) -> SimResult<f64> {
        let mut tail = self.points.iter().rev();
        let (Some((&d2, &r2)), Some((&d1, &r1))) = (tail.next(), tail.next()) else {
            return Err(ConfigurationError::InsufficientPoints {
                available: self.points.len(),
                required: MIN_EXTRAPOLATION_POINTS,
            }
            .into());
        };

        let slope = (r2 - r1) / f64::from(d2 - d1);
        let value = r2 + slope * (day - i64::from(d2)) as f64;
        if value < 0.0 {
            events::retention_clamped(day, value);
            return Ok(0.0);
        }
        Ok(value)
    }
}

impl RetentionModel for PointTableRetention {
    fn retention(&self, age: i64) -> SimResult<f64> {
        PointTableRetention::retention(self, age)
    }
}
