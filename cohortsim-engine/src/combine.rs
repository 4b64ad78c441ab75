use std::ops::Add;

use cohortsim_core::errors::{SimError, SimResult};
use cohortsim_observability::events;

/// Element-wise sum of equal-length series from independent acquisition sources.
///
/// Works for DAU (`f64`) and install (`i64`) series alike. Order-independent up
/// to floating-point rounding.
pub struct SourceCombiner;

impl SourceCombiner {
    /// Sum `sources` day by day.
    ///
    /// No sources yields an empty series. Any length disagreement with the
    /// first source is rejected before a total is produced.
    pub fn combine<T, S>(sources: &[S]) -> SimResult<Vec<T>>
    where
        T: Copy + Default + Add<Output = T>,
        S: AsRef<[T]>,
    {
        let Some(first) = sources.first() else {
            return Ok(Vec::new());
        };
        let horizon = first.as_ref().len();

        if let Some(bad) = sources.iter().find(|s| s.as_ref().len() != horizon) {
            let actual = bad.as_ref().len();
            events::length_mismatch("combine sources", horizon, actual);
            return Err(SimError::length_mismatch("combine sources", horizon, actual));
        }

        let mut total = vec![T::default(); horizon];
        for source in sources {
            for (acc, &value) in total.iter_mut().zip(source.as_ref()) {
                *acc = *acc + value;
            }
        }

        events::sources_combined(sources.len(), horizon);
        Ok(total)
    }
}
