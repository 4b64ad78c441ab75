use crate::errors::SimResult;

/// A retention curve: cohort age in days to the expected share still active.
///
/// Age 1 is the install day. Implementations must be pure: the same age always
/// yields the same fraction.
pub trait RetentionModel: Send + Sync {
    /// Retention fraction for a cohort of the given age.
    fn retention(&self, age: i64) -> SimResult<f64>;
}

impl<R: RetentionModel + ?Sized> RetentionModel for &R {
    fn retention(&self, age: i64) -> SimResult<f64> {
        (**self).retention(age)
    }
}

impl<R: RetentionModel + ?Sized> RetentionModel for Box<R> {
    fn retention(&self, age: i64) -> SimResult<f64> {
        (**self).retention(age)
    }
}

/// Adapts an infallible closure into a [`RetentionModel`].
///
/// ```
/// use cohortsim_core::{FnRetention, RetentionModel};
///
/// let flat = FnRetention(|age: i64| if age >= 1 { 0.5 } else { 0.0 });
/// assert_eq!(flat.retention(3).unwrap(), 0.5);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FnRetention<F>(pub F);

impl<F> RetentionModel for FnRetention<F>
where
    F: Fn(i64) -> f64 + Send + Sync,
{
    fn retention(&self, age: i64) -> SimResult<f64> {
        Ok((self.0)(age))
    }
}
