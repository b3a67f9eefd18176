use num_traits::Float;

use crate::{Accumulator, helper::max_of};

/// # Cumulative Maximum
///
/// Tracks the largest value seen since construction (or the last reset).
///
/// Each update is a single comparison against the running maximum, so the
/// output at step `i` is `max(output[i - 1], value[i])`. The comparison is
/// `running < value`: a `NaN` seen first is kept, a later `NaN` is ignored.
///
/// # Examples
///
/// ```
/// # use scan_kernels::{Accumulator, RunningMaximum};
/// let mut max = RunningMaximum::new();
/// let results: Vec<f64> = [3.0, 1.0, 4.0, 1.0, 5.0]
///     .iter()
///     .filter_map(|v| max.next(*v))
///     .collect();
/// assert_eq!(&results, &[3.0, 3.0, 4.0, 4.0, 5.0]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RunningMaximum<T>(Option<T>);

impl<T: Float> RunningMaximum<T> {
    /// Creates an empty cumulative maximum
    pub const fn new() -> Self {
        Self(None)
    }
}

impl<T: Float> Accumulator<T> for RunningMaximum<T> {
    #[inline]
    fn next(&mut self, value: T) -> Option<T> {
        let max = match self.0 {
            Some(acc) => max_of(acc, value),
            None => value,
        };
        self.0 = Some(max);
        self.0
    }

    #[inline]
    fn get(&self) -> Option<T> {
        self.0
    }

    fn reset(&mut self) {
        self.0 = None;
    }
}
