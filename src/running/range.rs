use num_traits::Float;

use crate::helper::{lower_bound, upper_bound};

/// # Running Range
///
/// Maintains the `(min, max)` pair of every value seen so far, both seeded
/// from the first value.
///
/// The bounds are updated with the incoming value as the left operand of
/// the comparison, the reverse of the cumulative maximum and minimum. A
/// `NaN` value therefore replaces both bounds until the next value arrives.
///
/// # Examples
///
/// ```
/// # use scan_kernels::RunningRange;
/// let mut range = RunningRange::new();
/// [5.0, 1.0, 9.0, 3.0].iter().for_each(|v| {
///     range.next_value(*v);
/// });
/// assert_eq!(range.get(), Some((1.0, 9.0)));
/// ```
#[derive(Debug, Clone, Default)]
pub struct RunningRange<T> {
    bounds: Option<(T, T)>,
}

impl<T: Float> RunningRange<T> {
    /// Creates an empty running range
    pub const fn new() -> Self {
        Self { bounds: None }
    }

    /// Folds a value into both bounds
    ///
    /// # Arguments
    ///
    /// * `value` - The incoming value
    ///
    /// # Returns
    ///
    /// * `(T, T)` - The current `(min, max)`
    #[inline]
    pub fn next_value(&mut self, value: T) -> (T, T) {
        let bounds = match self.bounds {
            Some((min, max)) => (lower_bound(min, value), upper_bound(max, value)),
            None => (value, value),
        };
        self.bounds = Some(bounds);
        bounds
    }

    /// Returns the current `(min, max)`, or `None` before the first value
    #[inline]
    pub fn get(&self) -> Option<(T, T)> {
        self.bounds
    }

    /// Resets the running range
    pub fn reset(&mut self) {
        self.bounds = None;
    }
}
