use num_traits::Float;

use crate::{Accumulator, helper::min_of};

/// # Cumulative Minimum
///
/// Tracks the smallest value seen since construction (or the last reset).
///
/// The output at step `i` is `min(output[i - 1], value[i])`, computed with
/// the comparison `value < running`.
#[derive(Debug, Clone, Default)]
pub struct RunningMinimum<T>(Option<T>);

impl<T: Float> RunningMinimum<T> {
    /// Creates an empty cumulative minimum
    pub const fn new() -> Self {
        Self(None)
    }
}

impl<T: Float> Accumulator<T> for RunningMinimum<T> {
    #[inline]
    fn next(&mut self, value: T) -> Option<T> {
        let min = match self.0 {
            Some(acc) => min_of(acc, value),
            None => value,
        };
        self.0 = Some(min);
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
