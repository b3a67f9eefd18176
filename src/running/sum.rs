use num_traits::Float;

use crate::Accumulator;

/// # Cumulative Sum
///
/// Plain left-to-right addition: output `i` is exactly
/// `output[i - 1] + value[i]`, with no compensation term, so the result
/// matches a naive running total bit for bit.
///
/// A missing position is handled by simply not feeding it: the total is
/// left untouched and the next value continues from the last good total.
#[derive(Debug, Clone, Default)]
pub struct RunningSum<T>(Option<T>);

impl<T: Float> RunningSum<T> {
    /// Creates an empty cumulative sum
    pub const fn new() -> Self {
        Self(None)
    }
}

impl<T: Float> Accumulator<T> for RunningSum<T> {
    #[inline]
    fn next(&mut self, value: T) -> Option<T> {
        let sum = self.0.map_or(value, |acc| acc + value);
        self.0 = Some(sum);
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sum() {
        let mut sum = RunningSum::new();
        assert_eq!(sum.get(), None);
        assert_eq!(sum.next(1.5), Some(1.5));
        assert_eq!(sum.next(2.5), Some(4.0));
        assert_eq!(sum.get(), Some(4.0));
    }

    #[test]
    fn test_reset() {
        let mut sum = RunningSum::new();
        sum.next(3.0);
        sum.reset();
        assert_eq!(sum.get(), None);
        assert_eq!(sum.next(1.0), Some(1.0));
    }
}
