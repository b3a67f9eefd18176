use num_traits::Float;

use crate::{Accumulator, Error, Result, RingBuffer};

/// # Lagged Difference
///
/// Emits `value[i] - value[i - lag]` once `lag` earlier values have been
/// seen. The first `lag` calls to [`Accumulator::next`] return `None`, so a
/// series of length `n` yields `n - lag` differences.
///
/// # Examples
///
/// ```
/// # use scan_kernels::{Accumulator, LagDifference};
/// let mut diff = LagDifference::new(2).unwrap();
/// let results: Vec<f64> = [1.0, 3.0, 6.0, 10.0, 15.0]
///     .iter()
///     .filter_map(|v| diff.next(*v))
///     .collect();
/// assert_eq!(&results, &[5.0, 7.0, 9.0]);
/// ```
#[derive(Debug, Clone)]
pub struct LagDifference<T> {
    /// The last `lag` values
    buf: RingBuffer<T>,
    /// Most recent difference
    last: Option<T>,
}

impl<T: Float + Default> LagDifference<T> {
    /// Creates a lagged difference
    ///
    /// # Arguments
    ///
    /// * `lag` - Distance between the differenced values
    ///
    /// # Returns
    ///
    /// * `Result<Self>` - [`Error::InvalidArgument`] if `lag` is zero
    pub fn new(lag: usize) -> Result<Self> {
        if lag == 0 {
            return Err(Error::InvalidArgument {
                argument: "lag",
                reason: "must be at least 1",
            });
        }
        Ok(Self {
            buf: RingBuffer::new(lag),
            last: None,
        })
    }

    /// Returns the lag
    #[inline]
    pub fn lag(&self) -> usize {
        self.buf.capacity()
    }
}

impl<T: Float + Default> Accumulator<T> for LagDifference<T> {
    #[inline]
    fn next(&mut self, value: T) -> Option<T> {
        let diff = self.buf.push(value).map(|earlier| value - earlier);
        if diff.is_some() {
            self.last = diff;
        }
        diff
    }

    #[inline]
    fn get(&self) -> Option<T> {
        self.last
    }

    fn reset(&mut self) {
        self.buf.reset();
        self.last = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_lag_rejected() {
        assert!(matches!(
            LagDifference::<f64>::new(0),
            Err(Error::InvalidArgument { argument: "lag", .. })
        ));
    }

    #[test]
    fn test_lag_one() {
        let mut diff = LagDifference::new(1).unwrap();
        assert_eq!(diff.next(1.0), None);
        assert_eq!(diff.get(), None);
        assert_eq!(diff.next(3.0), Some(2.0));
        assert_eq!(diff.next(6.0), Some(3.0));
        assert_eq!(diff.get(), Some(3.0));
        assert_eq!(diff.lag(), 1);
    }

    #[test]
    fn test_reset_requires_refill() {
        let mut diff = LagDifference::new(2).unwrap();
        diff.next(1.0);
        diff.next(2.0);
        diff.next(4.0);
        diff.reset();
        assert_eq!(diff.get(), None);
        assert_eq!(diff.next(10.0), None);
        assert_eq!(diff.next(11.0), None);
        assert_eq!(diff.next(15.0), Some(5.0));
    }
}
