//! Lagged differencing.

use alloc::vec::Vec;

use num_traits::Float;

use crate::{
    Accumulator, LagDifference, Outcome, Result, ScanOptions,
    helper::validate_lag,
    outcome::MissingTally,
};

/// First difference, `out[i] = x[i + 1] - x[i]`
///
/// # Arguments
///
/// * `x` - The input sequence, at least two elements long
///
/// # Returns
///
/// * `Result<Vec<T>>` - `x.len() - 1` differences, or
///   [`Error::InvalidArgument`](crate::Error::InvalidArgument) if `x` is too short
///
/// # Examples
///
/// ```
/// # use scan_kernels::diff;
/// assert_eq!(diff(&[1.0, 3.0, 6.0, 10.0]).unwrap(), vec![2.0, 3.0, 4.0]);
/// ```
pub fn diff<T: Float + Default>(x: &[T]) -> Result<Vec<T>> {
    diff_lag(x, 1)
}

/// Lagged difference, `out[i] = x[i + lag] - x[i]`
///
/// # Arguments
///
/// * `x` - The input sequence
/// * `lag` - Distance between the differenced elements, `1 <= lag < x.len()`
///
/// # Returns
///
/// * `Result<Vec<T>>` - `x.len() - lag` differences, or
///   [`Error::InvalidArgument`](crate::Error::InvalidArgument)
///
/// # Examples
///
/// ```
/// # use scan_kernels::{diff_lag, Error};
/// assert_eq!(diff_lag(&[1.0, 2.0, 4.0, 8.0], 2).unwrap(), vec![3.0, 6.0]);
/// assert!(matches!(
///     diff_lag(&[1.0, 2.0], 2),
///     Err(Error::InvalidArgument { .. })
/// ));
/// ```
pub fn diff_lag<T: Float + Default>(x: &[T], lag: usize) -> Result<Vec<T>> {
    validate_lag("diff_lag", lag, x.len())?;
    let mut diff = LagDifference::new(lag)?;
    Ok(x.iter().filter_map(|v| diff.next(*v)).collect())
}

/// Lagged difference over a sequence with gaps
///
/// With `skip_missing` on, a pair whose later element is missing yields a
/// missing output and counts towards the warning. A pair where only the
/// earlier element is missing also yields a missing output, but is not
/// counted: only the later element of each pair is checked.
///
/// With `skip_missing` off, every pair touching a gap yields a missing
/// output and no warning is raised.
///
/// # Arguments
///
/// * `x` - The input sequence, `None` marking a missing value
/// * `opts` - Lag and skip-missing policy
///
/// # Returns
///
/// * `Result<Outcome<Vec<Option<T>>>>` - `x.len() - lag` differences, or
///   [`Error::InvalidArgument`](crate::Error::InvalidArgument)
///
/// # Examples
///
/// ```
/// # use scan_kernels::{diff_with_missing, ScanOptions};
/// let opts = ScanOptions::new().with_skip_missing(true);
/// let out = diff_with_missing(&[Some(1.0), Some(4.0), None, Some(9.0)], opts).unwrap();
/// assert_eq!(out.value(), &[Some(3.0), None, None]);
/// assert!(out.has_warning());
/// ```
pub fn diff_with_missing<T: Float>(
    x: &[Option<T>],
    opts: ScanOptions,
) -> Result<Outcome<Vec<Option<T>>>> {
    const KERNEL: &str = "diff_with_missing";

    let lag = opts.lag();
    validate_lag(KERNEL, lag, x.len())?;

    let mut tally = MissingTally::default();
    let out: Vec<Option<T>> = x[lag..]
        .iter()
        .zip(x)
        .enumerate()
        .map(|(i, (later, earlier))| match (later, earlier) {
            (Some(later), Some(earlier)) => Some(*later - *earlier),
            (None, _) if opts.skip_missing() => {
                tally.record(i + lag);
                None
            }
            // Earlier gap propagates through the subtraction, unflagged
            _ => None,
        })
        .collect();

    Ok(tally.finish(KERNEL, out))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Error, Warning};

    #[test]
    fn test_diff_concrete() {
        assert_eq!(diff(&[1.0, 3.0, 6.0, 10.0]).unwrap(), vec![2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_diff_too_short() {
        assert!(matches!(diff(&[1.0]), Err(Error::InvalidArgument { .. })));
        assert!(matches!(
            diff::<f64>(&[]),
            Err(Error::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_diff_lag_length() {
        let x = [1.0, 2.0, 4.0, 7.0, 11.0, 16.0];
        for lag in 1..x.len() {
            assert_eq!(diff_lag(&x, lag).unwrap().len(), x.len() - lag);
        }
        assert_eq!(diff_lag(&x, 5).unwrap(), vec![15.0]);
    }

    #[test]
    fn test_diff_lag_bounds() {
        let x = [1.0, 2.0, 3.0];
        assert_eq!(
            diff_lag(&x, 3),
            Err(Error::InvalidArgument {
                argument: "lag",
                reason: "must be less than the input length"
            })
        );
        assert_eq!(
            diff_lag(&x, 0),
            Err(Error::InvalidArgument {
                argument: "lag",
                reason: "must be at least 1"
            })
        );
    }

    #[test]
    fn test_diff_with_missing_later_gap_warns() {
        let opts = ScanOptions::new().with_lag(1).with_skip_missing(true);
        let x = [Some(1.0), None, Some(4.0), Some(8.0)];
        let out = diff_with_missing(&x, opts).unwrap();
        // pair (0,1): later missing, warned; pair (1,2): earlier missing, silent
        assert_eq!(out.value(), &vec![None, None, Some(4.0)]);
        assert_eq!(
            out.warning(),
            Some(Warning::MissingValues {
                count: 1,
                first_index: 1
            })
        );
    }

    #[test]
    fn test_diff_with_missing_earlier_gap_only_is_silent() {
        let opts = ScanOptions::new().with_lag(2).with_skip_missing(true);
        let x = [None, Some(2.0), Some(5.0), Some(9.0)];
        let out = diff_with_missing(&x, opts).unwrap();
        assert_eq!(out.value(), &vec![None, Some(7.0)]);
        assert!(!out.has_warning());
    }

    #[test]
    fn test_diff_with_missing_propagates_without_skip() {
        let opts = ScanOptions::new();
        let x = [Some(1.0), None, Some(4.0), Some(8.0)];
        let out = diff_with_missing(&x, opts).unwrap();
        assert_eq!(out.into_parts(), (vec![None, None, Some(4.0)], None));
    }

    #[test]
    fn test_diff_with_missing_invalid_lag_checked_first() {
        let opts = ScanOptions::new().with_lag(3);
        assert!(matches!(
            diff_with_missing(&[None, Some(1.0), Some(2.0)], opts),
            Err(Error::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_diff_with_missing_matches_diff_lag_without_gaps() {
        let x = [3.0, 1.0, 4.0, 1.0, 5.0, 9.0];
        let opts = ScanOptions::new().with_lag(2);
        let with_gaps: Vec<Option<f64>> = x.iter().copied().map(Some).collect();
        let expected: Vec<Option<f64>> = diff_lag(&x, 2).unwrap().into_iter().map(Some).collect();
        assert_eq!(
            diff_with_missing(&with_gaps, opts).unwrap().into_value(),
            expected
        );
    }
}
