use num_traits::Float;

use crate::{Error, Result};

/// Comparison-based maximum of the accumulator and the incoming value
///
/// Unlike [`Float::max`], a `NaN` accumulator is kept and a `NaN` incoming
/// value is ignored, so the result only depends on `acc < value`.
///
/// # Arguments
///
/// * `acc` - The running accumulator
/// * `value` - The incoming value
///
/// # Returns
///
/// * `T` - The larger of the two
#[inline]
pub fn max_of<T: Float>(acc: T, value: T) -> T {
    if acc < value { value } else { acc }
}

/// Comparison-based minimum of the accumulator and the incoming value
///
/// # Arguments
///
/// * `acc` - The running accumulator
/// * `value` - The incoming value
///
/// # Returns
///
/// * `T` - The smaller of the two
#[inline]
pub fn min_of<T: Float>(acc: T, value: T) -> T {
    if value < acc { value } else { acc }
}

/// Fails with [`Error::EmptyInput`] when `len` is zero
#[inline]
pub fn ensure_non_empty(kernel: &'static str, len: usize) -> Result<()> {
    if len == 0 {
        log::debug!("{kernel}: rejected empty input");
        return Err(Error::EmptyInput);
    }
    Ok(())
}

/// Checks `1 <= lag < len`
///
/// # Arguments
///
/// * `kernel` - Name of the calling kernel, for diagnostics
/// * `lag` - The lag distance
/// * `len` - The input length
///
/// # Returns
///
/// * `Result<()>` - [`Error::InvalidArgument`] if the lag is out of range
#[inline]
pub fn validate_lag(kernel: &'static str, lag: usize, len: usize) -> Result<()> {
    let reason = if lag == 0 {
        "must be at least 1"
    } else if lag >= len {
        "must be less than the input length"
    } else {
        return Ok(());
    };
    log::debug!("{kernel}: rejected lag {lag} for input of length {len}");
    Err(Error::InvalidArgument {
        argument: "lag",
        reason,
    })
}

/// Folds a value into the lower bound of a range
///
/// The incoming value is the left operand: a `NaN` value replaces the
/// bound, and the next present value replaces a `NaN` bound in turn.
///
/// # Arguments
///
/// * `bound` - The current lower bound
/// * `value` - The incoming value
///
/// # Returns
///
/// * `T` - The new lower bound
#[inline]
pub fn lower_bound<T: Float>(bound: T, value: T) -> T {
    if bound < value { bound } else { value }
}

/// Folds a value into the upper bound of a range
///
/// Same operand order as [`lower_bound`].
#[inline]
pub fn upper_bound<T: Float>(bound: T, value: T) -> T {
    if value < bound { bound } else { value }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_of_keeps_nan_accumulator() {
        assert!(max_of(f64::NAN, 1.0).is_nan());
        assert_eq!(max_of(1.0, f64::NAN), 1.0);
        assert_eq!(max_of(1.0, 2.0), 2.0);
    }

    #[test]
    fn test_min_of_keeps_nan_accumulator() {
        assert!(min_of(f64::NAN, 1.0).is_nan());
        assert_eq!(min_of(1.0, f64::NAN), 1.0);
        assert_eq!(min_of(3.0, 2.0), 2.0);
    }

    #[test]
    fn test_validate_lag() {
        assert!(validate_lag("t", 1, 2).is_ok());
        assert!(validate_lag("t", 3, 10).is_ok());
        assert_eq!(
            validate_lag("t", 0, 10),
            Err(Error::InvalidArgument {
                argument: "lag",
                reason: "must be at least 1"
            })
        );
        assert_eq!(
            validate_lag("t", 2, 2),
            Err(Error::InvalidArgument {
                argument: "lag",
                reason: "must be less than the input length"
            })
        );
        assert!(validate_lag("t", 1, 0).is_err());
    }

    #[test]
    fn test_bounds_take_nan_value_for_one_step() {
        assert!(lower_bound(1.0, f64::NAN).is_nan());
        assert!(upper_bound(1.0, f64::NAN).is_nan());
        assert_eq!(lower_bound(f64::NAN, 2.0), 2.0);
        assert_eq!(upper_bound(f64::NAN, 2.0), 2.0);
        assert_eq!(lower_bound(1.0, 2.0), 1.0);
        assert_eq!(upper_bound(1.0, 2.0), 2.0);
    }

    #[test]
    fn test_ensure_non_empty() {
        assert_eq!(ensure_non_empty("t", 0), Err(Error::EmptyInput));
        assert!(ensure_non_empty("t", 1).is_ok());
    }
}
