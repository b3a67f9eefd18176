//! Conversions between `NaN`-coded buffers and the typed missing encoding.
//!
//! Hosts that store missing observations as `NaN` can translate their
//! buffers with [`from_nan_coded`] before calling the `*_with_missing`
//! kernels, and back with [`to_nan_coded`] afterwards.

use alloc::vec::Vec;

use num_traits::Float;

/// Maps every `NaN` to `None` and every other value to `Some`
///
/// # Examples
///
/// ```
/// # use scan_kernels::from_nan_coded;
/// assert_eq!(from_nan_coded(&[1.0, f64::NAN]), vec![Some(1.0), None]);
/// ```
pub fn from_nan_coded<T: Float>(x: &[T]) -> Vec<Option<T>> {
    x.iter().map(|v| (!v.is_nan()).then_some(*v)).collect()
}

/// Maps every `None` to `NaN`
///
/// # Examples
///
/// ```
/// # use scan_kernels::to_nan_coded;
/// let out = to_nan_coded(&[Some(2.0f64), None]);
/// assert_eq!(out[0], 2.0);
/// assert!(out[1].is_nan());
/// ```
pub fn to_nan_coded<T: Float>(x: &[Option<T>]) -> Vec<T> {
    x.iter().map(|v| v.unwrap_or_else(T::nan)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infinities_are_present() {
        assert_eq!(
            from_nan_coded(&[f64::INFINITY, f64::NEG_INFINITY]),
            vec![Some(f64::INFINITY), Some(f64::NEG_INFINITY)]
        );
    }

    #[test]
    fn test_round_trip_keeps_gaps() {
        let x = [Some(1.0f32), None, Some(-3.5), None];
        assert_eq!(from_nan_coded(&to_nan_coded(&x)), x.to_vec());
    }
}
