use num_traits::Float;

use crate::Kbn;

/// Sample variance with Bessel's correction
///
/// Computed in two passes. The mean is accumulated as `Σ (x_i / n)` in
/// index order rather than `Σ x_i / n`, which keeps the running sum near
/// the magnitude of the data. The second pass sums squared deviations from
/// that mean and divides by `n - 1`. Both sums use Kahan-Babuska-Neumaier
/// compensation.
///
/// Fewer than two values have no sample variance; `NaN` is returned rather
/// than an error.
///
/// # Arguments
///
/// * `x` - The input sequence
///
/// # Returns
///
/// * `T` - The sample variance, or `NaN` if `x.len() < 2`
///
/// # Examples
///
/// ```
/// # use scan_kernels::variance;
/// # use assert_approx_eq::assert_approx_eq;
/// let var = variance(&[2.0f64, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
/// assert_approx_eq!(var, 32.0 / 7.0, 1e-12);
///
/// assert!(variance(&[1.0f64]).is_nan());
/// ```
pub fn variance<T: Float + Default>(x: &[T]) -> T {
    if x.len() < 2 {
        return T::nan();
    }
    let Some(n) = T::from(x.len()) else {
        return T::nan();
    };

    let mut mean = Kbn::default();
    for &v in x {
        mean += v / n;
    }
    let mean = mean.total();

    let mut sum_sq_dev = Kbn::default();
    for &v in x {
        let dev = v - mean;
        sum_sq_dev += dev * dev;
    }

    sum_sq_dev.total() / (n - T::one())
}
