//! Cumulative kernels: maximum, minimum, product and sum over a slice.

use alloc::vec::Vec;

use num_traits::Float;

use crate::{
    Accumulator, Outcome, Result, RunningMaximum, RunningMinimum, RunningProduct, RunningSum,
    helper::ensure_non_empty,
    outcome::MissingTally,
};

/// Drives an accumulator over a non-empty slice, one output per input
fn scan<T, A>(kernel: &'static str, x: &[T], mut acc: A) -> Result<Vec<T>>
where
    T: Float,
    A: Accumulator<T>,
{
    ensure_non_empty(kernel, x.len())?;
    Ok(x.iter().filter_map(|v| acc.next(*v)).collect())
}

/// Cumulative maximum
///
/// `out[0] = x[0]` and `out[i] = max(out[i - 1], x[i])`.
///
/// # Arguments
///
/// * `x` - The input sequence
///
/// # Returns
///
/// * `Result<Vec<T>>` - The running maxima, or [`Error::EmptyInput`](crate::Error::EmptyInput)
///
/// # Examples
///
/// ```
/// # use scan_kernels::cummax;
/// assert_eq!(cummax(&[1.0, 3.0, 2.0, 5.0]).unwrap(), vec![1.0, 3.0, 3.0, 5.0]);
/// ```
pub fn cummax<T: Float>(x: &[T]) -> Result<Vec<T>> {
    scan("cummax", x, RunningMaximum::new())
}

/// Cumulative minimum
///
/// `out[0] = x[0]` and `out[i] = min(out[i - 1], x[i])`.
///
/// # Examples
///
/// ```
/// # use scan_kernels::cummin;
/// assert_eq!(cummin(&[4.0, 3.0, 5.0, 1.0]).unwrap(), vec![4.0, 3.0, 3.0, 1.0]);
/// ```
pub fn cummin<T: Float>(x: &[T]) -> Result<Vec<T>> {
    scan("cummin", x, RunningMinimum::new())
}

/// Cumulative product
///
/// # Examples
///
/// ```
/// # use scan_kernels::cumprod;
/// assert_eq!(cumprod(&[1.0, 2.0, 3.0, 4.0]).unwrap(), vec![1.0, 2.0, 6.0, 24.0]);
/// ```
pub fn cumprod<T: Float>(x: &[T]) -> Result<Vec<T>> {
    scan("cumprod", x, RunningProduct::new())
}

/// Cumulative sum
///
/// # Examples
///
/// ```
/// # use scan_kernels::cumsum;
/// assert_eq!(cumsum(&[1.0, 2.0, 3.0, 4.0]).unwrap(), vec![1.0, 3.0, 6.0, 10.0]);
/// ```
pub fn cumsum<T: Float>(x: &[T]) -> Result<Vec<T>> {
    scan("cumsum", x, RunningSum::new())
}

/// Cumulative sum over a sequence with gaps
///
/// With `skip_missing` on, a missing element yields a missing output at
/// that position and the running total carries on from the last present
/// value, so `[1, _, 3]` gives `[1, _, 4]`. A warning is attached to the
/// outcome when at least one gap was met.
///
/// With `skip_missing` off, a gap propagates like any arithmetic on a
/// missing value: its position and every later one are missing, and no
/// warning is raised.
///
/// # Arguments
///
/// * `x` - The input sequence, `None` marking a missing value
/// * `skip_missing` - The skip-missing policy
///
/// # Returns
///
/// * `Result<Outcome<Vec<Option<T>>>>` - The running totals, or
///   [`Error::EmptyInput`](crate::Error::EmptyInput)
pub fn cumsum_with_missing<T: Float>(
    x: &[Option<T>],
    skip_missing: bool,
) -> Result<Outcome<Vec<Option<T>>>> {
    const KERNEL: &str = "cumsum_with_missing";

    ensure_non_empty(KERNEL, x.len())?;

    let mut sum = RunningSum::new();
    let mut tally = MissingTally::default();
    let mut poisoned = false;
    let out: Vec<Option<T>> = x
        .iter()
        .enumerate()
        .map(|(i, v)| match v {
            Some(v) if !poisoned => sum.next(*v),
            Some(_) => None,
            None if skip_missing => {
                tally.record(i);
                None
            }
            None => {
                poisoned = true;
                None
            }
        })
        .collect();

    Ok(tally.finish(KERNEL, out))
}
