//! Range, the `(min, max)` pair of a sequence.

use num_traits::Float;

use crate::{
    Error, Outcome, Result, RunningRange, helper::ensure_non_empty, outcome::MissingTally,
};

/// Returns `(min, max)` of a non-empty sequence
///
/// # Arguments
///
/// * `x` - The input sequence
///
/// # Returns
///
/// * `Result<(T, T)>` - The bounds, or [`Error::EmptyInput`]
///
/// # Examples
///
/// ```
/// # use scan_kernels::range;
/// assert_eq!(range(&[5.0, 1.0, 9.0, 3.0]).unwrap(), (1.0, 9.0));
/// ```
pub fn range<T: Float>(x: &[T]) -> Result<(T, T)> {
    ensure_non_empty("range", x.len())?;
    let mut range = RunningRange::new();
    x.iter().for_each(|v| {
        range.next_value(*v);
    });
    range.get().ok_or(Error::EmptyInput)
}

/// Returns `(min, max)` of a sequence with gaps
///
/// With `skip_missing` on, the first missing element aborts the scan and
/// the whole result is missing (`None`), with a warning attached. Unlike
/// the cumulative sum and the lagged difference there is no element-wise
/// propagation: one gap anywhere discards the range.
///
/// With `skip_missing` off, a gap still makes the range missing, but no
/// warning is raised.
///
/// # Arguments
///
/// * `x` - The input sequence, `None` marking a missing value
/// * `skip_missing` - The skip-missing policy
///
/// # Returns
///
/// * `Result<Outcome<Option<(T, T)>>>` - The bounds, `None` if a gap was
///   met, or [`Error::EmptyInput`]
///
/// # Examples
///
/// ```
/// # use scan_kernels::range_with_missing;
/// let out = range_with_missing(&[Some(5.0), Some(1.0), None, Some(9.0)], true).unwrap();
/// assert_eq!(out.value(), &None);
/// assert!(out.has_warning());
/// ```
pub fn range_with_missing<T: Float>(
    x: &[Option<T>],
    skip_missing: bool,
) -> Result<Outcome<Option<(T, T)>>> {
    const KERNEL: &str = "range_with_missing";

    ensure_non_empty(KERNEL, x.len())?;

    let mut range = RunningRange::new();
    let mut tally = MissingTally::default();
    for (index, v) in x.iter().enumerate() {
        match v {
            Some(v) => {
                range.next_value(*v);
            }
            None => {
                if skip_missing {
                    tally.record(index);
                }
                return Ok(tally.finish(KERNEL, None));
            }
        }
    }

    Ok(tally.finish(KERNEL, range.get()))
}
