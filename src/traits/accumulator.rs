/// A single-pass accumulator fed one value at a time
///
/// Every scan kernel in this crate is an accumulator driven left to right
/// over a slice: output `i` only ever depends on inputs `0..=i`. The same
/// accumulators can be used directly for streaming data, where values
/// arrive one by one instead of as a whole slice.
///
/// # Examples
///
/// ```
/// # use scan_kernels::{Accumulator, RunningSum};
/// let mut sum = RunningSum::new();
/// let mut results = vec![];
///
/// [1.0, 2.0, 3.0, 4.0].iter().for_each(|v| {
///     sum.next(*v).map(|s| results.push(s));
/// });
///
/// assert_eq!(&results, &[1.0, 3.0, 6.0, 10.0]);
/// ```
pub trait Accumulator<T> {
    /// Folds a new value into the accumulator
    ///
    /// # Arguments
    ///
    /// * `value` - The incoming value
    ///
    /// # Returns
    ///
    /// * `Option<T>` - The current output, or `None` while the accumulator
    ///   has not seen enough values to emit one
    fn next(&mut self, value: T) -> Option<T>;

    /// Returns the current output without consuming input
    ///
    /// # Returns
    ///
    /// * `Option<T>` - The last emitted output, or `None` if nothing was emitted yet
    fn get(&self) -> Option<T>;

    /// Resets the accumulator to its freshly constructed state
    fn reset(&mut self);
}
