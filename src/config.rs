/// Scalar parameters shared by the lag- and missing-aware kernels.
///
/// Defaults to `lag = 1` and `skip_missing = false`.
///
/// # Examples
///
/// ```
/// # use scan_kernels::ScanOptions;
/// let opts = ScanOptions::new().with_lag(3).with_skip_missing(true);
/// assert_eq!(opts.lag(), 3);
/// assert!(opts.skip_missing());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScanOptions {
    /// Distance between the two differenced elements
    lag: usize,
    /// Propagate or short-circuit on missing values instead of failing
    skip_missing: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl ScanOptions {
    /// Creates options with `lag = 1` and the skip-missing policy off
    ///
    /// # Returns
    ///
    /// * `Self` - The default options
    pub const fn new() -> Self {
        Self {
            lag: 1,
            skip_missing: false,
        }
    }

    /// Returns the lag
    ///
    /// # Returns
    ///
    /// * `usize` - The lag distance
    #[inline]
    pub const fn lag(&self) -> usize {
        self.lag
    }

    /// Returns whether the skip-missing policy is on
    ///
    /// # Returns
    ///
    /// * `bool` - The skip-missing policy
    #[inline]
    pub const fn skip_missing(&self) -> bool {
        self.skip_missing
    }

    /// Sets the lag
    ///
    /// The value is validated by the kernel that consumes it, against the
    /// length of the input.
    ///
    /// # Arguments
    ///
    /// * `lag` - The lag distance
    ///
    /// # Returns
    ///
    /// * `&mut Self` - The options object
    #[inline]
    pub const fn set_lag(&mut self, lag: usize) -> &mut Self {
        self.lag = lag;
        self
    }

    /// Sets the skip-missing policy
    ///
    /// # Arguments
    ///
    /// * `skip_missing` - The skip-missing policy
    ///
    /// # Returns
    ///
    /// * `&mut Self` - The options object
    #[inline]
    pub const fn set_skip_missing(&mut self, skip_missing: bool) -> &mut Self {
        self.skip_missing = skip_missing;
        self
    }

    /// Returns a copy with the given lag
    #[inline]
    pub const fn with_lag(mut self, lag: usize) -> Self {
        self.lag = lag;
        self
    }

    /// Returns a copy with the given skip-missing policy
    #[inline]
    pub const fn with_skip_missing(mut self, skip_missing: bool) -> Self {
        self.skip_missing = skip_missing;
        self
    }
}
