/// Non-fatal signal raised alongside a successful result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Warning {
    /// The skip-missing policy substituted at least one missing value.
    MissingValues {
        /// Number of positions where the policy kicked in
        count: usize,
        /// Index of the first such position
        first_index: usize,
    },
}

/// The value of a kernel call together with the warning it raised, if any.
///
/// The warning never alters the value; it is informational only.
///
/// # Examples
///
/// ```
/// # use scan_kernels::{cumsum_with_missing, Warning};
/// let out = cumsum_with_missing(&[Some(1.0), None, Some(3.0)], true).unwrap();
/// assert_eq!(out.value(), &[Some(1.0), None, Some(4.0)]);
/// assert_eq!(
///     out.warning(),
///     Some(Warning::MissingValues { count: 1, first_index: 1 })
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome<V> {
    value: V,
    warning: Option<Warning>,
}

impl<V> Outcome<V> {
    pub(crate) fn new(value: V, warning: Option<Warning>) -> Self {
        Self { value, warning }
    }

    /// Returns a reference to the computed value
    pub fn value(&self) -> &V {
        &self.value
    }

    /// Returns the warning raised by the call, if any
    pub fn warning(&self) -> Option<Warning> {
        self.warning
    }

    /// Returns `true` if the call raised a warning
    pub fn has_warning(&self) -> bool {
        self.warning.is_some()
    }

    /// Consumes the outcome, discarding the warning
    pub fn into_value(self) -> V {
        self.value
    }

    /// Consumes the outcome into its value and warning
    pub fn into_parts(self) -> (V, Option<Warning>) {
        (self.value, self.warning)
    }
}

/// Counts the positions where a skip-missing policy substituted a value.
#[derive(Debug, Default)]
pub(crate) struct MissingTally {
    count: usize,
    first_index: Option<usize>,
}

impl MissingTally {
    #[inline]
    pub fn record(&mut self, index: usize) {
        self.count += 1;
        if self.first_index.is_none() {
            self.first_index = Some(index);
        }
    }

    /// Builds the outcome, logging once if anything was substituted
    pub fn finish<V>(self, kernel: &'static str, value: V) -> Outcome<V> {
        let warning = self.first_index.map(|first_index| {
            log::warn!(
                "{kernel}: input contains missing values ({} substituted, first at index {first_index})",
                self.count
            );
            Warning::MissingValues {
                count: self.count,
                first_index,
            }
        });
        Outcome::new(value, warning)
    }
}
