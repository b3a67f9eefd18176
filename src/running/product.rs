use num_traits::Float;

use crate::Accumulator;

/// # Cumulative Product
///
/// Seeded from the first value, then multiplied by every following one.
#[derive(Debug, Clone, Default)]
pub struct RunningProduct<T>(Option<T>);

impl<T: Float> RunningProduct<T> {
    /// Creates an empty cumulative product
    pub const fn new() -> Self {
        Self(None)
    }
}

impl<T: Float> Accumulator<T> for RunningProduct<T> {
    #[inline]
    fn next(&mut self, value: T) -> Option<T> {
        let prod = self.0.map_or(value, |acc| acc * value);
        self.0 = Some(prod);
        self.0
    }

    #[inline]
    fn get(&self) -> Option<T> {
        self.0
    }

    fn reset(&mut self) {
        self.0 = None;
    }
}
