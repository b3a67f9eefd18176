use alloc::boxed::Box;

/// A fixed-capacity FIFO holding the most recent `capacity` values.
///
/// Once full, every push hands back the value that was pushed `capacity`
/// calls earlier, which is exactly the partner of a lagged difference.
#[derive(Debug, Clone)]
pub struct RingBuffer<T> {
    /// Backing storage, allocated once
    data: Box<[T]>,
    /// Slot holding the oldest value, overwritten by the next push when full
    head: usize,
    /// Number of occupied slots
    len: usize,
}

impl<T: Default + Copy> RingBuffer<T> {
    /// Creates an empty buffer; `capacity` must be non-zero
    pub fn new(capacity: usize) -> Self {
        debug_assert!(capacity > 0, "capacity can not be zero");
        Self {
            data: vec![T::default(); capacity].into_boxed_slice(),
            head: 0,
            len: 0,
        }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    /// Pushes a value, returning the evicted oldest one when the buffer was full
    pub fn push(&mut self, value: T) -> Option<T> {
        let cap = self.capacity();
        if self.is_full() {
            let evicted = core::mem::replace(&mut self.data[self.head], value);
            self.head = (self.head + 1) % cap;
            Some(evicted)
        } else {
            self.data[(self.head + self.len) % cap] = value;
            self.len += 1;
            None
        }
    }

    pub fn reset(&mut self) {
        self.data.fill(T::default());
        self.head = 0;
        self.len = 0;
    }
}
