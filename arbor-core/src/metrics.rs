//! Operation counting and timing for MST engine runs.
//!
//! Every engine invocation owns a fresh [`OperationCounter`] that is threaded
//! by mutable reference through the engine and its union-find. [`measure`]
//! creates the counter, times the call with a monotonic clock and hands back
//! the engine output with the final count attached.

use std::time::{Duration, Instant};

/// Accumulator for discrete algorithmic steps.
///
/// Counts are deterministic for a given graph: two runs over the same input
/// always produce the same total.
///
/// # Examples
/// ```
/// use arbor_core::OperationCounter;
///
/// let mut counter = OperationCounter::new();
/// counter.tick();
/// counter.add(3);
/// assert_eq!(counter.count(), 4);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OperationCounter {
    count: u64,
}

impl OperationCounter {
    /// Creates a counter starting at zero.
    #[must_use]
    pub const fn new() -> Self {
        Self { count: 0 }
    }

    /// Records a single operation.
    pub const fn tick(&mut self) {
        self.count = self.count.saturating_add(1);
    }

    /// Records `operations` operations at once.
    pub const fn add(&mut self, operations: u64) {
        self.count = self.count.saturating_add(operations);
    }

    /// Returns the operations recorded so far.
    #[must_use]
    #[rustfmt::skip]
    pub const fn count(&self) -> u64 { self.count }
}

/// Output of a measured call: the wrapped value plus its cost.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Measured<T> {
    /// Value returned by the measured call.
    pub value: T,
    /// Operations recorded by the call.
    pub operations: u64,
    /// Wall-clock time spent inside the call.
    pub elapsed: Duration,
}

/// Runs `call` with a fresh [`OperationCounter`] and times it.
///
/// The clock is read immediately before and after the call, so the elapsed
/// time covers only the engine itself.
///
/// # Examples
/// ```
/// use arbor_core::measure;
///
/// let measured = measure(|counter| {
///     counter.add(2);
///     "done"
/// });
/// assert_eq!(measured.value, "done");
/// assert_eq!(measured.operations, 2);
/// ```
pub fn measure<T>(call: impl FnOnce(&mut OperationCounter) -> T) -> Measured<T> {
    let mut counter = OperationCounter::new();
    let started = Instant::now();
    let value = call(&mut counter);
    let elapsed = started.elapsed();
    Measured {
        value,
        operations: counter.count(),
        elapsed,
    }
}
