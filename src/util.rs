use std::cell::Cell;

/// Per-container instrumentation counter. Every public operation resets it, ticks it once per
/// unit of work and reports the final value to the caller.
///
/// This lives in a `Cell` so read-only operations like `search` can still count their work.
/// That also keeps the owning container `!Sync`: a counter is never shared between threads.
#[derive(Debug, Default)]
pub(crate) struct StepCounter(Cell<usize>);

impl StepCounter {
    pub(crate) fn new() -> Self {
        Self(Cell::new(0))
    }

    pub(crate) fn reset(&self) {
        self.0.set(0);
    }

    /// Resets the counter to `n` instead of zero.
    pub(crate) fn start_at(&self, n: usize) {
        self.0.set(n);
    }

    pub(crate) fn tick(&self) {
        self.0.set(self.0.get() + 1);
    }

    pub(crate) fn get(&self) -> usize {
        self.0.get()
    }
}
