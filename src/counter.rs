//! Explicit counter cell.
//!
//! Process-wide counters belong to whoever owns the cell: callers
//! construct a `Counter` and pass it by mutable reference wherever the
//! count must advance. There is no module-level global.

/// A counter cell with an explicit lifecycle.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Counter {
    count: u64,
}

impl Counter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advances the count by one and returns the new value.
    pub fn increment(&mut self) -> u64 {
        self.count += 1;
        self.count
    }

    pub fn value(&self) -> u64 {
        self.count
    }

    pub fn reset(&mut self) {
        self.count = 0;
    }
}
