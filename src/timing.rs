//! Call timing wrappers.
//!
//! Wraps a callable so elapsed time is measured transparently, either
//! one-shot with [`timed`] or across repeated calls with [`Timed`].

use std::time::{Duration, Instant};

/// Result of a timed call: the callable's output plus elapsed time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing<T> {
    pub result: T,
    pub elapsed: Duration,
}

/// Runs a callable once and measures how long it took.
pub fn timed<T>(f: impl FnOnce() -> T) -> Timing<T> {
    let start = Instant::now();
    let result = f();
    let elapsed = start.elapsed();

    #[cfg(feature = "tracing")]
    tracing::debug!(?elapsed, "timed call finished");

    Timing { result, elapsed }
}

/// Wraps a callable and accumulates timing across calls.
///
/// The wrapper keeps the callable's contract: `call` returns exactly
/// what the inner callable returns, while call count and total elapsed
/// time build up on the side.
#[derive(Debug)]
pub struct Timed<F> {
    inner: F,
    calls: u64,
    total_elapsed: Duration,
}

impl<F, T> Timed<F>
where
    F: FnMut() -> T,
{
    pub fn new(inner: F) -> Self {
        Self {
            inner,
            calls: 0,
            total_elapsed: Duration::ZERO,
        }
    }

    /// Invokes the wrapped callable, recording one call and its duration.
    pub fn call(&mut self) -> T {
        let start = Instant::now();
        let result = (self.inner)();
        self.total_elapsed += start.elapsed();
        self.calls += 1;
        result
    }

    pub fn calls(&self) -> u64 {
        self.calls
    }

    pub fn total_elapsed(&self) -> Duration {
        self.total_elapsed
    }
}
