//! The Timing Loop
//!
//! [`time`] runs every test strictly in sequence: each action is
//! invoked `count` times back to back, every invocation bracketed by
//! its own monotonic clock reads. Samples stream straight into an
//! [`Aggregator`], so nothing is buffered and per-test memory stays
//! constant apart from the histogram's distinct-value buckets.

use crate::results::{RuntimeStats, Runtimes};
use crate::unit::Test;
use lapbench_stats::{Histogram, Welford};
use std::time::{Duration, Instant};

/// Streaming per-test accumulator.
///
/// [`time`] drives one of these per test. They are public so that
/// pre-measured durations (replayed traces, synthetic fixtures) can be
/// folded through exactly the update rule the engine uses.
#[derive(Debug, Clone, Default)]
pub struct Aggregator {
    count: u64,
    total: Duration,
    min: Duration,
    max: Duration,
    welford: Welford,
    histogram: Histogram,
}

impl Aggregator {
    /// Create an empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one per-iteration duration into the aggregate.
    pub fn record(&mut self, sample: Duration) {
        if self.count == 0 {
            self.min = sample;
            self.max = sample;
        } else {
            if sample < self.min {
                self.min = sample;
            }
            if sample > self.max {
                self.max = sample;
            }
        }
        self.count += 1;
        self.total += sample;
        self.welford.record(sample.as_nanos() as f64);
        self.histogram.record(sample);
    }

    /// Number of samples recorded so far.
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Freeze the aggregate into a [`RuntimeStats`].
    ///
    /// With no samples recorded this yields the degenerate result: zero
    /// total and extremes, zero mean, variance, and deviation, and an
    /// empty histogram.
    pub fn finish(self, name: impl Into<String>) -> RuntimeStats {
        RuntimeStats {
            name: name.into(),
            count: self.count,
            total: self.total,
            min: self.min,
            max: self.max,
            mean: self.welford.mean(),
            variance: self.welford.sample_variance(),
            stddev: self.welford.std_dev(),
            histogram: self.histogram,
        }
    }
}

/// Run every test `count` times and aggregate per-iteration runtimes.
///
/// Tests execute in the order given, one at a time, never interleaved.
/// Each invocation is timed on its own [`Instant`] pair, so aggregation
/// cost never leaks into the next sample. The engine performs no
/// warm-up and no outlier rejection: every observation lands in the
/// aggregate exactly once.
///
/// `count == 0` yields a zeroed [`RuntimeStats`] per test without ever
/// invoking the actions; an empty `tests` yields an empty collection.
/// Panics from an action are not caught and unwind out of this call,
/// abandoning the remaining iterations and tests.
pub fn time(count: u64, tests: Vec<Test>) -> Runtimes {
    let mut entries = Vec::with_capacity(tests.len());
    for mut test in tests {
        let mut aggregator = Aggregator::new();
        for _ in 0..count {
            let start = Instant::now();
            test.run();
            let elapsed = start.elapsed();
            aggregator.record(elapsed);
        }
        let stats = aggregator.finish(test.into_name());
        tracing::debug!(
            name = %stats.name,
            count = stats.count,
            total_ns = stats.total.as_nanos() as u64,
            "test complete"
        );
        entries.push(stats);
    }
    Runtimes::from_entries(entries)
}
