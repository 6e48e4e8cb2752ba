//! Aggregated Results
//!
//! One [`RuntimeStats`] per test, collected into a [`Runtimes`] ordered
//! ascending by total runtime so the fastest test iterates first. The
//! sort is stable: equal totals keep their submission order and are
//! never merged.

use lapbench_stats::Histogram;
use std::time::Duration;

/// Statistics for one test over a full run.
///
/// `mean`, `variance`, and `stddev` are in nanoseconds (variance in
/// nanoseconds squared); `total`, `min`, and `max` keep the clock's
/// native [`Duration`] form. The histogram keys on exact observed
/// durations.
#[derive(Debug, Clone)]
pub struct RuntimeStats {
    /// Test name, taken from the [`Test`](crate::Test) that produced it.
    pub name: String,
    /// Number of recorded iterations.
    pub count: u64,
    /// Sum of all per-iteration durations; the collection's sort key.
    pub total: Duration,
    /// Smallest observed duration, `Duration::ZERO` when `count == 0`.
    pub min: Duration,
    /// Largest observed duration, `Duration::ZERO` when `count == 0`.
    pub max: Duration,
    /// Arithmetic mean of the per-iteration durations, in nanoseconds.
    pub mean: f64,
    /// Sample variance (`n - 1` normalization) in nanoseconds squared;
    /// exactly `0.0` when `count <= 1`.
    pub variance: f64,
    /// Sample standard deviation, in nanoseconds.
    pub stddev: f64,
    /// Exact-duration frequency table, ascending by duration.
    pub histogram: Histogram,
}

/// Results of one run, ordered ascending by total runtime.
#[derive(Debug, Clone, Default)]
pub struct Runtimes {
    entries: Vec<RuntimeStats>,
}

impl Runtimes {
    /// Build a collection from per-test results.
    ///
    /// Entries are sorted ascending by `total` with a stable sort, so
    /// ties keep the order they were passed in.
    pub fn from_entries(mut entries: Vec<RuntimeStats>) -> Self {
        entries.sort_by_key(|stats| stats.total);
        Self { entries }
    }

    /// Number of tests in the collection.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the collection holds no results.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate results ascending by total runtime.
    pub fn iter(&self) -> std::slice::Iter<'_, RuntimeStats> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a Runtimes {
    type Item = &'a RuntimeStats;
    type IntoIter = std::slice::Iter<'a, RuntimeStats>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
