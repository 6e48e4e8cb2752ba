//! Exact-Value Duration Histogram
//!
//! Buckets are the observed `Duration` values themselves. There is no
//! binning and no quantization, so bucket cardinality tracks the clock's
//! effective resolution and the system's jitter rather than the sample
//! count: on a coarse timer many iterations collapse into a handful of
//! buckets, on a fine one the table can grow nearly as large as the
//! number of samples.

use std::collections::BTreeMap;
use std::time::Duration;

/// Frequency table of observed durations, ordered ascending by value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Histogram {
    buckets: BTreeMap<Duration, u64>,
}

impl Histogram {
    /// Create an empty histogram.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one occurrence of `sample`.
    pub fn record(&mut self, sample: Duration) {
        *self.buckets.entry(sample).or_insert(0) += 1;
    }

    /// Number of distinct duration values observed.
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    /// Whether no sample has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Occurrences recorded for an exact duration value.
    pub fn occurrences(&self, sample: Duration) -> u64 {
        self.buckets.get(&sample).copied().unwrap_or(0)
    }

    /// Total occurrences across all buckets; equals the number of
    /// `record` calls.
    pub fn total_count(&self) -> u64 {
        self.buckets.values().sum()
    }

    /// Iterate `(duration, occurrences)` pairs ascending by duration.
    pub fn iter(&self) -> impl Iterator<Item = (Duration, u64)> + '_ {
        self.buckets.iter().map(|(duration, n)| (*duration, *n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_histogram() {
        let h = Histogram::new();
        assert!(h.is_empty());
        assert_eq!(h.len(), 0);
        assert_eq!(h.total_count(), 0);
        assert_eq!(h.occurrences(Duration::from_nanos(1)), 0);
    }

    #[test]
    fn test_duplicate_samples_share_a_bucket() {
        let mut h = Histogram::new();
        h.record(Duration::from_nanos(250));
        h.record(Duration::from_nanos(250));
        h.record(Duration::from_nanos(250));
        h.record(Duration::from_nanos(251));

        assert_eq!(h.len(), 2);
        assert_eq!(h.total_count(), 4);
        assert_eq!(h.occurrences(Duration::from_nanos(250)), 3);
        assert_eq!(h.occurrences(Duration::from_nanos(251)), 1);
    }

    #[test]
    fn test_iteration_is_ascending() {
        let mut h = Histogram::new();
        for nanos in [900, 5, 42, 5, 10_000, 42] {
            h.record(Duration::from_nanos(nanos));
        }

        let pairs: Vec<(Duration, u64)> = h.iter().collect();
        assert_eq!(
            pairs,
            vec![
                (Duration::from_nanos(5), 2),
                (Duration::from_nanos(42), 2),
                (Duration::from_nanos(900), 1),
                (Duration::from_nanos(10_000), 1),
            ]
        );
    }

    #[test]
    fn test_zero_duration_is_a_valid_bucket() {
        let mut h = Histogram::new();
        h.record(Duration::ZERO);
        h.record(Duration::ZERO);
        assert_eq!(h.occurrences(Duration::ZERO), 2);
        assert_eq!(h.total_count(), 2);
    }
}
