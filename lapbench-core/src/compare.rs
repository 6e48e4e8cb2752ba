//! Pairwise Runtime Comparison
//!
//! For each ordered pair of results the matrix holds
//! `(total_other - total_self) / total_other * 100`: the share of the
//! other test's total runtime that this test saved (positive) or
//! exceeded (negative). The denominator is always the other entry's
//! total, so `pct(a, b)` and `pct(b, a)` are not negatives of each
//! other; each cell reads against its column's own runtime. Diagonal
//! cells hold a fixed `0.0` sentinel assigned by position, not a
//! computed near-zero difference.

use crate::results::Runtimes;
use std::time::Duration;

/// All-pairs percentage differences for one test.
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    /// Test name, copied from the aggregated result.
    pub name: String,
    /// Total runtime, copied from the aggregated result.
    pub total: Duration,
    /// One signed percentage per test, in collection order; exactly
    /// `0.0` at this entry's own position.
    pub pct: Vec<f64>,
}

/// Comparison entries, ordered ascending by total runtime like the
/// collection they were derived from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Comparisons {
    entries: Vec<Comparison>,
}

impl Comparisons {
    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there are no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in collection order.
    pub fn iter(&self) -> std::slice::Iter<'_, Comparison> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a Comparisons {
    type Item = &'a Comparison;
    type IntoIter = std::slice::Iter<'a, Comparison>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Errors from deriving a comparison matrix.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CompareError {
    /// A result's total runtime was exactly zero, which leaves the
    /// percentage formula undefined. Typically a `count == 0` run, or
    /// an action faster than the clock's resolution on every iteration.
    #[error("test '{name}' has a total runtime of zero; percentages are undefined")]
    ZeroTotal {
        /// Name of the offending test.
        name: String,
    },
}

/// Derive the all-pairs percentage matrix from aggregated results.
///
/// Rows and columns both follow the input's ascending-by-total order,
/// so `pct[i]` of every entry lines up with entry `i` across the whole
/// matrix. The derivation reads the totals and nothing else: comparing
/// the same collection twice yields identical output.
pub fn compare(runtimes: &Runtimes) -> Result<Comparisons, CompareError> {
    for stats in runtimes {
        if stats.total == Duration::ZERO {
            return Err(CompareError::ZeroTotal {
                name: stats.name.clone(),
            });
        }
    }

    let entries = runtimes
        .iter()
        .enumerate()
        .map(|(row, stats)| {
            let own = stats.total.as_nanos() as f64;
            let pct = runtimes
                .iter()
                .enumerate()
                .map(|(col, other)| {
                    if row == col {
                        0.0
                    } else {
                        let theirs = other.total.as_nanos() as f64;
                        (theirs - own) / theirs * 100.0
                    }
                })
                .collect();
            Comparison {
                name: stats.name.clone(),
                total: stats.total,
                pct,
            }
        })
        .collect();

    Ok(Comparisons { entries })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::results::RuntimeStats;
    use crate::runner::Aggregator;

    fn synthetic(name: &str, sample_nanos: u64, count: u64) -> RuntimeStats {
        let mut agg = Aggregator::new();
        for _ in 0..count {
            agg.record(Duration::from_nanos(sample_nanos));
        }
        agg.finish(name)
    }

    #[test]
    fn test_diagonal_is_exactly_zero() {
        let runtimes = Runtimes::from_entries(vec![
            synthetic("a", 10, 10),
            synthetic("b", 20, 10),
            synthetic("c", 5, 10),
        ]);
        let comparisons = compare(&runtimes).unwrap();

        for (i, entry) in comparisons.iter().enumerate() {
            assert_eq!(entry.pct[i], 0.0);
        }
    }

    #[test]
    fn test_percentages_read_against_the_column() {
        // a totals 100ns, b totals 200ns: a saves half of b's runtime,
        // b exceeds a's runtime by all of it.
        let runtimes = Runtimes::from_entries(vec![
            synthetic("a", 10, 10),
            synthetic("b", 20, 10),
        ]);
        let comparisons = compare(&runtimes).unwrap();

        let a = comparisons.iter().next().unwrap();
        let b = comparisons.iter().nth(1).unwrap();
        assert_eq!(a.name, "a");
        assert_eq!(b.name, "b");
        assert!((a.pct[1] - 50.0).abs() < 1e-9);
        assert!((b.pct[0] - -100.0).abs() < 1e-9);
    }

    #[test]
    fn test_entries_follow_runtime_order() {
        let runtimes = Runtimes::from_entries(vec![
            synthetic("a", 10, 10),
            synthetic("b", 20, 10),
            synthetic("c", 5, 10),
        ]);
        let comparisons = compare(&runtimes).unwrap();

        let names: Vec<&str> = comparisons.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["c", "a", "b"]);
        for entry in &comparisons {
            assert_eq!(entry.pct.len(), 3);
        }
    }

    #[test]
    fn test_zero_total_is_rejected() {
        let runtimes = Runtimes::from_entries(vec![
            synthetic("ok", 10, 10),
            Aggregator::new().finish("empty"),
        ]);

        let err = compare(&runtimes).unwrap_err();
        assert_eq!(
            err,
            CompareError::ZeroTotal {
                name: "empty".into()
            }
        );
    }

    #[test]
    fn test_empty_collection_compares_to_empty() {
        let runtimes = Runtimes::from_entries(Vec::new());
        let comparisons = compare(&runtimes).unwrap();
        assert!(comparisons.is_empty());
    }

    #[test]
    fn test_comparison_is_repeatable() {
        let runtimes = Runtimes::from_entries(vec![
            synthetic("a", 17, 13),
            synthetic("b", 23, 13),
            synthetic("c", 11, 13),
        ]);

        let first = compare(&runtimes).unwrap();
        let second = compare(&runtimes).unwrap();
        assert_eq!(first, second);
    }
}
