//! Console Tables
//!
//! Fixed-width right-aligned tables, one row per test, fastest first.
//!
//! The runtime table carries the aggregate columns:
//!
//! ```text
//!                 runtime       min       max      mean       var       dev
//!      fold          2041      1.98      2.43      2.04      0.01      0.08
//! ```
//!
//! The comparison table carries one column per test, with `--` marking
//! the self cell:
//!
//! ```text
//!                 runtime      fold       sum
//!      fold          2041        --    12.50%
//!       sum          2333   -14.29%        --
//! ```
//!
//! Every column shares one width: the configured minimum, widened to
//! fit the longest test name. Totals render as integers truncated to
//! the display unit; the other statistics render at the configured
//! precision.

use crate::units::TimeUnit;
use lapbench_core::{Comparisons, Runtimes};
use std::time::Duration;

/// Per-call configuration for the console tables.
#[derive(Debug, Clone)]
pub struct FormatOptions {
    /// Decimal places for derived statistics and percentages.
    pub precision: usize,
    /// Minimum column width in characters; columns grow past this to
    /// fit the longest test name.
    pub min_width: usize,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            precision: 2,
            min_width: 10,
        }
    }
}

fn column_width<'a>(names: impl Iterator<Item = &'a str>, min_width: usize) -> usize {
    let mut width = min_width;
    for name in names {
        if name.len() > width {
            width = name.len() + 1;
        }
    }
    width
}

fn scaled_total(total: Duration, unit: TimeUnit) -> u128 {
    total.as_nanos() / unit.nanos_per_unit()
}

/// Render the aggregate table for a run, fastest test first.
///
/// Returns the table as a `String` ending in a newline; printing it is
/// the caller's business. An empty collection renders the header line
/// alone.
pub fn format_runtimes(runtimes: &Runtimes, unit: TimeUnit, opts: &FormatOptions) -> String {
    let width = column_width(runtimes.iter().map(|r| r.name.as_str()), opts.min_width);
    let prec = opts.precision;
    let ratio = unit.ratio();

    let mut out = String::new();
    out.push_str(&format!("{:>width$}", "", width = width));
    for heading in ["runtime", "min", "max", "mean", "var", "dev"] {
        out.push_str(&format!("{:>width$}", heading, width = width));
    }
    out.push('\n');

    for stats in runtimes {
        out.push_str(&format!("{:>width$}", stats.name, width = width));
        out.push_str(&format!(
            "{:>width$}",
            scaled_total(stats.total, unit),
            width = width
        ));
        for value in [
            stats.min.as_nanos() as f64 / ratio,
            stats.max.as_nanos() as f64 / ratio,
            stats.mean / ratio,
            stats.variance / (ratio * ratio),
            stats.stddev / ratio,
        ] {
            out.push_str(&format!("{:>width$.prec$}", value, width = width, prec = prec));
        }
        out.push('\n');
    }
    out
}

/// Render the all-pairs comparison table, fastest test first.
///
/// Cell `(row, col)` holds the percentage of the column test's runtime
/// that the row test saved (positive) or exceeded (negative).
pub fn format_comparisons(
    comparisons: &Comparisons,
    unit: TimeUnit,
    opts: &FormatOptions,
) -> String {
    let width = column_width(comparisons.iter().map(|c| c.name.as_str()), opts.min_width);
    let prec = opts.precision;

    let mut out = String::new();
    out.push_str(&format!("{:>width$}", "", width = width));
    out.push_str(&format!("{:>width$}", "runtime", width = width));
    for entry in comparisons {
        out.push_str(&format!("{:>width$}", entry.name, width = width));
    }
    out.push('\n');

    for entry in comparisons {
        out.push_str(&format!("{:>width$}", entry.name, width = width));
        out.push_str(&format!(
            "{:>width$}",
            scaled_total(entry.total, unit),
            width = width
        ));
        for &pct in &entry.pct {
            if pct == 0.0 {
                // The self sentinel; a tie between equal totals lands
                // here as well.
                out.push_str(&format!("{:>width$}", "--", width = width));
            } else {
                out.push_str(&format!(
                    "{:>width$.prec$}%",
                    pct,
                    width = width.saturating_sub(1),
                    prec = prec
                ));
            }
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use lapbench_core::{compare, Aggregator, RuntimeStats};

    fn synthetic(name: &str, sample_nanos: u64, count: u64) -> RuntimeStats {
        let mut agg = Aggregator::new();
        for _ in 0..count {
            agg.record(Duration::from_nanos(sample_nanos));
        }
        agg.finish(name)
    }

    #[test]
    fn test_runtime_table_shape() {
        let runtimes = Runtimes::from_entries(vec![
            synthetic("alpha", 1_000, 2),
            synthetic("beta", 3_000, 2),
        ]);
        let table = format_runtimes(&runtimes, TimeUnit::Micros, &FormatOptions::default());

        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].len(), 7 * 10);
        for heading in ["runtime", "min", "max", "mean", "var", "dev"] {
            assert!(lines[0].contains(heading));
        }
        assert!(lines[1].contains("alpha"));
        assert!(lines[2].contains("beta"));
    }

    #[test]
    fn test_runtime_values_are_scaled_and_truncated() {
        // Two 1.5us iterations: 3000ns total truncates to 3us, the
        // mean stays fractional.
        let runtimes = Runtimes::from_entries(vec![synthetic("only", 1_500, 2)]);
        let table = format_runtimes(&runtimes, TimeUnit::Micros, &FormatOptions::default());

        let row = table.lines().nth(1).unwrap();
        let cells: Vec<&str> = row.split_whitespace().collect();
        assert_eq!(cells, vec!["only", "3", "1.50", "1.50", "1.50", "0.00", "0.00"]);
    }

    #[test]
    fn test_long_names_widen_every_column() {
        let runtimes = Runtimes::from_entries(vec![synthetic(
            "a_rather_long_test_name",
            1_000,
            1,
        )]);
        let table = format_runtimes(&runtimes, TimeUnit::Micros, &FormatOptions::default());

        let width = "a_rather_long_test_name".len() + 1;
        for line in table.lines() {
            assert_eq!(line.len(), 7 * width);
        }
    }

    #[test]
    fn test_nanos_shows_native_resolution() {
        let runtimes = Runtimes::from_entries(vec![synthetic("ns", 1_500, 2)]);
        let table = format_runtimes(&runtimes, TimeUnit::Nanos, &FormatOptions::default());

        let row = table.lines().nth(1).unwrap();
        let cells: Vec<&str> = row.split_whitespace().collect();
        assert_eq!(cells[1], "3000");
        assert_eq!(cells[2], "1500.00");
    }

    #[test]
    fn test_comparison_table_diagonal_and_percentages() {
        let runtimes = Runtimes::from_entries(vec![
            synthetic("a", 10, 10),
            synthetic("b", 20, 10),
        ]);
        let comparisons = compare(&runtimes).unwrap();
        let table = format_comparisons(&comparisons, TimeUnit::Nanos, &FormatOptions::default());

        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("runtime"));
        assert!(lines[0].contains('a'));
        assert!(lines[0].contains('b'));

        let a_cells: Vec<&str> = lines[1].split_whitespace().collect();
        assert_eq!(a_cells, vec!["a", "100", "--", "50.00%"]);
        let b_cells: Vec<&str> = lines[2].split_whitespace().collect();
        assert_eq!(b_cells, vec!["b", "200", "-100.00%", "--"]);
    }

    #[test]
    fn test_equal_totals_render_as_placeholder() {
        let runtimes = Runtimes::from_entries(vec![
            synthetic("x", 10, 10),
            synthetic("y", 10, 10),
        ]);
        let comparisons = compare(&runtimes).unwrap();
        let table = format_comparisons(&comparisons, TimeUnit::Nanos, &FormatOptions::default());

        let x_cells: Vec<&str> = table.lines().nth(1).unwrap().split_whitespace().collect();
        assert_eq!(x_cells, vec!["x", "100", "--", "--"]);
    }

    #[test]
    fn test_empty_collections_render_headers_only() {
        let runtimes = Runtimes::from_entries(Vec::new());
        let table = format_runtimes(&runtimes, TimeUnit::Micros, &FormatOptions::default());
        assert_eq!(table.lines().count(), 1);

        let comparisons = compare(&runtimes).unwrap();
        let table = format_comparisons(&comparisons, TimeUnit::Micros, &FormatOptions::default());
        assert_eq!(table.lines().count(), 1);
    }
}
