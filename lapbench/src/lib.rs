#![warn(missing_docs)]

//! # Lapbench
//!
//! Micro-benchmarking for competing implementations of one operation:
//! run each named closure a fixed number of times, stream every
//! per-iteration wall-clock duration into stable aggregates, and read
//! the outcome as a fastest-first table plus an all-pairs percentage
//! matrix.
//!
//! ## Features
//!
//! - **Streaming statistics**: single-pass Welford mean and variance,
//!   O(1) memory per test no matter the iteration count
//! - **Exact distributions**: histograms keyed on exact durations at
//!   native clock resolution, never binned
//! - **Pairwise comparison**: every test against every other, keyed on
//!   total runtime
//! - **Raw observations**: no warm-up exclusion, no outlier rejection;
//!   interpreting the numbers stays with you
//!
//! ## Quick Start
//!
//! ```
//! use lapbench::prelude::*;
//!
//! let data: Vec<u64> = (0..512).collect();
//! let (a, b) = (data.clone(), data);
//!
//! let runtimes = lapbench::time(
//!     1_000,
//!     vec![
//!         Test::new("sum", move || {
//!             std::hint::black_box(a.iter().sum::<u64>());
//!         }),
//!         Test::new("fold", move || {
//!             std::hint::black_box(b.iter().fold(0u64, |acc, x| acc + x));
//!         }),
//!     ],
//! );
//!
//! let comparisons = lapbench::compare(&runtimes)?;
//! print!(
//!     "{}",
//!     format_runtimes(&runtimes, TimeUnit::Micros, &FormatOptions::default())
//! );
//! print!(
//!     "{}",
//!     format_comparisons(&comparisons, TimeUnit::Micros, &FormatOptions::default())
//! );
//! # Ok::<(), lapbench::CompareError>(())
//! ```

pub use lapbench_core::{
    compare, time, Aggregator, CompareError, Comparison, Comparisons, Runtimes, RuntimeStats,
    Test,
};
pub use lapbench_report::{
    format_comparisons, format_runtimes, write_results, ExportError, ExportOptions,
    FormatOptions, TimeUnit,
};
pub use lapbench_stats::{Histogram, Welford};

/// Common imports for writing benchmarks.
pub mod prelude {
    pub use crate::{
        compare, format_comparisons, format_runtimes, time, write_results, ExportOptions,
        FormatOptions, Test, TimeUnit,
    };
}
