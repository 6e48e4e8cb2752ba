#![warn(missing_docs)]

//! Lapbench Report - Console and File Output
//!
//! Renders aggregated results and comparison matrices:
//! - Aligned console tables, returned as `String`s so callers decide
//!   where they go
//! - Delimited per-test summary and distribution files
//!
//! Display units scale values at render time only; the engine measures
//! and the histogram keys at native clock resolution regardless of the
//! unit chosen here. All formatting is configured per call through
//! options structs, never through global state.

mod console;
mod export;
mod units;

pub use console::{format_comparisons, format_runtimes, FormatOptions};
pub use export::{write_results, ExportError, ExportOptions};
pub use units::TimeUnit;
