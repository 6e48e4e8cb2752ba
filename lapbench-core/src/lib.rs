#![warn(missing_docs)]

//! Lapbench Core - Measurement Engine
//!
//! The timing side of lapbench:
//! - [`Test`]: a named zero-argument closure to measure
//! - [`time`]: the sequential timing loop, one aggregate per test
//! - [`Aggregator`]: the streaming statistics behind each aggregate
//! - [`compare`]: the all-pairs relative-runtime percentage matrix
//!
//! Measurement uses `std::time::Instant`, the platform's monotonic
//! clock, at its native resolution. Unit conversion, rounding, and
//! layout all belong to the reporting layer; nothing here ever scales
//! a duration for display.

mod compare;
mod results;
mod runner;
mod unit;

pub use compare::{compare, CompareError, Comparison, Comparisons};
pub use results::{Runtimes, RuntimeStats};
pub use runner::{time, Aggregator};
pub use unit::Test;
