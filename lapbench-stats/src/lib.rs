#![warn(missing_docs)]

//! Lapbench Statistical Primitives
//!
//! Streaming building blocks for the measurement engine:
//! - Single-pass (Welford) mean and variance, numerically stable over
//!   arbitrarily long sample streams
//! - Exact-value duration histograms with no binning
//!
//! Both types update in O(1) per sample and never buffer raw samples,
//! so a run's memory footprint is independent of its iteration count.

mod histogram;
mod welford;

pub use histogram::Histogram;
pub use welford::Welford;
