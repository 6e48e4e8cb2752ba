//! Running Mean and Variance
//!
//! Single-pass formulation: the mean is updated first and the update is
//! then reused for the squared-deviation accumulator, which sidesteps
//! the catastrophic cancellation of the naive `sum(x^2) - n * mean^2`
//! form on long streams of closely spaced samples.

/// Streaming mean/variance accumulator.
///
/// Consumes raw `f64` samples one at a time and keeps only three words
/// of state. Mean and variance agree with the two-pass textbook
/// computation up to floating-point rounding, regardless of how many
/// samples have been folded in.
#[derive(Debug, Clone, Default)]
pub struct Welford {
    count: u64,
    mean: f64,
    m2: f64,
}

impl Welford {
    /// Create an empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one sample into the running state.
    pub fn record(&mut self, sample: f64) {
        self.count += 1;
        if self.count == 1 {
            self.mean = sample;
            self.m2 = 0.0;
        } else {
            let delta = sample - self.mean;
            self.mean += delta / self.count as f64;
            self.m2 += delta * (sample - self.mean);
        }
    }

    /// Number of samples recorded so far.
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Running arithmetic mean; `0.0` before the first sample.
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Sample variance with `n - 1` normalization; exactly `0.0` when
    /// fewer than two samples have been recorded.
    pub fn sample_variance(&self) -> f64 {
        if self.count > 1 {
            self.m2 / (self.count - 1) as f64
        } else {
            0.0
        }
    }

    /// Sample standard deviation, the square root of [`sample_variance`].
    ///
    /// [`sample_variance`]: Welford::sample_variance
    pub fn std_dev(&self) -> f64 {
        self.sample_variance().sqrt()
    }
}
