//! Display Time Units
//!
//! A unit is a read-time scale factor and nothing more. Totals divide
//! by the unit with integer truncation, mirroring a duration cast to a
//! coarser resolution; derived statistics divide as floats, variance by
//! the factor squared since it carries squared units.

use std::str::FromStr;

/// Display unit for rendered durations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeUnit {
    /// Nanoseconds, the native measurement resolution.
    Nanos,
    /// Microseconds, the default for tables and exports.
    #[default]
    Micros,
    /// Milliseconds.
    Millis,
    /// Seconds.
    Secs,
}

impl TimeUnit {
    /// Nanoseconds per display unit, as an integer.
    pub fn nanos_per_unit(self) -> u128 {
        match self {
            TimeUnit::Nanos => 1,
            TimeUnit::Micros => 1_000,
            TimeUnit::Millis => 1_000_000,
            TimeUnit::Secs => 1_000_000_000,
        }
    }

    /// Nanoseconds per display unit, as a float scale factor.
    pub fn ratio(self) -> f64 {
        self.nanos_per_unit() as f64
    }

    /// Short label for captions and log lines.
    pub fn label(self) -> &'static str {
        match self {
            TimeUnit::Nanos => "ns",
            TimeUnit::Micros => "µs",
            TimeUnit::Millis => "ms",
            TimeUnit::Secs => "s",
        }
    }
}

impl FromStr for TimeUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ns" | "nanos" | "nanoseconds" => Ok(TimeUnit::Nanos),
            "us" | "µs" | "micros" | "microseconds" => Ok(TimeUnit::Micros),
            "ms" | "millis" | "milliseconds" => Ok(TimeUnit::Millis),
            "s" | "sec" | "secs" | "seconds" => Ok(TimeUnit::Secs),
            other => Err(format!("unknown time unit: {}", other)),
        }
    }
}
