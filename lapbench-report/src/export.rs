//! File Export
//!
//! One pair of files per test under a caller-supplied base path. For a
//! test named `t`, `{base}-t.txt` holds a single delimited summary line
//! (total, min, max, mean, variance, deviation in the chosen display
//! unit) and `{base}-t-dist.txt` holds the runtime distribution, one
//! `nanoseconds<delim>count` line per bucket ascending. Distribution
//! keys always stay at native clock resolution so the raw data survives
//! whatever display unit the summary used.
//!
//! Writing stops at the first failure; files already written stay on
//! disk. There is no rollback.

use crate::units::TimeUnit;
use lapbench_core::Runtimes;
use std::path::{Path, PathBuf};

/// Per-call configuration for file export.
#[derive(Debug, Clone)]
pub struct ExportOptions {
    /// Field delimiter for both file kinds.
    pub delimiter: char,
    /// Decimal places for derived statistics in the summary line.
    pub precision: usize,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            delimiter: '\t',
            precision: 5,
        }
    }
}

/// Errors from writing export files.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// A summary or distribution file could not be written.
    #[error("failed to write {path}: {source}")]
    Io {
        /// The file that failed, rendered into the message.
        path: String,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

impl ExportError {
    fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.display().to_string(),
            source,
        }
    }
}

/// Write per-test summary and distribution files under `base`.
///
/// `base` is a path prefix, not a directory: results for a test named
/// `t` land in `{base}-t.txt` and `{base}-t-dist.txt` next to whatever
/// `base` points into. Returns the first failure; earlier files are
/// left in place.
pub fn write_results(
    base: impl AsRef<Path>,
    runtimes: &Runtimes,
    unit: TimeUnit,
    opts: &ExportOptions,
) -> Result<(), ExportError> {
    let base = base.as_ref();
    let ratio = unit.ratio();
    let delim = opts.delimiter;
    let prec = opts.precision;

    for stats in runtimes {
        let summary_path = suffixed(base, &format!("-{}.txt", stats.name));
        let mut line = format!("{}", stats.total.as_nanos() / unit.nanos_per_unit());
        for value in [
            stats.min.as_nanos() as f64 / ratio,
            stats.max.as_nanos() as f64 / ratio,
            stats.mean / ratio,
            stats.variance / (ratio * ratio),
            stats.stddev / ratio,
        ] {
            line.push_str(&format!("{}{:.prec$}", delim, value, prec = prec));
        }
        line.push('\n');
        std::fs::write(&summary_path, line)
            .map_err(|source| ExportError::io(&summary_path, source))?;

        let dist_path = suffixed(base, &format!("-{}-dist.txt", stats.name));
        let mut body = String::new();
        for (duration, occurrences) in stats.histogram.iter() {
            body.push_str(&format!(
                "{}{}{}\n",
                duration.as_nanos(),
                delim,
                occurrences
            ));
        }
        std::fs::write(&dist_path, body).map_err(|source| ExportError::io(&dist_path, source))?;
    }
    Ok(())
}

/// Append a suffix to the final path component without treating it as
/// an extension.
fn suffixed(base: &Path, suffix: &str) -> PathBuf {
    let mut path = base.as_os_str().to_os_string();
    path.push(suffix);
    PathBuf::from(path)
}
