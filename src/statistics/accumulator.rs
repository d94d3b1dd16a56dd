//! Textual ingestion and finalization
//!
//! [`Accumulator`] accepts one input line at a time, parses it as an
//! `f64`, and folds accepted values into [`RunningStats`] while retaining
//! every sample for exact binning at the end of the stream.

use log::warn;

use crate::histogram::{Histogram, Report};
use crate::statistics::RunningStats;

/// Streaming accumulator over textual input lines.
///
/// Lines are handed to the parser untouched, so surrounding whitespace is
/// a parse failure. Lines that fail to parse, and lines parsing to NaN,
/// are logged at `warn` level and skipped; they do not perturb the
/// aggregates.
///
/// [`finalize`](Self::finalize) consumes the accumulator, so no further
/// ingestion is possible once the report has been produced.
///
/// # Example
///
/// ```
/// use streamhist::Accumulator;
///
/// let mut acc = Accumulator::new();
/// for line in ["1", "2", "oops", "3"] {
///     acc.ingest(line);
/// }
///
/// assert_eq!(acc.len(), 3);
/// let report = acc.finalize();
/// assert_eq!(report.count, 3);
/// assert!((report.mean - 2.0).abs() < 1e-9);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Accumulator {
    stats: RunningStats,
    samples: Vec<f64>,
}

impl Accumulator {
    /// Create a new empty accumulator
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse one input line and fold it into the aggregates
    ///
    /// Malformed lines and NaN values are skipped with a warning.
    pub fn ingest(&mut self, line: &str) {
        let value = match line.parse::<f64>() {
            Ok(value) => value,
            Err(err) => {
                warn!("skipping unparseable line {:?}: {}", line, err);
                return;
            }
        };
        if value.is_nan() {
            warn!("skipping NaN line {:?}", line);
            return;
        }
        self.add(value);
    }

    /// Fold an already-parsed value into the aggregates
    ///
    /// NaN values are ignored, keeping the retained samples in step with
    /// the running moments.
    pub fn add(&mut self, value: f64) {
        if value.is_nan() {
            return;
        }
        self.samples.push(value);
        self.stats.add(value);
    }

    /// The running moments accumulated so far
    pub fn stats(&self) -> &RunningStats {
        &self.stats
    }

    /// Number of accepted samples
    pub fn len(&self) -> u64 {
        self.stats.len()
    }

    /// Check if no samples have been accepted
    pub fn is_empty(&self) -> bool {
        self.stats.is_empty()
    }

    /// Sort the retained samples, bin them, and produce the final report
    ///
    /// With no accepted samples this returns the defined zero report
    /// rather than dividing by zero.
    pub fn finalize(self) -> Report {
        let Self { stats, mut samples } = self;

        if stats.is_empty() {
            return Report::empty();
        }

        samples.sort_by(f64::total_cmp);
        let min = stats.min().unwrap_or(0.0);
        let max = stats.max().unwrap_or(0.0);
        let histogram = Histogram::from_sorted(&samples, min, max);

        Report::from_stats(&stats, histogram)
    }
}
