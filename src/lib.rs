//! # Streamhist
//!
//! Streaming summary statistics and an ASCII histogram for newline-delimited
//! numbers.
//!
//! Streamhist reads one floating-point value per line, folds the stream into
//! numerically stable single-pass statistics (count, mean, min, max, sum of
//! squared deviations, variance, standard deviation), and renders a fixed
//! ten-bin histogram of the distribution once the stream ends. The binary
//! pipes stdin straight through [`pipeline::run`]; the library exposes each
//! stage for reuse.
//!
//! ## Quick Start
//!
//! ```rust
//! use streamhist::Accumulator;
//!
//! let mut acc = Accumulator::new();
//! for line in ["12.0", "15.5", "13.2"] {
//!     acc.ingest(line);
//! }
//!
//! let report = acc.finalize();
//! assert_eq!(report.count, 3);
//! print!("{report}");
//! ```
//!
//! Or drive the whole tool in-process:
//!
//! ```rust
//! let input: &[u8] = b"1\n2\n3\n";
//! let mut out = Vec::new();
//! streamhist::pipeline::run(input, &mut out).unwrap();
//! assert!(out.starts_with(b"count:\t3\n"));
//! ```
//!
//! ## Behavior notes
//!
//! - Lines are handed to the parser untouched; malformed lines (including
//!   whitespace-padded ones) and NaN values are logged at `warn` level and
//!   skipped.
//! - An empty stream produces a defined all-zero report instead of NaN.
//! - A zero-width value range collapses the histogram to a single bin.
//!
//! ## Feature Flags
//!
//! - `serde`: enable serialization of the report types

pub mod histogram;
pub mod pipeline;
pub mod reader;
pub mod statistics;

pub mod prelude {
    pub use crate::histogram::{Bin, Histogram, Report};
    pub use crate::reader::LineReader;
    pub use crate::statistics::{Accumulator, RunningStats};
}

pub use histogram::{Bin, Histogram, Report};
pub use statistics::{Accumulator, RunningStats};
