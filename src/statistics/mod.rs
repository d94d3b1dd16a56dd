//! Statistical summaries for streaming data
//!
//! This module provides the single-pass statistics core: [`RunningStats`]
//! holds the O(1)-memory running moments, and [`Accumulator`] layers
//! textual ingestion and sample retention on top of it so a finished
//! stream can be binned into a histogram report.
//!
//! # Example
//!
//! ```
//! use streamhist::statistics::Accumulator;
//!
//! let mut acc = Accumulator::new();
//!
//! for line in ["12.0", "15.5", "13.2"] {
//!     acc.ingest(line);
//! }
//!
//! let report = acc.finalize();
//! assert_eq!(report.count, 3);
//! ```

mod accumulator;
mod moments;

pub use accumulator::Accumulator;
pub use moments::RunningStats;
