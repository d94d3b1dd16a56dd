//! Histogram binning and report rendering
//!
//! Once a stream has been fully consumed, its retained samples are sorted
//! and partitioned into [`BIN_COUNT`] equal-width bins, and the summary
//! statistics plus bins are rendered as a [`Report`].
//!
//! # Example
//!
//! ```
//! use streamhist::histogram::{Histogram, BIN_COUNT};
//!
//! let samples = [1.0, 2.0, 3.0, 4.0, 5.0];
//! let hist = Histogram::from_sorted(&samples, 1.0, 5.0);
//!
//! assert_eq!(hist.bins().len(), BIN_COUNT);
//! assert_eq!(hist.bins().iter().map(|b| b.count).sum::<u64>(), 5);
//! ```

mod bins;
mod report;

pub use bins::{Bin, Histogram, BIN_COUNT, MAX_BAR_WIDTH};
pub use report::Report;
