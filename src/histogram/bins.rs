//! Equal-width binning and bar scaling
//!
//! Bins are derived once, from the fully collected and sorted samples;
//! they do not exist while the stream is still being consumed.

/// Number of equal-width bins in a rendered histogram.
pub const BIN_COUNT: usize = 10;

/// Rendered bar width the scale factor aims to stay under, in glyphs.
pub const MAX_BAR_WIDTH: u64 = 50;

/// One histogram interval.
///
/// Covers `[lower, upper)`, except the last bin of a histogram which also
/// includes its upper bound so the maximum sample is counted.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Bin {
    /// Inclusive lower bound
    pub lower: f64,
    /// Upper bound
    pub upper: f64,
    /// Number of samples falling in the interval
    pub count: u64,
}

/// Binned view of a finished stream: the bins plus the bar scale factor.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Histogram {
    bins: Vec<Bin>,
    scale: u64,
}

impl Histogram {
    /// Bin ascending-sorted samples into [`BIN_COUNT`] equal-width
    /// intervals spanning `[min, max]`.
    ///
    /// A zero-width or non-finite range (all samples identical, or an
    /// infinite sample) collapses to a single bin holding every sample.
    /// Counts are taken by advancing an index through the sorted slice,
    /// with the last bin absorbing the remainder, so no sample is lost to
    /// boundary rounding and bin counts always sum to the sample count.
    pub fn from_sorted(samples: &[f64], min: f64, max: f64) -> Self {
        if samples.is_empty() {
            return Self::empty();
        }

        let width = (max - min) / BIN_COUNT as f64;
        let mut bins = Vec::with_capacity(BIN_COUNT);

        if width == 0.0 || !width.is_finite() {
            bins.push(Bin {
                lower: min,
                upper: max,
                count: samples.len() as u64,
            });
        } else {
            let mut idx = 0;
            for i in 0..BIN_COUNT {
                let lower = min + width * i as f64;
                // Pin the final boundary to max itself; min + width * 10
                // can miss it by an ulp.
                let upper = if i == BIN_COUNT - 1 {
                    max
                } else {
                    min + width * (i + 1) as f64
                };
                let start = idx;
                if i == BIN_COUNT - 1 {
                    idx = samples.len();
                } else {
                    while idx < samples.len() && samples[idx] < upper {
                        idx += 1;
                    }
                }
                bins.push(Bin {
                    lower,
                    upper,
                    count: (idx - start) as u64,
                });
            }
        }

        let largest = bins.iter().map(|bin| bin.count).max().unwrap_or(0);
        let scale = (largest / MAX_BAR_WIDTH).max(1);

        Self { bins, scale }
    }

    /// Histogram with no bins, as rendered for an empty stream
    pub fn empty() -> Self {
        Self {
            bins: Vec::new(),
            scale: 1,
        }
    }

    /// The bins, in ascending order
    pub fn bins(&self) -> &[Bin] {
        &self.bins
    }

    /// Divisor applied to bin counts when rendering bars
    ///
    /// Never zero: counts below [`MAX_BAR_WIDTH`] render one glyph per
    /// sample.
    pub fn scale(&self) -> u64 {
        self.scale
    }
}
