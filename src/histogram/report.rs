//! Final report rendering

use std::fmt;

use crate::statistics::RunningStats;

use super::Histogram;

const BAR_GLYPH: &str = "∎";

/// Summary statistics and histogram for a finished stream.
///
/// `Display` renders the report in its wire format: a tab-separated
/// summary block, the bar scale line, then one row per bin with a bar of
/// `count / scale` glyphs.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Report {
    /// Number of accepted samples
    pub count: u64,
    /// Arithmetic mean
    pub mean: f64,
    /// Smallest sample
    pub min: f64,
    /// Largest sample
    pub max: f64,
    /// Sum of squared deviations from the mean
    pub sum_sq_dev: f64,
    /// Population variance
    pub variance: f64,
    /// Population standard deviation
    pub stddev: f64,
    /// Binned view of the samples
    pub histogram: Histogram,
}

impl Report {
    /// Build a report from finished running moments and a histogram
    pub fn from_stats(stats: &RunningStats, histogram: Histogram) -> Self {
        Self {
            count: stats.len(),
            mean: stats.mean(),
            min: stats.min().unwrap_or(0.0),
            max: stats.max().unwrap_or(0.0),
            sum_sq_dev: stats.sum_sq_dev(),
            variance: stats.variance(),
            stddev: stats.stddev(),
            histogram,
        }
    }

    /// The defined report for an empty stream: all fields zero, no bins
    pub fn empty() -> Self {
        Self {
            count: 0,
            mean: 0.0,
            min: 0.0,
            max: 0.0,
            sum_sq_dev: 0.0,
            variance: 0.0,
            stddev: 0.0,
            histogram: Histogram::empty(),
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "count:\t{}", self.count)?;
        writeln!(f, "mean:\t{:.6}", self.mean)?;
        writeln!(f, "max:\t{:.6}", self.max)?;
        writeln!(f, "min:\t{:.6}", self.min)?;
        writeln!(f, "ss:\t{:.6}", self.sum_sq_dev)?;
        writeln!(f, "var:\t{:.6}", self.variance)?;
        writeln!(f, "sd:\t{:.6}", self.stddev)?;
        writeln!(f, "{}:\t{}", BAR_GLYPH, self.histogram.scale())?;

        let scale = self.histogram.scale();
        for bin in self.histogram.bins() {
            writeln!(
                f,
                "{:10.4} - {:10.4} [{:6}]: {}",
                bin.lower,
                bin.upper,
                bin.count,
                BAR_GLYPH.repeat((bin.count / scale) as usize)
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::statistics::Accumulator;

    fn report_for(lines: &[&str]) -> Report {
        let mut acc = Accumulator::new();
        for line in lines {
            acc.ingest(line);
        }
        acc.finalize()
    }

    #[test]
    fn test_summary_block_exact() {
        let report = report_for(&["1", "2", "3", "4", "5"]);
        let rendered = report.to_string();

        let expected_summary = "count:\t5\n\
                                mean:\t3.000000\n\
                                max:\t5.000000\n\
                                min:\t1.000000\n\
                                ss:\t10.000000\n\
                                var:\t2.000000\n\
                                sd:\t1.414214\n\
                                ∎:\t1\n";
        assert!(
            rendered.starts_with(expected_summary),
            "unexpected summary:\n{}",
            rendered
        );
    }

    #[test]
    fn test_bin_row_format() {
        let report = report_for(&["1", "2", "3", "4", "5"]);
        let rendered = report.to_string();
        let rows: Vec<&str> = rendered.lines().skip(8).collect();

        assert_eq!(rows.len(), 10);
        assert_eq!(rows[0], "    1.0000 -     1.4000 [     1]: ∎");
        // Empty bins still end with the separator, bar omitted.
        assert_eq!(rows[1], "    1.4000 -     1.8000 [     0]: ");
        assert_eq!(rows[9], "    4.6000 -     5.0000 [     1]: ∎");
    }

    #[test]
    fn test_bar_scaling() {
        let lines: Vec<String> = (0..150).map(|_| "7".to_string()).collect();
        let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
        let report = report_for(&refs);

        assert_eq!(report.histogram.scale(), 3);
        let rendered = report.to_string();
        let row = rendered.lines().last().unwrap();
        assert_eq!(row.matches('∎').count(), 50);
    }

    #[test]
    fn test_empty_report() {
        let rendered = Report::empty().to_string();

        assert_eq!(
            rendered,
            "count:\t0\n\
             mean:\t0.000000\n\
             max:\t0.000000\n\
             min:\t0.000000\n\
             ss:\t0.000000\n\
             var:\t0.000000\n\
             sd:\t0.000000\n\
             ∎:\t1\n"
        );
    }

    #[test]
    fn test_negative_bounds_width() {
        let report = report_for(&["-100", "0"]);
        let rendered = report.to_string();
        let first_row = rendered.lines().nth(8).unwrap();

        assert_eq!(first_row, " -100.0000 -   -90.0000 [     1]: ∎");
    }
}
