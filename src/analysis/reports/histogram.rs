//! ASCII duration histograms
//!
//! Bucket semantics: `[range_min, range_max)` with equal widths over the data
//! range; the last bucket is closed so the maximum is always counted. A series
//! whose values are all equal is spread over `[v - 0.5, v + 0.5]`.

use crate::utils::math::{min_max, safe_percentage};
use crate::utils::units::format_duration_range_us;
use serde::Serialize;

/// Longest bar in characters
pub const BAR_WIDTH: usize = 40;

/// Width of the histogram title underline
const TITLE_RULE_WIDTH: usize = 60;

/// One histogram bucket over durations in µs
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistogramBin {
    pub range_min_us: f64,
    pub range_max_us: f64,
    pub count: usize,
    /// Percentage of all values in this bucket
    pub pct_count: f64,
}

/// Equal-width histogram of a duration series
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DurationHistogram {
    pub bins: Vec<HistogramBin>,
}

impl DurationHistogram {
    /// Bucket `values` into `bin_count` equal-width bins
    ///
    /// Returns an empty histogram for an empty series or zero bins.
    pub fn from_durations(values: &[f64], bin_count: usize) -> Self {
        let Some((min, max)) = min_max(values) else {
            return Self { bins: Vec::new() };
        };
        if bin_count == 0 {
            return Self { bins: Vec::new() };
        }

        let (lower, upper) = if min == max {
            (min - 0.5, max + 0.5)
        } else {
            (min, max)
        };
        let width = (upper - lower) / bin_count as f64;

        let mut counts = vec![0usize; bin_count];
        for &value in values {
            let index = (((value - lower) / width) as usize).min(bin_count - 1);
            counts[index] += 1;
        }

        let bins = counts
            .into_iter()
            .enumerate()
            .map(|(i, count)| HistogramBin {
                range_min_us: lower + width * i as f64,
                range_max_us: if i + 1 == bin_count {
                    upper
                } else {
                    lower + width * (i + 1) as f64
                },
                count,
                pct_count: safe_percentage(count, values.len()),
            })
            .collect();

        Self { bins }
    }

    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    /// Render as labelled `#` bars scaled to the fullest bucket
    pub fn render(&self, title: &str) -> String {
        if self.is_empty() {
            return format!("{}: No data\n", title);
        }

        let max_count = self.bins.iter().map(|b| b.count).max().unwrap_or(0);
        let mut output = format!("\n{}\n{}\n", title, "=".repeat(TITLE_RULE_WIDTH));

        for bin in &self.bins {
            let bar_len = if max_count > 0 {
                BAR_WIDTH * bin.count / max_count
            } else {
                0
            };
            output.push_str(&format!(
                "{} |{} ({})\n",
                format_duration_range_us(bin.range_min_us, bin.range_max_us),
                "#".repeat(bar_len),
                bin.count
            ));
        }

        output
    }
}
