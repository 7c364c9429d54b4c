//! Report formatting and output generation
//!
//! Provides formatting for analysis results via the [`ReportFormatter`] facade.
//! Supports Console and JSON output formats.

pub mod histogram;
pub mod signal;
pub mod utils;

use crate::analysis::SignalAnalysis;
use crate::config::DisplayConfig;
use crate::errors::AppResult;
use std::str::FromStr;

pub use histogram::{DurationHistogram, HistogramBin};

/// Output format options for analysis reports
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Console,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "console" => Ok(OutputFormat::Console),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("Unknown output format: {}", other)),
        }
    }
}

/// Optional console report blocks
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportOptions {
    /// Shown as `File: ...` in the header
    pub source_label: Option<String>,
    pub show_clusters: bool,
    pub max_clusters: usize,
    pub show_raw: bool,
    pub raw_count: usize,
    /// Render histograms with this many bins
    pub histogram_bins: Option<usize>,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self::from_display_config(&DisplayConfig::default())
    }
}

impl ReportOptions {
    /// Options with every optional block disabled and sizes taken from config
    pub fn from_display_config(display: &DisplayConfig) -> Self {
        Self {
            source_label: None,
            show_clusters: false,
            max_clusters: display.max_clusters,
            show_raw: false,
            raw_count: display.raw_count,
            histogram_bins: None,
        }
    }
}

/// Facade for all report formatting operations
pub struct ReportFormatter;

impl ReportFormatter {
    pub fn format_signal_analysis(
        a: &SignalAnalysis,
        o: &ReportOptions,
        f: &OutputFormat,
    ) -> AppResult<String> {
        signal::format_signal_analysis(a, o, f)
    }
}
