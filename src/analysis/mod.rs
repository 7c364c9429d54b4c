//! Timing analysis and protocol inference for logic captures
//!
//! ## Overview
//!
//! The analysis module is organised around the `AnalysisEngine`, which runs one
//! complete pass over a single `TransitionTrace`:
//!
//! - **Duration Extraction** - Inter-transition gaps split into high/low views
//! - **Timing Summary** - Count/min/max/mean (and std) per view
//! - **Cluster Detection** - Tolerance-banded groups of similar pulse widths
//! - **Protocol Guessing** - UART and 1-Wire timing signatures, ranked by confidence
//! - **Report Generation** - Formatted output for console and JSON export
//!
//! ## Usage
//!
//! ```rust
//! use logic_capture_analyser::analysis::AnalysisEngine;
//! use logic_capture_analyser::config::AnalysisConfig;
//! use logic_capture_analyser::types::{LogicLevel, TransitionTrace};
//!
//! let trace = TransitionTrace::from_times(
//!     vec![0.0, 0.000100, 0.000214, 0.000344],
//!     LogicLevel::High,
//!     24_000_000.0,
//! );
//! let engine = AnalysisEngine::new(AnalysisConfig::default());
//! let analysis = engine.analyse(&trace).unwrap();
//! assert_eq!(analysis.durations.all.len(), 3);
//! ```

pub mod cluster_detector;
pub mod duration_extractor;
pub mod error;
pub mod protocol_guesser;
pub mod reports;
pub mod timing_summary;

pub use cluster_detector::{ClusterDetector, DEFAULT_CLUSTER_TOLERANCE};
pub use duration_extractor::DurationExtractor;
pub use error::{AnalysisError, AnalysisResult};
pub use protocol_guesser::{ProtocolGuesser, COMMON_BAUD_RATES};
pub use reports::{OutputFormat, ReportFormatter, ReportOptions};
pub use timing_summary::TimingSummariser;

use crate::config::AnalysisConfig;
use crate::types::{Cluster, ProtocolGuess, PulseDurations, TimingSummary, TransitionTrace};
use serde::Serialize;
use tracing::{debug, info};

/// Everything derived from one trace in one pass
#[derive(Debug, Clone, Serialize)]
pub struct SignalAnalysis {
    pub summary: TimingSummary,
    pub durations: PulseDurations,
    pub high_clusters: Vec<Cluster>,
    pub low_clusters: Vec<Cluster>,
    pub guesses: Vec<ProtocolGuess>,
}

/// Main analysis engine providing the full timing pipeline
///
/// Holds only configuration; each call to [`AnalysisEngine::analyse`] is
/// independent and side-effect free.
#[derive(Debug, Clone, Default)]
pub struct AnalysisEngine {
    config: AnalysisConfig,
}

impl AnalysisEngine {
    pub fn new(config: AnalysisConfig) -> Self {
        Self { config }
    }

    /// Run extraction, summary, clustering and protocol guessing
    ///
    /// # Returns
    /// * `AnalysisResult<SignalAnalysis>` - Complete analysis, or
    ///   `InsufficientData` when the trace holds fewer than two transitions
    pub fn analyse(&self, trace: &TransitionTrace) -> AnalysisResult<SignalAnalysis> {
        info!(
            "Analysing {} transitions (initial level {})",
            trace.transition_count(),
            trace.initial_level
        );

        let durations = DurationExtractor::extract(trace)?;
        debug!(
            "Extracted {} gaps ({} high, {} low)",
            durations.all.len(),
            durations.high.len(),
            durations.low.len()
        );

        let summary = TimingSummariser::summarise(trace, &durations);

        let detector = ClusterDetector::new(self.config.cluster_tolerance);
        let high_clusters = detector.detect(&durations.high);
        let low_clusters = detector.detect(&durations.low);
        debug!(
            "Detected {} high and {} low clusters at tolerance {}",
            high_clusters.len(),
            low_clusters.len(),
            detector.tolerance()
        );

        let guesses = self.guess_protocols(&summary, &durations);
        info!("Produced {} protocol guesses", guesses.len());

        Ok(SignalAnalysis {
            summary,
            durations,
            high_clusters,
            low_clusters,
            guesses,
        })
    }

    /// Protocol guesses from an existing summary and duration views
    pub fn guess_protocols(
        &self,
        summary: &TimingSummary,
        durations: &PulseDurations,
    ) -> Vec<ProtocolGuess> {
        ProtocolGuesser::guess(&summary.all, durations)
    }
}
