//! Pulse duration extraction
//!
//! Converts raw transition timestamps into inter-transition gaps and assigns
//! each gap to the level held during it. Level assignment uses only the
//! initial level and the gap's position, never amplitude.

use super::error::{AnalysisError, AnalysisResult};
use crate::types::{LogicLevel, PulseDurations, TransitionTrace};
use crate::utils::units::MICROS_PER_SECOND;

/// Minimum number of timestamps needed to measure one gap
pub const MIN_TRANSITIONS: usize = 2;

/// Gap extraction from a transition trace
pub struct DurationExtractor;

impl DurationExtractor {
    /// Extract all/high/low duration views (µs)
    ///
    /// # Errors
    /// * `AnalysisError::InsufficientData` when fewer than two timestamps are present
    pub fn extract(trace: &TransitionTrace) -> AnalysisResult<PulseDurations> {
        if trace.times.len() < MIN_TRANSITIONS {
            return Err(AnalysisError::InsufficientData {
                transitions: trace.times.len(),
            });
        }

        let all: Vec<f64> = trace
            .times
            .windows(2)
            .map(|pair| (pair[1] - pair[0]) * MICROS_PER_SECOND)
            .collect();

        let (high, low) = Self::split_by_level(&all, trace.initial_level);

        Ok(PulseDurations { all, high, low })
    }

    /// Split a gap sequence by position parity
    ///
    /// Even-indexed gaps hold `initial_level`; odd-indexed gaps hold the other level.
    pub fn split_by_level(durations: &[f64], initial_level: LogicLevel) -> (Vec<f64>, Vec<f64>) {
        let mut high = Vec::with_capacity(durations.len() / 2 + 1);
        let mut low = Vec::with_capacity(durations.len() / 2 + 1);

        for (index, &duration) in durations.iter().enumerate() {
            match initial_level.for_gap(index) {
                LogicLevel::High => high.push(duration),
                LogicLevel::Low => low.push(duration),
            }
        }

        (high, low)
    }
}
