//! Duration views and timing statistics produced by one analysis pass

use super::trace::LogicLevel;
use serde::{Deserialize, Serialize};

/// Pulse durations (µs) split by the level held during each gap
///
/// `high.len() + low.len() == all.len()` always holds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PulseDurations {
    /// Every inter-transition gap, in capture order
    pub all: Vec<f64>,
    /// Gaps spent at logic-high
    pub high: Vec<f64>,
    /// Gaps spent at logic-low
    pub low: Vec<f64>,
}

impl PulseDurations {
    /// View for a single level
    pub fn for_level(&self, level: LogicLevel) -> &[f64] {
        match level {
            LogicLevel::High => &self.high,
            LogicLevel::Low => &self.low,
        }
    }
}

/// Aggregate statistics over one duration view
///
/// Empty views report zeroed min/max/mean. `std_us` is only computed for
/// the combined view.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DurationStats {
    pub count: usize,
    pub min_us: f64,
    pub max_us: f64,
    pub mean_us: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub std_us: Option<f64>,
}

/// Capture header plus per-view statistics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimingSummary {
    pub total_transitions: usize,
    pub capture_duration_s: f64,
    pub signal_duration_s: f64,
    pub sample_rate_hz: f64,
    pub initial_level: LogicLevel,
    pub all: DurationStats,
    pub high: DurationStats,
    pub low: DurationStats,
}
