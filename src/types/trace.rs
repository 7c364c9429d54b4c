use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Logic level held by the captured signal between two transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogicLevel {
    #[serde(alias = "low")]
    Low,
    #[serde(alias = "high")]
    High,
}

impl LogicLevel {
    /// Level after one transition
    pub fn toggled(self) -> Self {
        match self {
            LogicLevel::Low => LogicLevel::High,
            LogicLevel::High => LogicLevel::Low,
        }
    }

    /// Level held during gap `index` when gap 0 holds `self`
    ///
    /// Even gaps repeat the starting level, odd gaps hold the opposite one.
    pub fn for_gap(self, index: usize) -> Self {
        if index % 2 == 0 {
            self
        } else {
            self.toggled()
        }
    }

    /// Numeric form used in exported transition tables
    pub fn as_bit(self) -> u8 {
        match self {
            LogicLevel::Low => 0,
            LogicLevel::High => 1,
        }
    }

    pub fn from_bit(bit: u8) -> Option<Self> {
        match bit {
            0 => Some(LogicLevel::Low),
            1 => Some(LogicLevel::High),
            _ => None,
        }
    }
}

impl fmt::Display for LogicLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogicLevel::Low => write!(f, "LOW"),
            LogicLevel::High => write!(f, "HIGH"),
        }
    }
}

impl FromStr for LogicLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "high" | "1" => Ok(LogicLevel::High),
            "low" | "0" => Ok(LogicLevel::Low),
            other => Err(format!("Unknown logic level: {}", other)),
        }
    }
}

/// Recorded transition times of one digital channel
///
/// `initial_level` is the level held during the first gap, i.e. from
/// `times[0]` to `times[1]`. Every later gap alternates from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransitionTrace {
    /// Transition timestamps in seconds, monotonically non-decreasing
    pub times: Vec<f64>,
    pub initial_level: LogicLevel,
    pub sample_rate_hz: f64,
    pub begin_time_s: f64,
    pub end_time_s: f64,
}

impl TransitionTrace {
    pub fn new(
        times: Vec<f64>,
        initial_level: LogicLevel,
        sample_rate_hz: f64,
        begin_time_s: f64,
        end_time_s: f64,
    ) -> Self {
        Self {
            times,
            initial_level,
            sample_rate_hz,
            begin_time_s,
            end_time_s,
        }
    }

    /// Build a trace whose capture window is exactly the first..last transition
    pub fn from_times(times: Vec<f64>, initial_level: LogicLevel, sample_rate_hz: f64) -> Self {
        let begin = times.first().copied().unwrap_or(0.0);
        let end = times.last().copied().unwrap_or(0.0);
        Self::new(times, initial_level, sample_rate_hz, begin, end)
    }

    pub fn transition_count(&self) -> usize {
        self.times.len()
    }

    pub fn capture_duration_s(&self) -> f64 {
        self.end_time_s - self.begin_time_s
    }

    /// Time between the first and last transition (0 when empty)
    pub fn signal_duration_s(&self) -> f64 {
        match (self.times.first(), self.times.last()) {
            (Some(first), Some(last)) => last - first,
            _ => 0.0,
        }
    }

    /// Level held during gap `index` (from `times[index]` to `times[index + 1]`)
    pub fn level_at(&self, index: usize) -> LogicLevel {
        self.initial_level.for_gap(index)
    }
}
