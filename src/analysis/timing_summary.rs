//! Aggregate timing statistics over the duration views

use crate::types::{DurationStats, PulseDurations, TimingSummary, TransitionTrace};
use crate::utils::math::{min_max, population_std_dev, safe_mean};

/// Timing statistics engine
pub struct TimingSummariser;

impl TimingSummariser {
    /// Summarise one trace and its extracted durations
    ///
    /// Provides:
    /// - Capture header (transition count, capture/signal duration, initial level)
    /// - Count/min/max/mean/std over every gap
    /// - Count/min/max/mean over high and low gaps (zeroed when a level never occurs)
    pub fn summarise(trace: &TransitionTrace, durations: &PulseDurations) -> TimingSummary {
        TimingSummary {
            total_transitions: trace.transition_count(),
            capture_duration_s: trace.capture_duration_s(),
            signal_duration_s: trace.signal_duration_s(),
            sample_rate_hz: trace.sample_rate_hz,
            initial_level: trace.initial_level,
            all: Self::stats_with_spread(&durations.all),
            high: Self::stats(&durations.high),
            low: Self::stats(&durations.low),
        }
    }

    /// Count/min/max/mean for one view, zeroed when empty
    pub fn stats(values: &[f64]) -> DurationStats {
        let (min_us, max_us) = min_max(values).unwrap_or((0.0, 0.0));
        DurationStats {
            count: values.len(),
            min_us,
            max_us,
            mean_us: safe_mean(values),
            std_us: None,
        }
    }

    /// Same as [`Self::stats`] plus population standard deviation
    pub fn stats_with_spread(values: &[f64]) -> DurationStats {
        DurationStats {
            std_us: Some(population_std_dev(values)),
            ..Self::stats(values)
        }
    }
}
