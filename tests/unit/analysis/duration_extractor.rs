//! Unit tests for duration extraction and level attribution

use crate::common::fixtures::{random_durations, uart_trace};
use crate::common::{assert_close, trace_from_durations};
use logic_capture_analyser::analysis::{AnalysisError, DurationExtractor};
use logic_capture_analyser::types::{LogicLevel, TransitionTrace};

#[test]
fn test_gap_count_is_one_less_than_transitions() {
    let trace = TransitionTrace::from_times(vec![0.0, 0.001, 0.003, 0.006], LogicLevel::Low, 1e6);
    let durations = DurationExtractor::extract(&trace).unwrap();

    assert_eq!(durations.all.len(), 3);
    assert_close(durations.all[0], 1_000.0, 1e-6);
    assert_close(durations.all[1], 2_000.0, 1e-6);
    assert_close(durations.all[2], 3_000.0, 1e-6);
}

#[test]
fn test_high_and_low_partition_all() {
    for (seed, level) in [(1, LogicLevel::Low), (2, LogicLevel::High)] {
        let gaps = random_durations(seed, 101, 1.0, 500.0);
        let trace = trace_from_durations(&gaps, level);
        let durations = DurationExtractor::extract(&trace).unwrap();

        assert_eq!(durations.all.len(), 101);
        assert_eq!(durations.high.len() + durations.low.len(), durations.all.len());

        // Gap 0 carries the initial level, so it gets the extra odd element
        assert_eq!(durations.for_level(level).len(), 51);
        assert_eq!(durations.for_level(level.toggled()).len(), 50);
    }
}

#[test]
fn test_even_gaps_carry_initial_level() {
    let trace = trace_from_durations(&[10.0, 20.0, 30.0, 40.0, 50.0], LogicLevel::High);
    let durations = DurationExtractor::extract(&trace).unwrap();

    let high: Vec<f64> = durations.high.iter().map(|d| d.round()).collect();
    let low: Vec<f64> = durations.low.iter().map(|d| d.round()).collect();
    assert_eq!(high, vec![10.0, 30.0, 50.0]);
    assert_eq!(low, vec![20.0, 40.0]);
}

#[test]
fn test_uart_frames_start_low() {
    let trace = uart_trace(b"U", 9_600);
    let durations = DurationExtractor::extract(&trace).unwrap();

    // 0x55 sent LSB first alternates every bit: ten one-bit runs
    assert_eq!(durations.all.len(), 10);
    assert_eq!(durations.low.len(), 5);
    assert_eq!(durations.high.len(), 5);
    for d in &durations.all {
        assert_close(*d, 104.166_666, 1e-3);
    }
}

#[test]
fn test_fewer_than_two_transitions_rejected() {
    for times in [vec![], vec![1.5]] {
        let count = times.len();
        let trace = TransitionTrace::from_times(times, LogicLevel::Low, 1e6);
        assert_eq!(
            DurationExtractor::extract(&trace).unwrap_err(),
            AnalysisError::InsufficientData { transitions: count }
        );
    }
}

#[test]
fn test_repeated_timestamps_give_zero_gaps() {
    let trace = TransitionTrace::from_times(vec![0.0, 0.0, 0.000010], LogicLevel::Low, 1e6);
    let durations = DurationExtractor::extract(&trace).unwrap();
    assert_eq!(durations.all[0], 0.0);
    assert_close(durations.all[1], 10.0, 1e-9);
}
