//! End-to-end analysis tests: trace in, report out

use crate::common::fixtures::{one_wire_trace, uart_trace};
use crate::common::trace_from_durations;
use anyhow::Result;
use logic_capture_analyser::analysis::{
    AnalysisEngine, AnalysisError, OutputFormat, ReportFormatter, ReportOptions,
};
use logic_capture_analyser::config::AnalysisConfig;
use logic_capture_analyser::types::{LogicLevel, TransitionTrace};

#[test]
fn test_uart_console_report() -> Result<()> {
    let trace = uart_trace(b"Hello", 115_200);
    let analysis = AnalysisEngine::default().analyse(&trace)?;

    let options = ReportOptions {
        source_label: Some("hello.csv".to_string()),
        show_clusters: true,
        histogram_bins: Some(10),
        ..ReportOptions::default()
    };
    let report = ReportFormatter::format_signal_analysis(&analysis, &options, &OutputFormat::Console)?;

    assert!(report.contains("File: hello.csv"));
    assert!(report.contains("Initial state: LOW"));
    assert!(report.contains("Timing Summary"));
    assert!(report.contains("Protocol Guesses"));
    assert!(report.contains("UART (115200 baud) (90% confidence)"));
    assert!(report.contains("Bit period ~8.7us"));
    Ok(())
}

#[test]
fn test_json_report_carries_guesses() -> Result<()> {
    let analysis = AnalysisEngine::default().analyse(&one_wire_trace())?;
    let json = ReportFormatter::format_signal_analysis(
        &analysis,
        &ReportOptions::default(),
        &OutputFormat::Json,
    )?;

    let value: serde_json::Value = serde_json::from_str(&json)?;
    assert_eq!(value["guesses"][0]["name"], "1-Wire");
    assert_eq!(value["summary"]["initial_level"], "LOW");
    assert_eq!(
        value["durations"]["all"].as_array().map(|a| a.len()),
        Some(analysis.durations.all.len())
    );
    Ok(())
}

#[test]
fn test_clusters_follow_uart_bit_widths() -> Result<()> {
    let trace = uart_trace(b"Hello", 9_600);
    let analysis = AnalysisEngine::default().analyse(&trace)?;

    // Every cluster center sits on a whole number of bit periods
    let period = 1_000_000.0 / 9_600.0;
    for cluster in analysis.high_clusters.iter().chain(&analysis.low_clusters) {
        let bits = cluster.center_us / period;
        assert!((bits - bits.round()).abs() < 0.01, "{:?}", cluster);
    }
    let high_total: usize = analysis.high_clusters.iter().map(|c| c.count).sum();
    assert_eq!(high_total, analysis.durations.high.len());
    Ok(())
}

#[test]
fn test_tolerance_changes_cluster_count() -> Result<()> {
    // LOW gaps 100, 110, 118: one cluster at 15%, three at 5%
    let trace = trace_from_durations(&[100.0, 50.0, 110.0, 50.0, 118.0], LogicLevel::Low);

    let wide = AnalysisEngine::default().analyse(&trace)?;
    assert_eq!(wide.low_clusters.len(), 1);

    let narrow = AnalysisEngine::new(AnalysisConfig {
        cluster_tolerance: 0.05,
    })
    .analyse(&trace)?;
    assert_eq!(narrow.low_clusters.len(), 3);
    Ok(())
}

#[test]
fn test_single_timestamp_is_an_error() {
    let trace = TransitionTrace::from_times(vec![0.5], LogicLevel::High, 0.0);
    let err = AnalysisEngine::default().analyse(&trace).unwrap_err();
    assert_eq!(err, AnalysisError::InsufficientData { transitions: 1 });
    assert!(err.to_string().contains("1 recorded"));
}
