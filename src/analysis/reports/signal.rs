//! Signal analysis report formatter
//!
//! Console output is laid out in blocks: capture header, timing summary,
//! protocol guesses, then the optional cluster, raw-duration and histogram
//! blocks selected through [`ReportOptions`].

use super::histogram::DurationHistogram;
use super::utils::{export_json, format_cluster, format_number, section_header};
use super::{OutputFormat, ReportOptions};
use crate::analysis::SignalAnalysis;
use crate::errors::AppResult;
use crate::types::{DurationStats, LogicLevel};
use crate::utils::units::{format_duration_us, format_sample_rate};

/// Format a complete signal analysis
pub fn format_signal_analysis(
    analysis: &SignalAnalysis,
    options: &ReportOptions,
    format: &OutputFormat,
) -> AppResult<String> {
    match format {
        OutputFormat::Json => export_json(analysis),
        OutputFormat::Console => {
            let mut output = String::new();
            output.push_str(&format_capture_header(analysis, options));
            output.push_str(&format_timing_summary(analysis));
            output.push_str(&format_guesses(analysis));
            if options.show_clusters {
                output.push_str(&format_clusters(analysis, options.max_clusters));
            }
            if options.show_raw {
                output.push_str(&format_raw_durations(analysis, options.raw_count));
            }
            if let Some(bins) = options.histogram_bins {
                output.push_str(&format_histograms(analysis, bins));
            }
            Ok(output)
        }
    }
}

fn format_capture_header(analysis: &SignalAnalysis, options: &ReportOptions) -> String {
    let summary = &analysis.summary;
    let mut output = String::new();

    if let Some(source) = &options.source_label {
        output.push_str(&format!("File: {}\n", source));
    }
    output.push_str(&format!(
        "Sample rate: {}\n",
        format_sample_rate(summary.sample_rate_hz)
    ));
    output.push_str(&format!(
        "Capture duration: {:.3}s\n",
        summary.capture_duration_s
    ));
    output.push_str(&format!(
        "Signal duration: {:.3}s\n",
        summary.signal_duration_s
    ));
    output.push_str(&format!("Initial state: {}\n", summary.initial_level));
    output.push_str(&format!(
        "Total transitions: {}\n\n",
        format_number(summary.total_transitions)
    ));
    output
}

fn format_stats_line(stats: &DurationStats) -> String {
    let mut line = format!(
        "min={:.1}us  max={:.1}us  mean={:.1}us",
        stats.min_us, stats.max_us, stats.mean_us
    );
    if let Some(std) = stats.std_us {
        line.push_str(&format!("  std={:.1}us", std));
    }
    line
}

fn format_timing_summary(analysis: &SignalAnalysis) -> String {
    let summary = &analysis.summary;
    let mut output = section_header("Timing Summary");
    output.push_str(&format!(
        "All durations:  {}\n",
        format_stats_line(&summary.all)
    ));
    output.push_str(&format!(
        "HIGH pulses ({}): {}\n",
        summary.high.count,
        format_stats_line(&summary.high)
    ));
    output.push_str(&format!(
        "LOW gaps ({}):   {}\n\n",
        summary.low.count,
        format_stats_line(&summary.low)
    ));
    output
}

fn format_guesses(analysis: &SignalAnalysis) -> String {
    if analysis.guesses.is_empty() {
        return String::new();
    }

    let mut output = section_header("Protocol Guesses");
    for guess in &analysis.guesses {
        output.push_str(&format!(
            "  {} ({:.0}% confidence)\n",
            guess.name,
            guess.confidence_percent()
        ));
        output.push_str(&format!("    {}\n", guess.details));
    }
    output.push('\n');
    output
}

fn format_clusters(analysis: &SignalAnalysis, max_clusters: usize) -> String {
    let mut output = section_header("Detected Timing Clusters");

    output.push_str("HIGH pulse clusters:\n");
    for cluster in analysis.high_clusters.iter().take(max_clusters) {
        output.push_str(&format_cluster(cluster));
    }

    output.push_str("LOW gap clusters:\n");
    for cluster in analysis.low_clusters.iter().take(max_clusters) {
        output.push_str(&format_cluster(cluster));
    }

    output.push('\n');
    output
}

fn format_raw_durations(analysis: &SignalAnalysis, count: usize) -> String {
    let initial_level = analysis.summary.initial_level;
    let mut output = section_header(&format!("First {} Transitions", count));

    for (index, duration) in analysis.durations.all.iter().take(count).enumerate() {
        output.push_str(&format!(
            "  [{:3}] {}: {}\n",
            index,
            initial_level.for_gap(index),
            format_duration_us(*duration)
        ));
    }

    output.push('\n');
    output
}

fn format_histograms(analysis: &SignalAnalysis, bins: usize) -> String {
    let durations = &analysis.durations;
    let mut output = String::new();
    output.push_str(&DurationHistogram::from_durations(&durations.all, bins).render("All Durations"));
    output.push_str(
        &DurationHistogram::from_durations(durations.for_level(LogicLevel::High), bins)
            .render("HIGH Pulse Durations"),
    );
    output.push_str(
        &DurationHistogram::from_durations(durations.for_level(LogicLevel::Low), bins)
            .render("LOW Gap Durations"),
    );
    output
}
