use super::{apply_capture_overrides, ensure_input_exists, load_app_config};
use crate::analysis::{AnalysisEngine, OutputFormat, ReportFormatter, ReportOptions};
use crate::capture::{CsvTraceSource, TraceSource, TransitionCsvExporter};
use crate::config::validate_tolerance;
use crate::errors::{AppError, AppResult};
use crate::types::LogicLevel;
use clap::Args;
use std::path::PathBuf;
use tracing::info;

#[derive(Args)]
pub struct AnalyseCommand {
    /// Transition table (CSV with a time_s column, optional state column)
    file: PathBuf,

    /// Show timing histograms
    #[arg(long)]
    histogram: bool,

    /// Number of histogram bins (overrides config)
    #[arg(long)]
    bins: Option<usize>,

    /// Show detected timing clusters
    #[arg(long)]
    clusters: bool,

    /// Show raw duration values
    #[arg(long)]
    raw: bool,

    /// Number of raw values to show (overrides config)
    #[arg(short = 'n')]
    count: Option<usize>,

    /// Relative cluster tolerance, e.g. 0.15 (overrides config)
    #[arg(long)]
    tolerance: Option<f64>,

    /// Output format (console or json)
    #[arg(long, default_value = "console")]
    format: String,

    /// Sample rate in Hz when the capture does not carry one (overrides config)
    #[arg(long)]
    sample_rate: Option<f64>,

    /// Level held after the first transition when the capture has no state column
    #[arg(long)]
    initial_level: Option<LogicLevel>,

    /// Also export transitions to this CSV file
    #[arg(long, value_name = "CSV")]
    export: Option<PathBuf>,
}

impl AnalyseCommand {
    pub fn run(&self) -> AppResult<()> {
        info!("=== Logic Capture Analyser - Analyse ===");

        ensure_input_exists(&self.file)?;

        let mut app_config = load_app_config()?;
        apply_capture_overrides(&mut app_config, self.sample_rate, self.initial_level)?;
        if let Some(tolerance) = self.tolerance {
            validate_tolerance(tolerance)?;
            app_config.analysis.cluster_tolerance = tolerance;
        }

        let format: OutputFormat = self.format.parse().map_err(AppError::Config)?;

        let source = CsvTraceSource::new(&self.file, app_config.capture.clone());
        let trace = source.load()?;

        let engine = AnalysisEngine::new(app_config.analysis.clone());
        let analysis = engine.analyse(&trace)?;

        let mut options = ReportOptions::from_display_config(&app_config.display);
        options.source_label = Some(source.describe());
        options.show_clusters = self.clusters;
        options.show_raw = self.raw;
        if let Some(count) = self.count {
            options.raw_count = count;
        }
        if self.histogram {
            let bins = self.bins.unwrap_or(app_config.display.histogram_bins);
            if bins == 0 {
                return Err(AppError::Config(
                    "Histogram needs at least one bin".to_string(),
                ));
            }
            options.histogram_bins = Some(bins);
        }

        let output = ReportFormatter::format_signal_analysis(&analysis, &options, &format)?;
        print!("{}", output);

        if let Some(path) = &self.export {
            let rows = TransitionCsvExporter::export(&trace, path)?;
            println!("Exported {} transitions to {}", rows, path.display());
        }

        Ok(())
    }
}
