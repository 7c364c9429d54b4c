use super::{apply_capture_overrides, ensure_input_exists, load_app_config};
use crate::capture::{CsvTraceSource, TraceSource, TransitionCsvExporter};
use crate::errors::AppResult;
use crate::types::LogicLevel;
use clap::Args;
use std::path::PathBuf;
use tracing::info;

#[derive(Args)]
pub struct ExportCommand {
    /// Transition table to re-export
    file: PathBuf,

    /// Destination CSV file
    #[arg(long, short = 'o')]
    output: PathBuf,

    /// Level held after the first transition when the capture has no state column
    #[arg(long)]
    initial_level: Option<LogicLevel>,
}

impl ExportCommand {
    pub fn run(&self) -> AppResult<()> {
        info!("=== Logic Capture Analyser - Export ===");

        ensure_input_exists(&self.file)?;

        let mut app_config = load_app_config()?;
        apply_capture_overrides(&mut app_config, None, self.initial_level)?;

        let trace = CsvTraceSource::new(&self.file, app_config.capture).load()?;
        let rows = TransitionCsvExporter::export(&trace, &self.output)?;

        println!("Exported {} transitions to {}", rows, self.output.display());
        Ok(())
    }
}
