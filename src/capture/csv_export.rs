//! Transition table export
//!
//! One row per timestamp: `index,time_s,state,duration_us`, where `state` is
//! the level held from that timestamp until the next one and `duration_us` is
//! that gap (0 on the last row).

use crate::errors::{AppError, AppResult};
use crate::types::TransitionTrace;
use crate::utils::units::MICROS_PER_SECOND;
use csv::Writer;
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::info;

#[derive(Debug, Serialize)]
struct TransitionRow {
    index: usize,
    time_s: String,
    state: u8,
    duration_us: String,
}

/// Writes transition traces as CSV tables
pub struct TransitionCsvExporter;

impl TransitionCsvExporter {
    /// Export to a file, creating parent directories as needed
    ///
    /// Returns the number of rows written.
    pub fn export(trace: &TransitionTrace, path: &Path) -> AppResult<usize> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let file = File::create(path).map_err(AppError::Io)?;
        let rows = Self::write_to(trace, file)?;
        info!("Exported {} transitions to {}", rows, path.display());
        Ok(rows)
    }

    /// Write the table to any writer
    pub fn write_to<W: Write>(trace: &TransitionTrace, writer: W) -> AppResult<usize> {
        let mut csv_writer = Writer::from_writer(writer);

        for (index, time) in trace.times.iter().enumerate() {
            let duration_us = trace
                .times
                .get(index + 1)
                .map(|next| (next - time) * MICROS_PER_SECOND)
                .unwrap_or(0.0);

            csv_writer.serialize(TransitionRow {
                index,
                time_s: format!("{:.9}", time),
                state: trace.level_at(index).as_bit(),
                duration_us: format!("{:.3}", duration_us),
            })?;
        }

        if trace.times.is_empty() {
            // serialize() only emits the header alongside the first row
            csv_writer.write_record(["index", "time_s", "state", "duration_us"])?;
        }

        csv_writer.flush()?;
        Ok(trace.times.len())
    }
}
