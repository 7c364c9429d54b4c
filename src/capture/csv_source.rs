use super::TraceSource;
use crate::config::CaptureConfig;
use crate::errors::{AppError, AppResult};
use crate::types::{LogicLevel, TransitionTrace};
use csv::{ReaderBuilder, StringRecord};
use serde::Deserialize;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// One row of a transition table; extra columns are ignored
#[derive(Debug, Deserialize)]
struct TransitionRecord {
    time_s: f64,
    #[serde(default)]
    state: Option<u8>,
}

/// Transition table reader
///
/// Expects a header row with at least `time_s`. When a `state` column is
/// present, the first row's state (level held until the next transition)
/// sets the initial level; otherwise the configured fallback is used.
pub struct CsvTraceSource {
    path: PathBuf,
    capture: CaptureConfig,
}

impl CsvTraceSource {
    pub fn new(path: impl Into<PathBuf>, capture: CaptureConfig) -> Self {
        Self {
            path: path.into(),
            capture,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parse a transition table from any reader
    pub fn read_from<R: Read>(reader: R, capture: &CaptureConfig) -> AppResult<TransitionTrace> {
        let mut csv_reader = ReaderBuilder::new()
            .comment(Some(b'#')) // Skip lines starting with #
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = csv_reader.headers()?.clone();
        let mut times: Vec<f64> = Vec::new();
        let mut first_state: Option<LogicLevel> = None;
        let mut state_mismatches = 0usize;

        for result in csv_reader.records() {
            let record = result?;
            let line = record_line(&record);
            let row: TransitionRecord =
                record
                    .deserialize(Some(&headers))
                    .map_err(|e| AppError::InvalidRecord {
                        line,
                        reason: e.to_string(),
                    })?;

            if !row.time_s.is_finite() {
                return Err(AppError::InvalidRecord {
                    line,
                    reason: format!("time_s is not finite: {}", row.time_s),
                });
            }
            if let Some(&previous) = times.last() {
                if row.time_s < previous {
                    return Err(AppError::InvalidRecord {
                        line,
                        reason: format!(
                            "timestamps must not decrease ({} after {})",
                            row.time_s, previous
                        ),
                    });
                }
            }

            if let Some(bit) = row.state {
                let level = LogicLevel::from_bit(bit).ok_or_else(|| AppError::InvalidRecord {
                    line,
                    reason: format!("state must be 0 or 1, got {}", bit),
                })?;
                match first_state {
                    None if times.is_empty() => first_state = Some(level),
                    Some(initial) => {
                        if level != initial.for_gap(times.len()) {
                            state_mismatches += 1;
                        }
                    }
                    None => {}
                }
            }

            times.push(row.time_s);
        }

        if state_mismatches > 0 {
            warn!(
                "{} rows carry a state that does not alternate; levels are derived from transition order",
                state_mismatches
            );
        }

        let initial_level = first_state.unwrap_or(capture.initial_level);
        debug!(
            "Read {} transitions, initial level {} ({})",
            times.len(),
            initial_level,
            if first_state.is_some() {
                "from state column"
            } else {
                "from configuration"
            }
        );

        Ok(TransitionTrace::from_times(
            times,
            initial_level,
            capture.sample_rate_hz,
        ))
    }
}

/// 1-based source line of a record, falling back to 0 when unknown
fn record_line(record: &StringRecord) -> usize {
    record
        .position()
        .map(|p| p.line() as usize)
        .unwrap_or_default()
}

impl TraceSource for CsvTraceSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn load(&self) -> AppResult<TransitionTrace> {
        info!("Loading transitions from {}", self.path.display());
        let file = File::open(&self.path).map_err(AppError::Io)?;
        let trace = Self::read_from(BufReader::new(file), &self.capture)?;
        info!("Loaded {} transitions", trace.transition_count());
        Ok(trace)
    }
}
