//! Capture input and transition export
//!
//! The analysis only needs a [`TransitionTrace`]; where it comes from is hidden
//! behind [`TraceSource`]. The bundled source reads the same transition table
//! that [`csv_export`] writes, so an exported capture can be re-analysed.

pub mod csv_export;
pub mod csv_source;

pub use csv_export::TransitionCsvExporter;
pub use csv_source::CsvTraceSource;

use crate::errors::AppResult;
use crate::types::TransitionTrace;

/// Anything that can yield one recorded channel as a transition trace
pub trait TraceSource {
    /// Human-readable origin, used in report headers and logs
    fn describe(&self) -> String;

    /// Load the complete trace into memory
    fn load(&self) -> AppResult<TransitionTrace>;
}
