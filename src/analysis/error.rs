//! Analysis-specific error types

/// Result type for analysis operations
pub type AnalysisResult<T> = Result<T, AnalysisError>;

/// Conditions that stop a single analysis pass
///
/// Degenerate views (a signal that never holds one level) and zero-mean
/// clusters are absorbed by the pipeline and never surface here.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnalysisError {
    #[error("Not enough transitions: {transitions} recorded, at least 2 required")]
    InsufficientData { transitions: usize },
}
