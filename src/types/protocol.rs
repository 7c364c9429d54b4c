use serde::{Deserialize, Serialize};
use std::fmt;

/// Group of similar durations
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cluster {
    /// Mean of the member durations (µs)
    pub center_us: f64,
    pub count: usize,
}

/// Protocol families the timing rules can recognise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "protocol", rename_all = "snake_case")]
pub enum ProtocolKind {
    Uart { baud_rate: u32 },
    OneWire,
}

impl fmt::Display for ProtocolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProtocolKind::Uart { baud_rate } => write!(f, "UART ({} baud)", baud_rate),
            ProtocolKind::OneWire => write!(f, "1-Wire"),
        }
    }
}

/// Confidence-scored protocol hypothesis
///
/// Confidence is a heuristic score in [0, 1], not a calibrated probability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProtocolGuess {
    pub kind: ProtocolKind,
    pub name: String,
    pub confidence: f64,
    pub details: String,
}

impl ProtocolGuess {
    pub fn new(kind: ProtocolKind, confidence: f64, details: impl Into<String>) -> Self {
        Self {
            kind,
            name: kind.to_string(),
            confidence: confidence.clamp(0.0, 1.0),
            details: details.into(),
        }
    }

    /// Confidence as a whole percentage for display
    pub fn confidence_percent(&self) -> f64 {
        self.confidence * 100.0
    }
}
