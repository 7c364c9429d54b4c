//! Logic Capture Analyser - Type System
//!
//! - `trace`: Capture input (TransitionTrace, LogicLevel)
//! - `timing`: Duration views and aggregate statistics (PulseDurations, TimingSummary)
//! - `protocol`: Clusters and protocol guesses

pub mod protocol;
pub mod timing;
pub mod trace;

pub use protocol::{Cluster, ProtocolGuess, ProtocolKind};
pub use timing::{DurationStats, PulseDurations, TimingSummary};
pub use trace::{LogicLevel, TransitionTrace};
