//! Logic Capture Timing Analyser
//!

pub mod analysis;
pub mod capture;
pub mod cli;
pub mod config;
pub mod errors;
pub mod types;
pub mod utils;
