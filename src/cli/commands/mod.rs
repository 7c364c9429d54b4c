pub mod analyse;
pub mod export;

use crate::config::{validate_sample_rate, AppConfig};
use crate::errors::{AppError, AppResult};
use crate::types::LogicLevel;
use std::path::Path;
use tracing::info;

/// Load configuration; built-in defaults apply when no file or variable is set
///
/// An invalid `logic_analyser.toml` or `LOGIC_ANALYSER__*` value aborts the command.
fn load_app_config() -> AppResult<AppConfig> {
    let config = AppConfig::load()?;
    info!("Configuration loaded successfully");
    Ok(config)
}

/// Apply capture overrides shared by every command that reads a trace
fn apply_capture_overrides(
    config: &mut AppConfig,
    sample_rate: Option<f64>,
    initial_level: Option<LogicLevel>,
) -> AppResult<()> {
    if let Some(rate) = sample_rate {
        validate_sample_rate(rate)?;
        config.capture.sample_rate_hz = rate;
    }
    if let Some(level) = initial_level {
        config.capture.initial_level = level;
    }
    Ok(())
}

fn ensure_input_exists(path: &Path) -> AppResult<()> {
    if !path.exists() {
        return Err(AppError::Config(format!(
            "File not found: {}",
            path.display()
        )));
    }
    Ok(())
}
