use crate::analysis::DEFAULT_CLUSTER_TOLERANCE;
use crate::types::LogicLevel;
use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};

/// Config file stem looked up in the working directory (`logic_analyser.toml`)
pub const CONFIG_FILE_STEM: &str = "logic_analyser";

/// Environment prefix; nested keys use `__`, e.g. `LOGIC_ANALYSER__ANALYSIS__CLUSTER_TOLERANCE`
pub const ENV_PREFIX: &str = "LOGIC_ANALYSER";

/// Application configuration loaded from logic_analyser.toml or environment variables
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub analysis: AnalysisConfig,
    pub display: DisplayConfig,
    pub capture: CaptureConfig,
}

/// Parameters of the timing analysis itself
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Relative tolerance for duration clustering
    pub cluster_tolerance: f64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            cluster_tolerance: DEFAULT_CLUSTER_TOLERANCE,
        }
    }
}

/// Console report layout
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    pub histogram_bins: usize,
    pub raw_count: usize,
    pub max_clusters: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            histogram_bins: 20,
            raw_count: 20,
            max_clusters: 5,
        }
    }
}

/// Fallbacks for capture sources that do not carry this metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaptureConfig {
    pub sample_rate_hz: f64,
    pub initial_level: LogicLevel,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            sample_rate_hz: 0.0,
            initial_level: LogicLevel::Low,
        }
    }
}

impl AppConfig {
    /// Load configuration from logic_analyser.toml and environment variables
    /// Environment variables take precedence over file configuration
    ///
    /// A missing file is not an error; a present but invalid file or variable is.
    pub fn load() -> Result<Self, ConfigError> {
        let defaults = AppConfig::default();
        let config = Config::builder()
            // Start with default values
            .set_default(
                "analysis.cluster_tolerance",
                defaults.analysis.cluster_tolerance,
            )?
            .set_default(
                "display.histogram_bins",
                defaults.display.histogram_bins as i64,
            )?
            .set_default("display.raw_count", defaults.display.raw_count as i64)?
            .set_default("display.max_clusters", defaults.display.max_clusters as i64)?
            .set_default("capture.sample_rate_hz", defaults.capture.sample_rate_hz)?
            .set_default(
                "capture.initial_level",
                defaults.capture.initial_level.to_string(),
            )?
            // Load from logic_analyser.toml if it exists
            .add_source(File::with_name(CONFIG_FILE_STEM).required(false))
            // LOGIC_ANALYSER__* env variables override everything above
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let app_config: AppConfig = config.try_deserialize()?;
        app_config.validate()?;
        Ok(app_config)
    }

    /// Reject values the analysis cannot work with
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_tolerance(self.analysis.cluster_tolerance)?;
        if self.display.histogram_bins == 0 {
            return Err(ConfigError::Message(
                "display.histogram_bins must be at least 1".to_string(),
            ));
        }
        validate_sample_rate(self.capture.sample_rate_hz)
    }
}

/// Sample rate is display-only metadata; 0 means unknown
pub fn validate_sample_rate(sample_rate_hz: f64) -> Result<(), ConfigError> {
    if sample_rate_hz.is_finite() && sample_rate_hz >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Message(format!(
            "capture.sample_rate_hz must be a non-negative number, got {}",
            sample_rate_hz
        )))
    }
}

/// Cluster tolerance must be a finite, non-negative fraction
pub fn validate_tolerance(tolerance: f64) -> Result<(), ConfigError> {
    if tolerance.is_finite() && tolerance >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Message(format!(
            "analysis.cluster_tolerance must be a non-negative number, got {}",
            tolerance
        )))
    }
}
