//! Configuration loading for the fleet dashboard.
//!
//! All fields are required unless explicitly marked optional. No defaults.

use fleet_core::SimulationParams;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TuiConfig {
    /// Base URL of the vehicle service; `/api/vehicles` is appended.
    pub api_base_url: String,
    pub request_timeout_ms: u64,
    pub tick_rate_ms: u64,
    pub log_path: PathBuf,
    pub simulation: SimulationConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SimulationConfig {
    /// Minimum latency of a local fallback update. Zero is allowed.
    pub fallback_delay_ms: u64,
    pub coordinate_jitter: f64,
    pub status_change_threshold: f64,
    /// Fixed seed for the local simulation; entropy-seeded when absent.
    pub seed: Option<u64>,
    /// Trigger a simulate update on this period when present.
    pub auto_interval_ms: Option<u64>,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing configuration file path (use --config or FLEET_TUI_CONFIG)")]
    MissingConfigPath,
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid config value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

impl TuiConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let path = config_path_from_args().or_else(config_path_from_env);
        let path = path.ok_or(ConfigError::MissingConfigPath)?;
        let config = Self::from_path(&path)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: TuiConfig = toml::from_str(&contents)?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api_base_url.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "api_base_url",
                reason: "must not be empty".to_string(),
            });
        }
        if !(self.api_base_url.starts_with("http://") || self.api_base_url.starts_with("https://")) {
            return Err(ConfigError::InvalidValue {
                field: "api_base_url",
                reason: "must start with http:// or https://".to_string(),
            });
        }
        if self.request_timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "request_timeout_ms",
                reason: "must be > 0".to_string(),
            });
        }
        if self.tick_rate_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "tick_rate_ms",
                reason: "must be > 0".to_string(),
            });
        }
        if self.log_path.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "log_path",
                reason: "must not be empty".to_string(),
            });
        }
        let sim = &self.simulation;
        if !sim.coordinate_jitter.is_finite() || sim.coordinate_jitter < 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "simulation.coordinate_jitter",
                reason: "must be a finite value >= 0".to_string(),
            });
        }
        if !(0.0..=1.0).contains(&sim.status_change_threshold) {
            return Err(ConfigError::InvalidValue {
                field: "simulation.status_change_threshold",
                reason: "must be within 0.0..=1.0".to_string(),
            });
        }
        if sim.auto_interval_ms == Some(0) {
            return Err(ConfigError::InvalidValue {
                field: "simulation.auto_interval_ms",
                reason: "must be > 0 when set".to_string(),
            });
        }
        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }
}

impl SimulationConfig {
    pub fn fallback_delay(&self) -> Duration {
        Duration::from_millis(self.fallback_delay_ms)
    }

    pub fn auto_interval(&self) -> Option<Duration> {
        self.auto_interval_ms.map(Duration::from_millis)
    }

    pub fn params(&self) -> SimulationParams {
        SimulationParams::new(self.coordinate_jitter, self.status_change_threshold)
    }
}

fn config_path_from_env() -> Option<PathBuf> {
    std::env::var("FLEET_TUI_CONFIG").ok().map(PathBuf::from)
}

fn config_path_from_args() -> Option<PathBuf> {
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--config" {
            return args.next().map(PathBuf::from);
        }
    }
    None
}
