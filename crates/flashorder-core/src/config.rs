//! Order flow configuration
//!
//! Timings and the simulated failure rate. Loaded from an optional JSON file;
//! a missing file yields the defaults. Command line flags on the desktop
//! binary override individual values after loading.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Timings and simulation parameters for the order flow
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlowConfig {
    /// Fixed latency of the simulated submission
    pub submit_delay_ms: u64,
    /// Probability that a simulated submission succeeds
    pub success_rate: f64,
    /// How long an inline validation error stays visible
    pub inline_error_ms: u64,
    /// Auto-dismiss delay of the success overlay
    pub success_dismiss_ms: u64,
    /// How long a clipboard toast stays visible
    pub toast_ms: u64,
    /// Seed for the simulated submitter; random when unset
    pub seed: Option<u64>,
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self {
            submit_delay_ms: 2000,
            success_rate: 0.9,
            inline_error_ms: 3000,
            success_dismiss_ms: 5000,
            toast_ms: 2000,
            seed: None,
        }
    }
}

impl FlowConfig {
    /// Default config file location (`<config dir>/flashorder/config.json`)
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("flashorder")
            .join("config.json")
    }

    /// Load from `path`, falling back to defaults when the file does not exist
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let config = match std::fs::read_to_string(path) {
            Ok(contents) => serde_json::from_str::<FlowConfig>(&contents)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(?path, "No config file, using defaults");
                FlowConfig::default()
            }
            Err(e) => return Err(e.into()),
        };
        config.validate()?;
        Ok(config)
    }

    /// Reject out-of-range values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.success_rate) {
            return Err(ConfigError::Value(format!(
                "success_rate must be between 0 and 1, got {}",
                self.success_rate
            )));
        }
        Ok(())
    }

    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }

    pub fn inline_error_duration(&self) -> Duration {
        Duration::from_millis(self.inline_error_ms)
    }

    pub fn success_dismiss(&self) -> Duration {
        Duration::from_millis(self.success_dismiss_ms)
    }

    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_ms)
    }
}
