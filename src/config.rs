//! Environment driven defaults.
//!
//! Values come from the process environment, after loading a `.env` file
//! when one exists. Command line options take precedence over these.

use crate::output::OutputFormat;
use crate::processing::Placement;
use std::error::Error;

/// log4rs configuration file used when `VLSM_LOG_CONFIG` is unset.
pub const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Path of the log4rs YAML file (`VLSM_LOG_CONFIG`).
    pub log_config: String,
    /// Output format (`VLSM_FORMAT`).
    pub format: OutputFormat,
    /// Block placement policy (`VLSM_PLACEMENT`).
    pub placement: Placement,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_config: DEFAULT_LOG_CONFIG.to_string(),
            format: OutputFormat::default(),
            placement: Placement::default(),
        }
    }
}

impl Config {
    /// Load `.env` and read the configuration from the environment.
    pub fn from_env() -> Result<Config, Box<dyn Error>> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Config, Box<dyn Error>>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(path) = lookup("VLSM_LOG_CONFIG").filter(|p| !p.trim().is_empty()) {
            config.log_config = path;
        }
        if let Some(format) = lookup("VLSM_FORMAT") {
            config.format = format
                .parse()
                .map_err(|e| format!("VLSM_FORMAT: {e}"))?;
        }
        if let Some(placement) = lookup("VLSM_PLACEMENT") {
            config.placement = placement
                .parse()
                .map_err(|e| format!("VLSM_PLACEMENT: {e}"))?;
        }

        Ok(config)
    }
}
