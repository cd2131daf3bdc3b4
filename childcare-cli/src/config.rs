//! Loads [`CalculatorConfig`] overrides from a TOML file.
//!
//! Every key is optional; missing keys keep their defaults.
//!
//! ```toml
//! credit_per_dependent = "2000"
//! credit_cap = "4000"
//! fsa_pool = "5000"
//! search_floor = "0"
//! search_ceiling = "300000"
//! search_iterations = 20
//! search_tolerance = "1"
//! ```

use std::path::Path;

use childcare_core::{CalculatorConfig, ConfigError};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("cannot read config file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config value: {0}")]
    Invalid(#[from] ConfigError),
}

/// Parses and validates a TOML config document.
pub fn parse_config(input: &str) -> Result<CalculatorConfig, ConfigLoadError> {
    let config: CalculatorConfig = toml::from_str(input)?;
    config.validate()?;
    Ok(config)
}

/// Reads the config at `path`, or returns the defaults when no path is given.
pub fn load_config(path: Option<&Path>) -> Result<CalculatorConfig, ConfigLoadError> {
    let Some(path) = path else {
        return Ok(CalculatorConfig::default());
    };

    let contents = std::fs::read_to_string(path).map_err(|source| ConfigLoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let config = parse_config(&contents)?;
    debug!(path = %path.display(), ?config, "loaded calculator config");
    Ok(config)
}
