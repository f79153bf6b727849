mod loader;

pub use loader::{load_config, load_config_from_str};

use thiserror::Error;

use crate::converter::ConverterConfig;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

/// Checks invariants the serde defaults cannot express.
pub fn validate_config(config: &ConverterConfig) -> Result<(), ConfigError> {
    if config.convert_to.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "convert_to must not be empty".to_string(),
        ));
    }

    if config.probe_timeout_secs == 0 {
        return Err(ConfigError::ValidationError(
            "probe_timeout_secs must be greater than zero".to_string(),
        ));
    }

    Ok(())
}
