use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use std::path::Path;

use crate::converter::ConverterConfig;

use super::ConfigError;

/// Load configuration from file with environment variable overrides
pub fn load_config(path: &Path) -> Result<ConverterConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.display().to_string()));
    }

    let config: ConverterConfig = Figment::new()
        .merge(Toml::file(path))
        .merge(Env::prefixed("OFFICINA_"))
        .extract()
        .map_err(|e| ConfigError::ParseError(e.to_string()))?;

    Ok(config)
}

/// Load configuration from TOML string (useful for testing)
pub fn load_config_from_str(toml_str: &str) -> Result<ConverterConfig, ConfigError> {
    toml::from_str(toml_str).map_err(|e| ConfigError::ParseError(e.to_string()))
}
