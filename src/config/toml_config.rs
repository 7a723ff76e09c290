use crate::utils::error::{Result, SpotterError};
use crate::utils::validation::{validate_url, Validate};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub providers: ProvidersConfig,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProvidersConfig {
    pub ip_endpoint: Option<String>,
    pub geo_endpoint: Option<String>,
    pub flyover_endpoint: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub verbose: Option<bool>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let config: TomlConfig =
            toml::from_str(&content).map_err(|e| SpotterError::ConfigError {
                message: format!("Failed to parse {}: {}", path.display(), e),
            })?;
        config.validate()?;
        Ok(config)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(endpoint) = &self.providers.ip_endpoint {
            validate_url("providers.ip_endpoint", endpoint)?;
        }
        if let Some(endpoint) = &self.providers.geo_endpoint {
            validate_url("providers.geo_endpoint", endpoint)?;
        }
        if let Some(endpoint) = &self.providers.flyover_endpoint {
            validate_url("providers.flyover_endpoint", endpoint)?;
        }
        Ok(())
    }
}
