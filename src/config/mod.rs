pub mod toml_config;

use crate::config::toml_config::TomlConfig;
use crate::core::ProviderConfig;
use crate::utils::error::Result;
use crate::utils::validation::{validate_url, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

pub const DEFAULT_IP_ENDPOINT: &str = "https://api.ipify.org?format=json";
pub const DEFAULT_GEO_ENDPOINT: &str = "http://ipwho.is";
pub const DEFAULT_FLYOVER_ENDPOINT: &str = "https://iss-flyover.herokuapp.com/json/";

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "iss-spotter")]
#[command(about = "Prints upcoming ISS fly-over times for your current location")]
pub struct CliConfig {
    #[arg(long, default_value = DEFAULT_IP_ENDPOINT)]
    pub ip_endpoint: String,

    #[arg(long, default_value = DEFAULT_GEO_ENDPOINT)]
    pub geo_endpoint: String,

    #[arg(long, default_value = DEFAULT_FLYOVER_ENDPOINT)]
    pub flyover_endpoint: String,

    #[arg(long, help = "Optional TOML file overriding provider endpoints")]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// 設定檔有填的欄位覆蓋命令列的值
    pub fn apply_file(&mut self, file: &TomlConfig) {
        if let Some(endpoint) = &file.providers.ip_endpoint {
            self.ip_endpoint = endpoint.clone();
        }
        if let Some(endpoint) = &file.providers.geo_endpoint {
            self.geo_endpoint = endpoint.clone();
        }
        if let Some(endpoint) = &file.providers.flyover_endpoint {
            self.flyover_endpoint = endpoint.clone();
        }
        if let Some(verbose) = file.logging.as_ref().and_then(|logging| logging.verbose) {
            self.verbose = verbose;
        }
    }
}

impl ProviderConfig for CliConfig {
    fn ip_endpoint(&self) -> &str {
        &self.ip_endpoint
    }

    fn geo_endpoint(&self) -> &str {
        &self.geo_endpoint
    }

    fn flyover_endpoint(&self) -> &str {
        &self.flyover_endpoint
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("ip_endpoint", &self.ip_endpoint)?;
        validate_url("geo_endpoint", &self.geo_endpoint)?;
        validate_url("flyover_endpoint", &self.flyover_endpoint)?;
        Ok(())
    }
}
