pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::toml_config::TomlConfig;
pub use config::CliConfig;
pub use core::{client::SpotterClient, engine::SpotterEngine};
pub use domain::model::{Coordinates, FlyOver};
pub use utils::error::{Result, SpotterError};
