pub mod client;
pub mod engine;
pub mod format;

pub use crate::domain::model::{Coordinates, FlyOver};
pub use crate::domain::ports::{FlyOverSource, ProviderConfig};
pub use crate::utils::error::Result;
