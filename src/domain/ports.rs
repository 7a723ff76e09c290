use crate::domain::model::{Coordinates, FlyOver};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait ProviderConfig: Send + Sync {
    fn ip_endpoint(&self) -> &str;
    fn geo_endpoint(&self) -> &str;
    fn flyover_endpoint(&self) -> &str;
}

#[async_trait]
pub trait FlyOverSource: Send + Sync {
    async fn fetch_my_ip(&self) -> Result<String>;
    async fn fetch_coords_by_ip(&self, ip: &str) -> Result<Coordinates>;
    async fn fetch_fly_over_times(&self, coords: &Coordinates) -> Result<Vec<FlyOver>>;
}
