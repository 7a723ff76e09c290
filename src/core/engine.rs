use crate::core::{FlyOver, FlyOverSource, Result};

pub struct SpotterEngine<S: FlyOverSource> {
    source: S,
}

impl<S: FlyOverSource> SpotterEngine<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// 依序執行三個查詢，任何一步失敗就中斷整條鏈
    pub async fn run(&self) -> Result<Vec<FlyOver>> {
        tracing::info!("Resolving public IP...");
        let ip = self.source.fetch_my_ip().await?;
        tracing::info!("Public IP: {}", ip);

        tracing::info!("Resolving coordinates for {}...", ip);
        let coords = self.source.fetch_coords_by_ip(&ip).await?;
        tracing::info!(
            "Coordinates: lat {} lon {}",
            coords.latitude,
            coords.longitude
        );

        tracing::info!("Fetching upcoming ISS fly-over times...");
        let passes = self.source.fetch_fly_over_times(&coords).await?;
        tracing::info!("Received {} fly-over records", passes.len());

        Ok(passes)
    }
}
