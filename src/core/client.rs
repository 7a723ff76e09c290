use crate::core::{Coordinates, FlyOver, FlyOverSource, ProviderConfig, Result};
use crate::domain::model::{GeoPayload, IpPayload, PassTimesPayload};
use crate::utils::error::SpotterError;
use crate::utils::validation::validate_non_empty_string;
use reqwest::{Client, StatusCode};

pub struct SpotterClient<C: ProviderConfig> {
    config: C,
    client: Client,
}

impl<C: ProviderConfig> SpotterClient<C> {
    pub fn new(config: C) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }
}

#[async_trait::async_trait]
impl<C: ProviderConfig> FlyOverSource for SpotterClient<C> {
    async fn fetch_my_ip(&self) -> Result<String> {
        tracing::debug!("Requesting public IP from {}", self.config.ip_endpoint());
        let response = self.client.get(self.config.ip_endpoint()).send().await?;

        let status = response.status();
        tracing::debug!("IP response status: {}", status);

        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            return Err(SpotterError::HttpStatusError {
                status: status.as_u16(),
                context: "IP".to_string(),
                body,
            });
        }

        let payload: IpPayload = response.json().await?;
        Ok(payload.ip)
    }

    async fn fetch_coords_by_ip(&self, ip: &str) -> Result<Coordinates> {
        validate_non_empty_string("ip", ip)?;

        let url = format!("{}/{}", self.config.geo_endpoint().trim_end_matches('/'), ip);
        tracing::debug!("Requesting coordinates from {}", url);
        let response = self.client.get(&url).send().await?;

        // 這個供應商用 success 欄位回報失敗，不是 HTTP 狀態碼
        let payload: GeoPayload = response.json().await?;
        if !payload.success {
            let message = payload
                .message
                .unwrap_or_else(|| "Invalid IP address".to_string());
            let echoed_ip = payload.ip.unwrap_or_else(|| ip.to_string());
            return Err(SpotterError::ApiError {
                message: format!(
                    "Success status was false. Server message says: {} when fetching for IP {}.",
                    message, echoed_ip
                ),
            });
        }

        match (payload.latitude, payload.longitude) {
            (Some(latitude), Some(longitude)) => Ok(Coordinates {
                latitude: latitude.to_string(),
                longitude: longitude.to_string(),
            }),
            _ => Err(SpotterError::ApiError {
                message: format!("Geolocation response for IP {} is missing coordinates", ip),
            }),
        }
    }

    async fn fetch_fly_over_times(&self, coords: &Coordinates) -> Result<Vec<FlyOver>> {
        let url = format!(
            "{}?lat={}&lon={}",
            self.config.flyover_endpoint(),
            coords.latitude,
            coords.longitude
        );
        tracing::debug!("Requesting fly-over times from {}", url);
        let response = self.client.get(&url).send().await?;

        let status = response.status();
        tracing::debug!("Fly-over response status: {}", status);

        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            return Err(SpotterError::HttpStatusError {
                status: status.as_u16(),
                context: "ISS fly over times".to_string(),
                body,
            });
        }

        let payload: PassTimesPayload = response.json().await?;
        Ok(payload.response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    struct MockProviders {
        ip: String,
        geo: String,
        flyover: String,
    }

    impl MockProviders {
        fn new(server: &MockServer) -> Self {
            Self {
                ip: server.url("/ip"),
                geo: server.url("/geo"),
                flyover: server.url("/json/"),
            }
        }
    }

    impl ProviderConfig for MockProviders {
        fn ip_endpoint(&self) -> &str {
            &self.ip
        }

        fn geo_endpoint(&self) -> &str {
            &self.geo
        }

        fn flyover_endpoint(&self) -> &str {
            &self.flyover
        }
    }

    #[tokio::test]
    async fn test_fetch_my_ip_success() {
        let server = MockServer::start();
        let ip_mock = server.mock(|when, then| {
            when.method(GET).path("/ip");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({"ip": "162.245.144.188"}));
        });

        let client = SpotterClient::new(MockProviders::new(&server));
        let ip = client.fetch_my_ip().await.unwrap();

        ip_mock.assert();
        assert_eq!(ip, "162.245.144.188");
    }

    #[tokio::test]
    async fn test_fetch_my_ip_non_200_status() {
        let server = MockServer::start();
        let ip_mock = server.mock(|when, then| {
            when.method(GET).path("/ip");
            then.status(500).body("Internal Server Error");
        });

        let client = SpotterClient::new(MockProviders::new(&server));
        let error = client.fetch_my_ip().await.unwrap_err();

        ip_mock.assert();
        match error {
            SpotterError::HttpStatusError { status, body, .. } => {
                assert_eq!(status, 500);
                assert_eq!(body, "Internal Server Error");
            }
            other => panic!("Expected HttpStatusError, got: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_fetch_coords_success() {
        let server = MockServer::start();
        let geo_mock = server.mock(|when, then| {
            when.method(GET).path("/geo/162.245.144.188");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({
                    "success": true,
                    "ip": "162.245.144.188",
                    "latitude": 49.2767,
                    "longitude": -123.13
                }));
        });

        let client = SpotterClient::new(MockProviders::new(&server));
        let coords = client.fetch_coords_by_ip("162.245.144.188").await.unwrap();

        geo_mock.assert();
        assert_eq!(coords.latitude, "49.2767");
        assert_eq!(coords.longitude, "-123.13");
    }

    #[tokio::test]
    async fn test_fetch_coords_provider_failure() {
        let server = MockServer::start();
        let geo_mock = server.mock(|when, then| {
            when.method(GET).path("/geo/10.0.0.1");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({
                    "success": false,
                    "ip": "10.0.0.1",
                    "message": "Invalid IP address"
                }));
        });

        let client = SpotterClient::new(MockProviders::new(&server));
        let error = client.fetch_coords_by_ip("10.0.0.1").await.unwrap_err();

        geo_mock.assert();
        assert_eq!(
            error.to_string(),
            "Success status was false. Server message says: Invalid IP address when fetching for IP 10.0.0.1."
        );
    }

    #[tokio::test]
    async fn test_fetch_coords_missing_coordinates() {
        let server = MockServer::start();
        let geo_mock = server.mock(|when, then| {
            when.method(GET).path("/geo/162.245.144.188");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({
                    "success": true,
                    "ip": "162.245.144.188"
                }));
        });

        let client = SpotterClient::new(MockProviders::new(&server));
        let error = client.fetch_coords_by_ip("162.245.144.188").await.unwrap_err();

        geo_mock.assert();
        assert!(error.to_string().contains("missing coordinates"));
    }

    #[tokio::test]
    async fn test_fetch_coords_rejects_empty_ip() {
        let server = MockServer::start();
        let client = SpotterClient::new(MockProviders::new(&server));

        let error = client.fetch_coords_by_ip("  ").await.unwrap_err();
        assert!(matches!(
            error,
            SpotterError::InvalidConfigValueError { .. }
        ));
    }

    #[tokio::test]
    async fn test_fetch_fly_over_times_success() {
        let server = MockServer::start();
        let flyover_mock = server.mock(|when, then| {
            when.method(GET)
                .path("/json/")
                .query_param("lat", "49.2767")
                .query_param("lon", "-123.13");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({
                    "message": "success",
                    "response": [
                        {"risetime": 134564234, "duration": 600},
                        {"risetime": 134570000, "duration": 540}
                    ]
                }));
        });

        let client = SpotterClient::new(MockProviders::new(&server));
        let coords = Coordinates {
            latitude: "49.2767".to_string(),
            longitude: "-123.13".to_string(),
        };
        let passes = client.fetch_fly_over_times(&coords).await.unwrap();

        flyover_mock.assert();
        assert_eq!(passes.len(), 2);
        assert_eq!(
            passes[0],
            FlyOver {
                risetime: 134564234,
                duration: 600
            }
        );
    }

    #[tokio::test]
    async fn test_fetch_fly_over_times_non_200_status() {
        let server = MockServer::start();
        let flyover_mock = server.mock(|when, then| {
            when.method(GET).path("/json/");
            then.status(503).body("Service Unavailable");
        });

        let client = SpotterClient::new(MockProviders::new(&server));
        let coords = Coordinates {
            latitude: "49.2767".to_string(),
            longitude: "-123.13".to_string(),
        };
        let error = client.fetch_fly_over_times(&coords).await.unwrap_err();

        flyover_mock.assert();
        match error {
            SpotterError::HttpStatusError { status, body, .. } => {
                assert_eq!(status, 503);
                assert_eq!(body, "Service Unavailable");
            }
            other => panic!("Expected HttpStatusError, got: {:?}", other),
        }
    }
}
