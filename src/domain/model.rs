use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: String,
    pub longitude: String,
}

/// A predicted interval during which the ISS is visible from given coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlyOver {
    /// Epoch-seconds timestamp marking the start of visibility.
    pub risetime: i64,
    pub duration: u64,
}

#[derive(Debug, Deserialize)]
pub struct IpPayload {
    pub ip: String,
}

#[derive(Debug, Deserialize)]
pub struct GeoPayload {
    pub success: bool,
    pub ip: Option<String>,
    pub message: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub struct PassTimesPayload {
    #[serde(default)]
    pub response: Vec<FlyOver>,
}
