use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One forecast sample (3-hour step), already converted to metric units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ForecastSample {
    /// Unix timestamp, seconds.
    pub timestamp: i64,
    /// Air temperature, °C.
    pub temperature: f64,
    /// Wind speed, m/s.
    #[serde(default)]
    pub wind_speed: f64,
    /// Rain over the sample window, mm.
    #[serde(default)]
    pub rain: f64,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AlertsRequest {
    pub location: String,
    pub forecast: Vec<ForecastSample>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum AlertKind {
    Frost,
    Heat,
    Drought,
    HeavyRain,
    Wind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Medium,
    High,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Alert {
    #[serde(rename = "type")]
    pub kind: AlertKind,
    pub severity: Severity,
    pub message: String,
    pub action: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AlertsResponse {
    pub location: String,
    pub alerts: Vec<Alert>,
}
