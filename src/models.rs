use rmcp::ErrorData as McpError;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

// ============================================================================
// National Weather Service API Models
// ============================================================================

#[derive(Debug, Default, Deserialize)]
pub struct AlertResponse {
    #[serde(default)]
    pub features: Vec<AlertFeature>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AlertFeature {
    #[serde(default)]
    pub properties: AlertRecord,
}

#[derive(Debug, Default, Clone, Deserialize)]
pub struct AlertRecord {
    pub event: Option<String>,
    #[serde(rename = "areaDesc")]
    pub area_desc: Option<String>,
    pub severity: Option<String>,
    pub status: Option<String>,
    pub headline: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct PointsResponse {
    #[serde(default)]
    pub properties: GridPoint,
}

#[derive(Debug, Default, Deserialize)]
pub struct GridPoint {
    #[serde(rename = "forecast")]
    pub forecast_url: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ForecastResponse {
    #[serde(default)]
    pub properties: ForecastProperties,
}

#[derive(Debug, Default, Deserialize)]
pub struct ForecastProperties {
    #[serde(default)]
    pub periods: Vec<ForecastPeriod>,
}

#[derive(Debug, Default, Clone, Deserialize)]
pub struct ForecastPeriod {
    pub name: Option<String>,
    pub temperature: Option<f64>,
    #[serde(rename = "temperatureUnit")]
    pub temperature_unit: Option<String>,
    #[serde(rename = "windSpeed")]
    pub wind_speed: Option<String>,
    #[serde(rename = "windDirection")]
    pub wind_direction: Option<String>,
    #[serde(rename = "shortForecast")]
    pub short_forecast: Option<String>,
}

// ============================================================================
// MCP Tool Request Models
// ============================================================================

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct GetAlertsRequest {
    /// Two-letter US state code (e.g. CA, NY)
    #[schemars(length(min = 2, max = 2))]
    pub state: String,
}

impl GetAlertsRequest {
    pub fn validate(&self) -> Result<(), McpError> {
        let len = self.state.chars().count();
        if len != 2 {
            return Err(McpError::invalid_params(
                format!("state must be exactly 2 characters, got {}", len),
                None,
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct GetForecastRequest {
    /// Latitude of the location
    #[schemars(range(min = -90, max = 90))]
    pub latitude: f64,
    /// Longitude of the location
    #[schemars(range(min = -180, max = 180))]
    pub longitude: f64,
}

impl GetForecastRequest {
    pub fn validate(&self) -> Result<(), McpError> {
        if !(-90.0..=90.0).contains(&self.latitude) {
            return Err(McpError::invalid_params(
                format!("latitude must be between -90 and 90, got {}", self.latitude),
                None,
            ));
        }
        if !(-180.0..=180.0).contains(&self.longitude) {
            return Err(McpError::invalid_params(
                format!(
                    "longitude must be between -180 and 180, got {}",
                    self.longitude
                ),
                None,
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct RenderPromptRequest {
    /// Id of the prompt to render (see list-prompts)
    #[serde(rename = "promptId")]
    pub prompt_id: String,
    /// Values substituted into the template's {placeholders}
    #[serde(default)]
    pub variables: Option<serde_json::Map<String, serde_json::Value>>,
}

// ============================================================================
// MCP Prompt Argument Models
// ============================================================================

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct ForecastSummaryArgs {
    /// Human-readable location name
    pub location: String,
    /// Latitude of the location
    pub latitude: String,
    /// Longitude of the location
    pub longitude: String,
}

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct SevereWeatherAlertsArgs {
    /// Two-letter US state code
    pub state: String,
}

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct HeatSafetyTipsArgs {
    /// Human-readable location name
    pub location: String,
    /// Expected high temperature, including unit
    pub temperature: String,
}

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct TravelAdvisoryArgs {
    /// Starting location
    pub origin: String,
    /// Destination
    pub destination: String,
    /// Date of travel
    pub travel_date: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn alert_fields_are_optional() {
        let alerts: AlertResponse = serde_json::from_value(json!({
            "features": [{ "properties": { "event": "Flood Watch" } }, {}]
        }))
        .unwrap();
        assert_eq!(alerts.features.len(), 2);
        assert_eq!(alerts.features[0].properties.event.as_deref(), Some("Flood Watch"));
        assert!(alerts.features[0].properties.headline.is_none());
        assert!(alerts.features[1].properties.event.is_none());
    }

    #[test]
    fn points_without_forecast_url() {
        let points: PointsResponse =
            serde_json::from_value(json!({ "properties": { "gridId": "OKX" } })).unwrap();
        assert!(points.properties.forecast_url.is_none());
    }

    #[test]
    fn forecast_temperature_accepts_integers() {
        let period: ForecastPeriod = serde_json::from_value(json!({
            "name": "Tonight",
            "temperature": 58,
            "temperatureUnit": "F"
        }))
        .unwrap();
        assert_eq!(period.temperature, Some(58.0));
    }

    #[test]
    fn state_must_be_two_characters() {
        assert!(GetAlertsRequest { state: "ca".into() }.validate().is_ok());
        assert!(GetAlertsRequest { state: "C".into() }.validate().is_err());
        assert!(GetAlertsRequest { state: "CAL".into() }.validate().is_err());
        assert!(GetAlertsRequest { state: String::new() }.validate().is_err());
    }

    #[test]
    fn coordinates_must_be_in_range() {
        let request = |latitude, longitude| GetForecastRequest { latitude, longitude };
        assert!(request(90.0, -180.0).validate().is_ok());
        assert!(request(-90.0, 180.0).validate().is_ok());
        assert!(request(91.0, 0.0).validate().is_err());
        assert!(request(-90.5, 0.0).validate().is_err());
        assert!(request(0.0, 180.1).validate().is_err());
        assert!(request(f64::NAN, 0.0).validate().is_err());
    }

    #[test]
    fn render_request_variables_are_optional() {
        let request: RenderPromptRequest =
            serde_json::from_value(json!({ "promptId": "heat-safety-tips" })).unwrap();
        assert_eq!(request.prompt_id, "heat-safety-tips");
        assert!(request.variables.is_none());
    }
}
