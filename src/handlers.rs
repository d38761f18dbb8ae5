use reqwest::Url;

use crate::client::{fetch, Fetch};
use crate::formatters::{format_alerts, format_forecast};
use crate::models::{AlertRecord, AlertResponse, ForecastResponse, PointsResponse};

/// Weather lookups that turn upstream data into report text.
///
/// Every outcome, including upstream failure, is a user-facing string.
pub struct WeatherHandlers<F> {
    client: F,
    api_base: String,
}

impl<F: Fetch> WeatherHandlers<F> {
    pub fn new(client: F, api_base: impl Into<String>) -> Self {
        Self {
            client,
            api_base: api_base.into(),
        }
    }

    /// Active alerts for a two-letter state code
    pub async fn alerts(&self, state: &str) -> String {
        let state = state.to_uppercase();
        let url = match Url::parse_with_params(
            &format!("{}/alerts", self.api_base),
            &[("area", state.as_str())],
        ) {
            Ok(url) => url,
            Err(e) => {
                tracing::error!(api_base = %self.api_base, error = %e, "Invalid alerts URL");
                return "Failed to retrieve alerts data".to_string();
            }
        };

        let Some(alerts) = fetch::<_, AlertResponse>(&self.client, url.as_str()).await else {
            return "Failed to retrieve alerts data".to_string();
        };

        let records: Vec<AlertRecord> = alerts
            .features
            .into_iter()
            .map(|feature| feature.properties)
            .collect();
        format_alerts(&state, &records)
    }

    /// Forecast for a coordinate, resolved through its grid point
    pub async fn forecast(&self, latitude: f64, longitude: f64) -> String {
        let points_url = format!("{}/points/{:.4},{:.4}", self.api_base, latitude, longitude);

        let Some(points) = fetch::<_, PointsResponse>(&self.client, &points_url).await else {
            return format!(
                "Failed to retrieve grid point data for coordinates: {}, {}. \
                 This location may not be supported by the NWS API (only US locations are supported).",
                latitude, longitude
            );
        };

        let Some(forecast_url) = points.properties.forecast_url else {
            tracing::error!(url = %points_url, "Grid point response has no forecast URL");
            return "Failed to get forecast URL from grid point data".to_string();
        };

        let Some(forecast) = fetch::<_, ForecastResponse>(&self.client, &forecast_url).await else {
            return "Failed to retrieve forecast data".to_string();
        };

        format_forecast(latitude, longitude, &forecast.properties.periods)
    }
}
