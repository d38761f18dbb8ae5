use crate::constants::{DEFAULT_TEMPERATURE_UNIT, NO_FORECAST, NO_HEADLINE, UNKNOWN};
use crate::models::{AlertRecord, ForecastPeriod};

/// Resolves an optional upstream field to its value or a placeholder
fn or_placeholder<'a>(field: &'a Option<String>, placeholder: &'a str) -> &'a str {
    field.as_deref().unwrap_or(placeholder)
}

/// Formats a single alert as a fixed six-line block
pub fn format_alert(alert: &AlertRecord) -> String {
    format!(
        "Event: {}\nArea: {}\nSeverity: {}\nStatus: {}\nHeadline: {}\n---",
        or_placeholder(&alert.event, UNKNOWN),
        or_placeholder(&alert.area_desc, UNKNOWN),
        or_placeholder(&alert.severity, UNKNOWN),
        or_placeholder(&alert.status, UNKNOWN),
        or_placeholder(&alert.headline, NO_HEADLINE),
    )
}

/// Formats a single forecast period
pub fn format_forecast_period(period: &ForecastPeriod) -> String {
    let temperature = period
        .temperature
        .map(|t| t.to_string())
        .unwrap_or_else(|| UNKNOWN.to_string());

    format!(
        "{}:\nTemperature: {}\u{00b0}{}\nWind: {} {}\n{}\n---",
        or_placeholder(&period.name, UNKNOWN),
        temperature,
        or_placeholder(&period.temperature_unit, DEFAULT_TEMPERATURE_UNIT),
        or_placeholder(&period.wind_speed, UNKNOWN),
        or_placeholder(&period.wind_direction, UNKNOWN),
        or_placeholder(&period.short_forecast, NO_FORECAST),
    )
}

/// Formats the alerts for a state into a human-readable report
pub fn format_alerts(state: &str, alerts: &[AlertRecord]) -> String {
    if alerts.is_empty() {
        return format!("No active alerts for {}", state);
    }

    let blocks: Vec<String> = alerts.iter().map(format_alert).collect();
    format!("Active alerts for {}:\n\n{}", state, blocks.join("\n\n"))
}

/// Formats forecast periods for a coordinate into a human-readable report
pub fn format_forecast(latitude: f64, longitude: f64, periods: &[ForecastPeriod]) -> String {
    if periods.is_empty() {
        return "No forecast periods available".to_string();
    }

    let blocks: Vec<String> = periods.iter().map(format_forecast_period).collect();
    format!(
        "Forecast for {}, {}:\n\n{}",
        latitude,
        longitude,
        blocks.join("\n\n")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_alert() -> AlertRecord {
        AlertRecord {
            event: Some("Winter Storm Warning".into()),
            area_desc: Some("Northern Sierra Nevada".into()),
            severity: Some("Severe".into()),
            status: Some("Actual".into()),
            headline: Some("Heavy snow expected above 5000 feet".into()),
        }
    }

    #[test]
    fn full_alert_has_six_lines_in_order() {
        let text = format_alert(&full_alert());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Event: Winter Storm Warning",
                "Area: Northern Sierra Nevada",
                "Severity: Severe",
                "Status: Actual",
                "Headline: Heavy snow expected above 5000 feet",
                "---",
            ]
        );
    }

    #[test]
    fn empty_alert_uses_placeholders() {
        let text = format_alert(&AlertRecord::default());
        assert_eq!(
            text,
            "Event: Unknown\nArea: Unknown\nSeverity: Unknown\nStatus: Unknown\nHeadline: No headline\n---"
        );
    }

    #[test]
    fn full_period() {
        let period = ForecastPeriod {
            name: Some("Tonight".into()),
            temperature: Some(58.0),
            temperature_unit: Some("F".into()),
            wind_speed: Some("5 to 10 mph".into()),
            wind_direction: Some("SW".into()),
            short_forecast: Some("Partly Cloudy".into()),
        };
        assert_eq!(
            format_forecast_period(&period),
            "Tonight:\nTemperature: 58°F\nWind: 5 to 10 mph SW\nPartly Cloudy\n---"
        );
    }

    #[test]
    fn missing_temperature_is_unknown_fahrenheit() {
        let text = format_forecast_period(&ForecastPeriod::default());
        assert!(text.contains("Temperature: Unknown°F"));
        assert!(text.contains("No forecast available"));
        assert!(text.starts_with("Unknown:\n"));
    }

    #[test]
    fn fractional_temperature_is_kept() {
        let period = ForecastPeriod {
            temperature: Some(-3.5),
            temperature_unit: Some("C".into()),
            ..Default::default()
        };
        assert!(format_forecast_period(&period).contains("Temperature: -3.5°C"));
    }

    #[test]
    fn alerts_report() {
        let text = format_alerts("CA", &[full_alert(), AlertRecord::default()]);
        assert!(text.starts_with("Active alerts for CA:\n\nEvent: Winter Storm Warning"));
        assert!(text.contains("---\n\nEvent: Unknown"));
        assert_eq!(text.matches("---").count(), 2);
    }

    #[test]
    fn no_alerts_report() {
        let text = format_alerts("WY", &[]);
        assert_eq!(text, "No active alerts for WY");
        assert!(!text.contains("---"));
    }

    #[test]
    fn forecast_report() {
        let text = format_forecast(40.7128, -74.006, &[ForecastPeriod::default()]);
        assert!(text.starts_with("Forecast for 40.7128, -74.006:\n\n"));
        assert_eq!(format_forecast(1.0, 2.0, &[]), "No forecast periods available");
    }
}
