//! Prompt catalog and `{placeholder}` template rendering.
//!
//! The catalog is the only place template text lives. Both the generic
//! `render-prompt` tool and the dedicated MCP prompts render from it.

use std::collections::HashMap;
use std::fmt;

use serde_json::{Map, Number, Value};

use crate::models::{
    ForecastSummaryArgs, HeatSafetyTipsArgs, SevereWeatherAlertsArgs, TravelAdvisoryArgs,
};

/// A parameterized prompt template
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromptDefinition {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub template: &'static str,
}

pub const FORECAST_SUMMARY: &str = "forecast-summary";
pub const SEVERE_WEATHER_ALERTS: &str = "severe-weather-alerts";
pub const HEAT_SAFETY_TIPS: &str = "heat-safety-tips";
pub const TRAVEL_ADVISORY: &str = "travel-advisory";

pub static CATALOG: &[PromptDefinition] = &[
    PromptDefinition {
        id: FORECAST_SUMMARY,
        title: "Forecast Summary",
        description: "Summarize the upcoming weather forecast for a location",
        template: "Summarize the weather forecast for {location} (latitude {latitude}, \
                   longitude {longitude}). Use the get-forecast tool with these coordinates, \
                   then describe the next few periods in plain language, highlighting \
                   temperature trends, precipitation and wind.",
    },
    PromptDefinition {
        id: SEVERE_WEATHER_ALERTS,
        title: "Severe Weather Alerts",
        description: "Review active severe weather alerts for a US state",
        template: "Check for active severe weather alerts in {state} using the get-alerts \
                   tool. Summarize each alert's event, affected area and severity, then list \
                   the protective actions people in those areas should take.",
    },
    PromptDefinition {
        id: HEAT_SAFETY_TIPS,
        title: "Heat Safety Tips",
        description: "Heat safety guidance for hot weather at a location",
        template: "Temperatures in {location} are expected to reach {temperature}. Provide \
                   practical heat safety tips covering hydration, recognizing heat exhaustion \
                   and heat stroke, and protecting children, older adults and pets.",
    },
    PromptDefinition {
        id: TRAVEL_ADVISORY,
        title: "Travel Advisory",
        description: "Weather travel advisory for a trip between two locations",
        template: "Create a weather travel advisory for a trip from {origin} to {destination} \
                   on {travel_date}. Check forecasts and active alerts along the route and \
                   recommend whether to travel as planned, delay, or take extra precautions.",
    },
];

/// Looks up a catalog entry by id
pub fn find(id: &str) -> Option<&'static PromptDefinition> {
    CATALOG.iter().find(|p| p.id == id)
}

/// A value substituted into a template placeholder
#[derive(Debug, Clone, PartialEq)]
pub enum TemplateValue {
    Text(String),
    Number(Number),
    Bool(bool),
    Json(Value),
}

impl TemplateValue {
    /// Converts a JSON value; `null` has no substitution
    pub fn from_json(value: Value) -> Option<Self> {
        match value {
            Value::Null => None,
            Value::String(s) => Some(Self::Text(s)),
            Value::Number(n) => Some(Self::Number(n)),
            Value::Bool(b) => Some(Self::Bool(b)),
            other => Some(Self::Json(other)),
        }
    }
}

impl fmt::Display for TemplateValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            // f64 Display drops a trailing ".0"
            Self::Number(n) => match n.as_f64() {
                Some(x) if n.is_f64() => write!(f, "{}", x),
                _ => write!(f, "{}", n),
            },
            Self::Bool(b) => write!(f, "{}", b),
            // Value's Display is compact JSON
            Self::Json(v) => write!(f, "{}", v),
        }
    }
}

impl From<String> for TemplateValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&str> for TemplateValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

pub type Variables = HashMap<String, TemplateValue>;

/// Builds template variables from a JSON object, dropping null entries
pub fn variables_from_json(map: Map<String, Value>) -> Variables {
    map.into_iter()
        .filter_map(|(k, v)| TemplateValue::from_json(v).map(|v| (k, v)))
        .collect()
}

/// Replaces each `{token}` with its variable in a single left-to-right pass.
///
/// Tokens without a variable are left as written. Substituted text is not
/// scanned again.
pub fn render(template: &str, variables: Option<&Variables>) -> String {
    let Some(variables) = variables else {
        return template.to_string();
    };

    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        match after.find('}') {
            Some(close) if close > 0 => {
                let token = &after[..close];
                match variables.get(token) {
                    Some(value) => out.push_str(&value.to_string()),
                    None => {
                        out.push('{');
                        out.push_str(token);
                        out.push('}');
                    }
                }
                rest = &after[close + 1..];
            }
            _ => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

/// Text listing every catalog entry
pub fn format_catalog() -> String {
    let entries: Vec<String> = CATALOG
        .iter()
        .map(|p| {
            format!(
                "{} - {}: {}\nTemplate: {}",
                p.id, p.title, p.description, p.template
            )
        })
        .collect();
    format!(
        "Available prompts ({}):\n\n{}",
        CATALOG.len(),
        entries.join("\n\n")
    )
}

/// Renders a catalog prompt by id for the `render-prompt` tool
pub fn render_by_id(prompt_id: &str, variables: Option<&Variables>) -> String {
    match find(prompt_id) {
        Some(prompt) => format!(
            "Prompt: {}\n\n{}",
            prompt.title,
            render(prompt.template, variables)
        ),
        None => format!("Prompt not found: {}", prompt_id),
    }
}

/// Typed arguments of a dedicated prompt, bound to its catalog entry
pub trait PromptArgs {
    const PROMPT_ID: &'static str;

    fn into_variables(self) -> Variables;

    fn definition() -> &'static PromptDefinition {
        find(Self::PROMPT_ID).unwrap_or_else(|| unreachable!("{} is in CATALOG", Self::PROMPT_ID))
    }
}

fn vars<const N: usize>(pairs: [(&str, String); N]) -> Variables {
    pairs
        .into_iter()
        .map(|(k, v)| (k.to_string(), TemplateValue::Text(v)))
        .collect()
}

impl PromptArgs for ForecastSummaryArgs {
    const PROMPT_ID: &'static str = FORECAST_SUMMARY;

    fn into_variables(self) -> Variables {
        vars([
            ("location", self.location),
            ("latitude", self.latitude),
            ("longitude", self.longitude),
        ])
    }
}

impl PromptArgs for SevereWeatherAlertsArgs {
    const PROMPT_ID: &'static str = SEVERE_WEATHER_ALERTS;

    fn into_variables(self) -> Variables {
        vars([("state", self.state)])
    }
}

impl PromptArgs for HeatSafetyTipsArgs {
    const PROMPT_ID: &'static str = HEAT_SAFETY_TIPS;

    fn into_variables(self) -> Variables {
        vars([
            ("location", self.location),
            ("temperature", self.temperature),
        ])
    }
}

impl PromptArgs for TravelAdvisoryArgs {
    const PROMPT_ID: &'static str = TRAVEL_ADVISORY;

    fn into_variables(self) -> Variables {
        vars([
            ("origin", self.origin),
            ("destination", self.destination),
            ("travel_date", self.travel_date),
        ])
    }
}
