/// User agent string for HTTP requests
pub const USER_AGENT: &str = concat!("weather-prompt-server/", env!("CARGO_PKG_VERSION"));

/// National Weather Service API base URL
pub const NWS_API_BASE: &str = "https://api.weather.gov";

/// Content type requested from the NWS API
pub const GEO_JSON: &str = "application/geo+json";

/// Environment variable overriding [`NWS_API_BASE`]
pub const API_BASE_ENV: &str = "NWS_API_BASE";

/// Environment variable overriding [`USER_AGENT`]
pub const USER_AGENT_ENV: &str = "NWS_USER_AGENT";

// Placeholders for fields missing from upstream records.
pub const UNKNOWN: &str = "Unknown";
pub const NO_HEADLINE: &str = "No headline";
pub const NO_FORECAST: &str = "No forecast available";
pub const DEFAULT_TEMPERATURE_UNIT: &str = "F";
