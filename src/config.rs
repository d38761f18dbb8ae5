use crate::constants::{API_BASE_ENV, NWS_API_BASE, USER_AGENT, USER_AGENT_ENV};

/// Runtime settings for the upstream client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub api_base: String,
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: NWS_API_BASE.to_string(),
            user_agent: USER_AGENT.to_string(),
        }
    }
}

impl Config {
    /// Reads overrides from the process environment, falling back to defaults
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            api_base: non_empty(API_BASE_ENV)
                .map(|v| v.trim().trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_base),
            user_agent: non_empty(USER_AGENT_ENV).unwrap_or(defaults.user_agent),
        }
    }
}
