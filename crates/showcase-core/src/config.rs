//! App Configuration
//!
//! A WASM bundle has no process environment at runtime, so settings are
//! captured from the build environment.

use log::LevelFilter;

pub const ENV_LOG_LEVEL: &str = "TEAMS_HQ_LOG_LEVEL";
pub const ENV_MOCK_LATENCY_MS: &str = "TEAMS_HQ_MOCK_LATENCY_MS";
pub const ENV_MOCK_FAILURE: &str = "TEAMS_HQ_MOCK_FAILURE";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub log_level: LevelFilter,
    /// Simulated network delay of the mocked API
    pub mock_latency_ms: u32,
    /// Start with every mocked request failing
    pub mock_failure: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: LevelFilter::Info,
            mock_latency_ms: 350,
            mock_failure: false,
        }
    }
}

impl AppConfig {
    /// Values baked in by `cargo build` / `trunk build`
    pub fn from_build_env() -> Self {
        Self::from_lookup(|key| {
            match key {
                ENV_LOG_LEVEL => option_env!("TEAMS_HQ_LOG_LEVEL"),
                ENV_MOCK_LATENCY_MS => option_env!("TEAMS_HQ_MOCK_LATENCY_MS"),
                ENV_MOCK_FAILURE => option_env!("TEAMS_HQ_MOCK_FAILURE"),
                _ => None,
            }
            .map(str::to_string)
        })
    }

    /// Build from any key lookup; unset or unparsable values keep defaults
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            log_level: lookup(ENV_LOG_LEVEL)
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.log_level),
            mock_latency_ms: lookup(ENV_MOCK_LATENCY_MS)
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.mock_latency_ms),
            mock_failure: lookup(ENV_MOCK_FAILURE)
                .map(|v| matches!(v.as_str(), "1" | "true" | "yes"))
                .unwrap_or(defaults.mock_failure),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults_when_unset() {
        assert_eq!(AppConfig::from_lookup(|_| None), AppConfig::default());
    }

    #[test]
    fn test_lookup_overrides() {
        let env: HashMap<&str, &str> = [
            (ENV_LOG_LEVEL, "debug"),
            (ENV_MOCK_LATENCY_MS, "0"),
            (ENV_MOCK_FAILURE, "true"),
        ]
        .into_iter()
        .collect();
        let config = AppConfig::from_lookup(|k| env.get(k).map(|v| v.to_string()));
        assert_eq!(config.log_level, LevelFilter::Debug);
        assert_eq!(config.mock_latency_ms, 0);
        assert!(config.mock_failure);
    }

    #[test]
    fn test_bad_values_keep_defaults() {
        let config = AppConfig::from_lookup(|k| match k {
            ENV_MOCK_LATENCY_MS => Some("soon".to_string()),
            ENV_LOG_LEVEL => Some("loud".to_string()),
            _ => None,
        });
        assert_eq!(config, AppConfig::default());
    }
}
