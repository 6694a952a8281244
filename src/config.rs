use std::env;

use crate::logic::geometry::DEFAULT_GRID_SIZE;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("{key} must be a positive number of pixels, got '{value}'")]
    InvalidGridSize { key: &'static str, value: String },
}

/// Runtime settings, read from the environment (and an optional `.env` file).
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub bind_addr: String,
    /// Canvas cell size in pixels used when a request does not give one.
    pub grid_size: f64,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.into(),
            grid_size: DEFAULT_GRID_SIZE,
            log_level: DEFAULT_LOG_LEVEL.into(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from any key lookup, so tests need not touch the process env.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(addr) = lookup("ALLOTMENT_BIND_ADDR") {
            config.bind_addr = addr;
        }
        if let Some(level) = lookup("ALLOTMENT_LOG_LEVEL") {
            config.log_level = level;
        }
        if let Some(raw) = lookup("ALLOTMENT_GRID_SIZE") {
            config.grid_size = raw
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite() && *v > 0.0)
                .ok_or(ConfigError::InvalidGridSize {
                    key: "ALLOTMENT_GRID_SIZE",
                    value: raw.clone(),
                })?;
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_env_empty() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.grid_size, 30.0);
    }

    #[test]
    fn test_overrides_are_read() {
        let config = Config::from_lookup(lookup(&[
            ("ALLOTMENT_BIND_ADDR", "127.0.0.1:9000"),
            ("ALLOTMENT_GRID_SIZE", "24"),
            ("ALLOTMENT_LOG_LEVEL", "debug"),
        ]))
        .unwrap();
        assert_eq!(config.bind_addr, "127.0.0.1:9000");
        assert_eq!(config.grid_size, 24.0);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_invalid_grid_size_is_rejected() {
        for bad in ["0", "-5", "abc"] {
            let result = Config::from_lookup(lookup(&[("ALLOTMENT_GRID_SIZE", bad)]));
            assert!(result.is_err(), "grid size '{bad}' must be rejected");
        }
    }
}
