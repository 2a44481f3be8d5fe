//! Application configuration for the CLI
//!
//! Environment variable loading and validation for the settings that are not
//! part of the scoring policy itself.

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::env;

/// Settings for the CLI entry point
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Name used in log output
    pub name: String,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Target pool size a full lobby is expected to reach
    pub pool_size: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            name: "inhouse-rating".to_string(),
            log_level: "info".to_string(),
            pool_size: 10,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables with fallback to defaults
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(name) = env::var("SERVICE_NAME") {
            config.name = name;
        }
        if let Ok(log_level) = env::var("LOG_LEVEL") {
            config.log_level = log_level;
        }
        if let Ok(pool_size) = env::var("POOL_SIZE") {
            config.pool_size = pool_size
                .parse()
                .map_err(|_| anyhow!("Invalid POOL_SIZE value: {}", pool_size))?;
        }

        validate_config(&config)?;
        Ok(config)
    }
}

/// Validate configuration values
pub fn validate_config(config: &AppConfig) -> Result<()> {
    match config.log_level.to_lowercase().as_str() {
        "trace" | "debug" | "info" | "warn" | "error" => {}
        _ => return Err(anyhow!("Invalid log level: {}", config.log_level)),
    }

    if config.pool_size == 0 {
        return Err(anyhow!("Pool size must be greater than 0"));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        assert!(validate_config(&config).is_ok());
        assert_eq!(config.pool_size, 10);
    }

    #[test]
    fn test_invalid_log_level_rejected() {
        let config = AppConfig {
            log_level: "loud".to_string(),
            ..AppConfig::default()
        };
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_zero_pool_size_rejected() {
        let config = AppConfig {
            pool_size: 0,
            ..AppConfig::default()
        };
        assert!(validate_config(&config).is_err());
    }
}
