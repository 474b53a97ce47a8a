//! Configuration management for the weather server.
//!
//! The configuration is an explicitly constructed, immutable value passed
//! into the server at construction time. The weather catalog is part of it,
//! so tests can run isolated server instances against their own tables.

use serde::{Deserialize, Serialize};

use crate::domains::weather::WeatherCatalog;

/// Main configuration structure for the weather server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// The weather catalog served by the `get_weather` tool.
    pub weather: WeatherCatalog,

    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "weather-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            weather: WeatherCatalog::default(),
            logging: LoggingConfig {
                level: "info".to_string(),
            },
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Only ambient knobs are read: `MCP_SERVER_NAME` and `MCP_LOG_LEVEL`.
    /// The weather catalog itself is fixed at construction and never comes
    /// from the environment.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_server_name_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_SERVER_NAME", "weather-test");
        }
        let config = Config::from_env();
        assert_eq!(config.server.name, "weather-test");
        unsafe {
            std::env::remove_var("MCP_SERVER_NAME");
        }
    }

    #[test]
    fn test_server_name_default_fallback() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::remove_var("MCP_SERVER_NAME");
        }
        let config = Config::from_env();
        assert_eq!(config.server.name, "weather-server");
    }

    #[test]
    fn test_default_config_seeds_catalog() {
        let config = Config::default();
        assert_eq!(config.weather.reading_for("london").temperature, 15);
        assert_eq!(config.weather.len(), 4);
    }
}
