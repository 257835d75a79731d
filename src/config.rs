// SPDX-License-Identifier: MIT
// Copyright 2026 Activity Tracker Contributors

//! Application configuration loaded from environment variables.

use std::env;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Frontend origin allowed by CORS
    pub frontend_url: String,
    /// Base path the route table is mounted under (history base)
    pub base_path: String,
    /// Server port
    pub port: u16,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let base_path = env::var("BASE_PATH").unwrap_or_else(|_| "/".to_string());
        if !base_path.starts_with('/') {
            return Err(ConfigError::Invalid("BASE_PATH must start with '/'"));
        }
        if base_path.len() > 1 && base_path.ends_with('/') {
            return Err(ConfigError::Invalid("BASE_PATH must not end with '/'"));
        }

        Ok(Self {
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:5173".to_string()),
            base_path,
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .unwrap_or(8080),
        })
    }

    /// Default config for tests.
    pub fn test_default() -> Self {
        Self {
            frontend_url: "http://localhost:5173".to_string(),
            base_path: "/".to_string(),
            port: 8080,
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    // Single test because env vars are process-global.
    #[test]
    fn test_config_from_env() {
        env::remove_var("FRONTEND_URL");
        env::remove_var("BASE_PATH");
        env::remove_var("PORT");

        let config = Config::from_env().expect("Config should load");
        assert_eq!(config.frontend_url, "http://localhost:5173");
        assert_eq!(config.base_path, "/");
        assert_eq!(config.port, 8080);

        env::set_var("BASE_PATH", "app");
        assert!(matches!(Config::from_env(), Err(ConfigError::Invalid(_))));

        env::set_var("BASE_PATH", "/app/");
        assert!(matches!(Config::from_env(), Err(ConfigError::Invalid(_))));

        env::set_var("BASE_PATH", "/app");
        let config = Config::from_env().expect("Config should load");
        assert_eq!(config.base_path, "/app");

        env::remove_var("BASE_PATH");
    }
}
