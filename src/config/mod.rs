use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::info;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub routes: RoutesConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the backend API
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:3333".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

#[derive(Debug, Clone, Deserialize)]
pub struct RoutesConfig {
    /// Where to send the user after a successful update
    #[serde(default = "default_dashboard")]
    pub dashboard: String,
}

impl Default for RoutesConfig {
    fn default() -> Self {
        Self {
            dashboard: default_dashboard(),
        }
    }
}

fn default_dashboard() -> String {
    "/dashboard".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        if path.exists() {
            info!("Loading configuration from {}", path.display());
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file: {}", path.display()))?;
            let config: Config = toml::from_str(&content)
                .with_context(|| "Failed to parse configuration file")?;
            Ok(config)
        } else {
            info!("No config file found, using defaults");
            Ok(Config::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.api.base_url, "http://localhost:3333");
        assert_eq!(config.api.timeout_secs, 30);
        assert_eq!(config.routes.dashboard, "/dashboard");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: Config = toml::from_str(
            r#"
            [api]
            base_url = "https://api.example.com"
            "#,
        )
        .unwrap();

        assert_eq!(config.api.base_url, "https://api.example.com");
        assert_eq!(config.api.timeout_secs, 30);
        assert_eq!(config.routes.dashboard, "/dashboard");
    }

    #[test]
    fn test_empty_toml_is_all_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.logging.level, "info");
    }
}
