//! Configuration module
//!
//! Settings are read from a TOML file (default
//! `~/.config/watershare/config.toml`, override with `WATERSHARE_CONFIG`).
//! Missing sections fall back to their defaults.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Top-level application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseSection,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub pricing: PricingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_api_host")]
    pub api_host: String,
    #[serde(default = "default_api_port")]
    pub api_port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            api_host: default_api_host(),
            api_port: default_api_port(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSection {
    /// Path to the SQLite database file
    #[serde(default = "default_db_path")]
    pub path: String,
}

impl DatabaseSection {
    pub fn connection_url(&self) -> String {
        format!("sqlite://{}?mode=rwc", self.path)
    }
}

impl Default for DatabaseSection {
    fn default() -> Self {
        Self {
            path: default_db_path(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Tracing filter directive, e.g. "info" or "watershare=debug"
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

#[derive(Debug, Clone, Deserialize)]
pub struct PricingConfig {
    /// Regional multiplier applied to tariff-table prices
    #[serde(default = "default_coefficient")]
    pub coefficient: f64,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            coefficient: default_coefficient(),
        }
    }
}

fn default_api_host() -> String {
    "0.0.0.0".to_string()
}

fn default_api_port() -> u16 {
    8080
}

fn default_db_path() -> String {
    "./watershare.db".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_coefficient() -> f64 {
    1.0
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(ConfigError::Io)?;
        toml::from_str(&raw).map_err(ConfigError::Parse)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Default config file location: `~/.config/watershare/config.toml`.
pub fn default_config_path() -> PathBuf {
    dirs_next::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("watershare")
        .join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let cfg: AppConfig = toml::from_str("").unwrap();
        assert_eq!(cfg.server.api_port, 8080);
        assert_eq!(cfg.database.path, "./watershare.db");
        assert_eq!(cfg.logging.level, "info");
        assert_eq!(cfg.pricing.coefficient, 1.0);
    }

    #[test]
    fn partial_sections_fill_in_the_rest() {
        let cfg: AppConfig = toml::from_str(
            r#"
            [server]
            api_port = 9090

            [pricing]
            coefficient = 1.25
            "#,
        )
        .unwrap();
        assert_eq!(cfg.server.api_host, "0.0.0.0");
        assert_eq!(cfg.server.api_port, 9090);
        assert_eq!(cfg.pricing.coefficient, 1.25);
    }

    #[test]
    fn connection_url_wraps_the_path() {
        let db = DatabaseSection {
            path: "/var/lib/watershare/data.db".to_string(),
        };
        assert_eq!(
            db.connection_url(),
            "sqlite:///var/lib/watershare/data.db?mode=rwc"
        );
    }
}
