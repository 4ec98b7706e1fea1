//! # Client configuration (`medtrack.toml`)
//!
//! Optional TOML file in the app's data directory. Every section and field has a
//! production default, so a missing or empty file is the default configuration.
//!
//! ```toml
//! [api]
//! base_url = "https://api.medtrack.app/api"
//!
//! [barcode]
//! service_url = "https://bwipjs-api.metafloor.com/"
//! symbology = "code128"
//! scale = 3
//! height = 10
//!
//! [logging]
//! level = "info"
//! ```
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`AppConfig`] | Top-level config with TOML (de)serialisation and the canonical filename. |
//! | [`ApiConfig`] | Backend base URL, including the `/api` prefix. |
//! | [`BarcodeConfig`] | Remote barcode rendering endpoint and its rendering parameters. |
//! | [`LoggingConfig`] | Default `tracing` level. |

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub barcode: BarcodeConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    "https://api.medtrack.app/api".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BarcodeConfig {
    #[serde(default = "default_service_url")]
    pub service_url: String,
    #[serde(default = "default_symbology")]
    pub symbology: String,
    #[serde(default = "default_scale")]
    pub scale: u32,
    #[serde(default = "default_height")]
    pub height: u32,
}

fn default_service_url() -> String {
    "https://bwipjs-api.metafloor.com/".to_string()
}

fn default_symbology() -> String {
    "code128".to_string()
}

fn default_scale() -> u32 {
    3
}

fn default_height() -> u32 {
    10
}

impl Default for BarcodeConfig {
    fn default() -> Self {
        Self {
            service_url: default_service_url(),
            symbology: default_symbology(),
            scale: default_scale(),
            height: default_height(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_level")]
    pub level: String,
}

fn default_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

impl AppConfig {
    /// Builder method to point the client at another backend.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.api.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.logging.level = level.into();
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "medtrack.toml"
    }

    pub fn from_toml(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        let config = AppConfig::from_toml("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.barcode.symbology, "code128");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let config = AppConfig::from_toml(
            r#"
            [barcode]
            scale = 2
            "#,
        )
        .unwrap();
        assert_eq!(config.barcode.scale, 2);
        assert_eq!(config.barcode.height, 10);
        assert_eq!(config.api.base_url, "https://api.medtrack.app/api");
    }

    #[test]
    fn test_toml_roundtrip_with_overrides() {
        let config = AppConfig::default()
            .with_base_url("http://localhost:5000/api/")
            .with_log_level("debug");
        assert_eq!(config.api.base_url, "http://localhost:5000/api");

        let text = config.to_toml().unwrap();
        assert_eq!(AppConfig::from_toml(&text).unwrap(), config);
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        assert!(matches!(
            AppConfig::from_toml("[api\nbase_url = 1"),
            Err(ConfigError::Parse(_))
        ));
    }
}
