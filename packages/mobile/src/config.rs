//! Startup configuration: `medtrack.toml` in the data directory, then
//! environment overrides (a `.env` file is loaded first when present).
//!
//! | Variable | Overrides |
//! |----------|-----------|
//! | `MEDTRACK_API_URL` | `[api] base_url` |
//! | `MEDTRACK_LOG` | `[logging] level` (any `tracing` filter directive) |

use std::path::Path;

use store::config::ConfigError;
use store::AppConfig;

pub const API_URL_VAR: &str = "MEDTRACK_API_URL";
pub const LOG_VAR: &str = "MEDTRACK_LOG";

/// Read the config file. A missing file is the default configuration.
pub fn load_file(path: &Path) -> Result<AppConfig, ConfigError> {
    match std::fs::read_to_string(path) {
        Ok(raw) => AppConfig::from_toml(&raw),
        Err(_) => Ok(AppConfig::default()),
    }
}

pub fn apply_env(config: AppConfig, var: impl Fn(&str) -> Option<String>) -> AppConfig {
    let mut config = config;
    if let Some(url) = var(API_URL_VAR).filter(|v| !v.trim().is_empty()) {
        config = config.with_base_url(url.trim());
    }
    if let Some(level) = var(LOG_VAR).filter(|v| !v.trim().is_empty()) {
        config = config.with_log_level(level.trim());
    }
    config
}
