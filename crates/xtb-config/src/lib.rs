//! Configuration management.

mod settings;

pub use settings::{AppSettings, LoggingSettings, Settings, StrategySettings, XtbSettings};

use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Configuration loading errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Settings error: {0}")]
    Settings(#[from] config::ConfigError),

    #[error("Keys file error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Keys file parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Account credentials from the JSON keys file.
#[derive(Debug, Clone, Deserialize)]
pub struct Credentials {
    #[serde(rename = "ACCOUNT_ID")]
    pub account_id: String,
    #[serde(rename = "PASSWORD")]
    pub password: String,
    /// Demo account when true
    #[serde(default)]
    pub sandbox: bool,
}

/// Load settings from a TOML file and environment overrides.
///
/// A missing file is not an error: defaults apply, and any
/// `XTB_TRADER`-prefixed environment variable still overrides them.
pub fn load_settings(path: &Path) -> Result<Settings, ConfigError> {
    let config = Config::builder()
        .add_source(File::from(path).required(false))
        .add_source(
            Environment::with_prefix("XTB_TRADER")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    Ok(config.try_deserialize()?)
}

/// Load account credentials from the JSON keys file.
pub fn load_credentials(path: &Path) -> Result<Credentials, ConfigError> {
    let raw = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use xtb_core::types::Resolution;

    #[test]
    fn test_settings_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.app.name, "xtb-trader");
        assert_eq!(settings.logging.level, "info");
        assert_eq!(settings.xtb.keys_path, "keys.json");
        assert_eq!(settings.strategy.symbol, "EURUSD");
        assert_eq!(settings.strategy.resolution, Resolution::Hour1);
        assert_eq!(settings.strategy.ichimoku.order_size, 1.0);
    }

    #[test]
    fn test_settings_from_toml() {
        let settings: Settings = toml::from_str(
            r#"
            [logging]
            level = "debug"
            format = "json"

            [strategy]
            symbol = "USDPLN"
            resolution = "4h"

            [strategy.ichimoku]
            order_size = 0.5
            history_size = 100
            conversion_period = 9
            base_period = 26
            leading_b_period = 52
            displacement = 26
            "#,
        )
        .unwrap();

        assert_eq!(settings.logging.level, "debug");
        assert_eq!(settings.strategy.symbol, "USDPLN");
        assert_eq!(settings.strategy.resolution, Resolution::Hour4);
        assert_eq!(settings.strategy.ichimoku.order_size, 0.5);
        // Untouched sections keep their defaults
        assert_eq!(settings.xtb.keys_path, "keys.json");
    }

    #[test]
    fn test_credentials_from_keys_file_shape() {
        let credentials: Credentials = serde_json::from_str(
            r#"{ "ACCOUNT_ID": "10000", "PASSWORD": "hunter2", "sandbox": true }"#,
        )
        .unwrap();
        assert_eq!(credentials.account_id, "10000");
        assert_eq!(credentials.password, "hunter2");
        assert!(credentials.sandbox);
    }

    #[test]
    fn test_missing_settings_file_falls_back_to_defaults() {
        let settings = load_settings(Path::new("does-not-exist.toml")).unwrap();
        assert_eq!(settings.app.name, "xtb-trader");
    }
}
