//! Configuration structures.

use serde::{Deserialize, Serialize};
use xtb_core::types::Resolution;
use xtb_strategies::IchimokuConfig;

/// Main application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Settings {
    #[serde(default)]
    pub app: AppSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
    #[serde(default)]
    pub xtb: XtbSettings,
    #[serde(default)]
    pub strategy: StrategySettings,
}

/// General app settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    pub name: String,
    pub environment: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            name: "xtb-trader".to_string(),
            environment: "development".to_string(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub format: String,
    pub file: Option<String>,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
            file: None,
        }
    }
}

/// Connector settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct XtbSettings {
    /// Path of the JSON keys file holding ACCOUNT_ID and PASSWORD
    pub keys_path: String,
    /// Application name sent with the login command
    pub app_name: String,
}

impl Default for XtbSettings {
    fn default() -> Self {
        Self {
            keys_path: "keys.json".to_string(),
            app_name: String::new(),
        }
    }
}

/// Strategy loop settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrategySettings {
    /// Symbol the strategy trades
    pub symbol: String,
    /// Candle resolution of the bar stream
    pub resolution: Resolution,
    /// Ichimoku parameters
    #[serde(default)]
    pub ichimoku: IchimokuConfig,
}

impl Default for StrategySettings {
    fn default() -> Self {
        Self {
            symbol: "EURUSD".to_string(),
            resolution: Resolution::Hour1,
            ichimoku: IchimokuConfig::default(),
        }
    }
}
