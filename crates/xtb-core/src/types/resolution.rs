//! Candle resolutions the vendor serves.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Candle resolution.
///
/// The vendor's chart range endpoint takes the period as a whole number of
/// minutes, so only these resolutions exist; anything else must be rejected
/// before a request is made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Resolution {
    /// 1 minute candles
    #[serde(rename = "1m")]
    Minute1,
    /// 5 minute candles
    #[serde(rename = "5m")]
    Minute5,
    /// 15 minute candles
    #[serde(rename = "15m")]
    Minute15,
    /// 30 minute candles
    #[serde(rename = "30m")]
    Minute30,
    /// 1 hour candles
    #[serde(rename = "1h")]
    #[default]
    Hour1,
    /// 4 hour candles
    #[serde(rename = "4h")]
    Hour4,
    /// Daily candles
    #[serde(rename = "1d")]
    Daily,
    /// Weekly candles
    #[serde(rename = "1w")]
    Weekly,
    /// Monthly candles (30 days)
    #[serde(rename = "1M")]
    Monthly,
}

impl Resolution {
    /// Get the duration of the resolution in seconds.
    pub fn as_secs(&self) -> u64 {
        match self {
            Resolution::Minute1 => 60,
            Resolution::Minute5 => 300,
            Resolution::Minute15 => 900,
            Resolution::Minute30 => 1800,
            Resolution::Hour1 => 3600,
            Resolution::Hour4 => 14400,
            Resolution::Daily => 86400,
            Resolution::Weekly => 604800,
            Resolution::Monthly => 2592000,
        }
    }

    /// The vendor period code: the resolution as whole minutes.
    pub fn period_minutes(&self) -> u64 {
        self.as_secs() / 60
    }

    /// Resolve a resolution from a duration in seconds.
    ///
    /// Returns `None` for durations the vendor does not serve, including any
    /// duration that is not a whole number of minutes.
    pub fn from_secs(secs: u64) -> Option<Resolution> {
        Resolution::all().iter().find(|r| r.as_secs() == secs).copied()
    }

    /// Get all vendor-supported resolutions.
    pub fn all() -> &'static [Resolution] {
        &[
            Resolution::Minute1,
            Resolution::Minute5,
            Resolution::Minute15,
            Resolution::Minute30,
            Resolution::Hour1,
            Resolution::Hour4,
            Resolution::Daily,
            Resolution::Weekly,
            Resolution::Monthly,
        ]
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Resolution::Minute1 => "1m",
            Resolution::Minute5 => "5m",
            Resolution::Minute15 => "15m",
            Resolution::Minute30 => "30m",
            Resolution::Hour1 => "1h",
            Resolution::Hour4 => "4h",
            Resolution::Daily => "1d",
            Resolution::Weekly => "1w",
            Resolution::Monthly => "1M",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Resolution {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1m" | "1min" => Ok(Resolution::Minute1),
            "5m" | "5min" => Ok(Resolution::Minute5),
            "15m" | "15min" => Ok(Resolution::Minute15),
            "30m" | "30min" => Ok(Resolution::Minute30),
            "1h" | "1hour" | "hour" => Ok(Resolution::Hour1),
            "4h" | "4hour" => Ok(Resolution::Hour4),
            "1d" | "day" | "daily" => Ok(Resolution::Daily),
            "1w" | "week" | "weekly" => Ok(Resolution::Weekly),
            "1M" | "month" | "monthly" => Ok(Resolution::Monthly),
            _ => Err(format!("Invalid resolution: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_period_minutes() {
        assert_eq!(Resolution::Minute1.period_minutes(), 1);
        assert_eq!(Resolution::Hour4.period_minutes(), 240);
        assert_eq!(Resolution::Monthly.period_minutes(), 43200);
    }

    #[test]
    fn test_from_secs() {
        assert_eq!(Resolution::from_secs(3600), Some(Resolution::Hour1));
        assert_eq!(Resolution::from_secs(604800), Some(Resolution::Weekly));
        // Not a whole number of minutes
        assert_eq!(Resolution::from_secs(90), None);
        // Whole minutes, but not a vendor period
        assert_eq!(Resolution::from_secs(120), None);
    }

    #[test]
    fn test_parse_and_display() {
        assert_eq!(Resolution::from_str("1h").unwrap(), Resolution::Hour1);
        assert_eq!(Resolution::from_str("1M").unwrap(), Resolution::Monthly);
        assert_eq!(Resolution::Daily.to_string(), "1d");
        assert!(Resolution::from_str("2h").is_err());
    }
}
