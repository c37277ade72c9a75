//! Raw vendor wire records.
//!
//! Field names and units follow the vendor payloads verbatim; normalization
//! into the shapes strategy code consumes happens in the exchange layer.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use xtb_core::types::BalanceSnapshot;

/// One entry of the `getAllSymbols` response.
#[derive(Debug, Clone, Deserialize)]
pub struct SymbolRecord {
    pub symbol: String,
    /// Pair description, e.g. "USD/PLN"
    pub description: String,
    /// Margin currency of the instrument
    pub currency: String,
    pub ask: f64,
    pub bid: f64,
    #[serde(rename = "categoryName")]
    pub category_name: String,
    #[serde(rename = "lotMin")]
    pub lot_min: f64,
    #[serde(rename = "lotMax")]
    pub lot_max: f64,
    #[serde(rename = "lotStep")]
    pub lot_step: f64,
    #[serde(rename = "tickSize")]
    pub tick_size: f64,
    #[serde(rename = "instantMaxVolume")]
    pub instant_max_volume: i64,
    #[serde(default)]
    pub precision: i64,
    #[serde(default)]
    pub leverage: f64,
}

/// `getMarginLevel` response payload.
#[derive(Debug, Clone, Deserialize)]
pub struct MarginLevelRecord {
    pub balance: f64,
    pub credit: f64,
    pub currency: String,
    pub equity: f64,
    pub margin: f64,
    pub margin_free: f64,
    pub margin_level: f64,
}

impl From<MarginLevelRecord> for BalanceSnapshot {
    fn from(record: MarginLevelRecord) -> Self {
        Self {
            currency: record.currency,
            margin_free: record.margin_free,
            equity: record.equity,
            margin: record.margin,
            margin_level: record.margin_level,
        }
    }
}

/// One candle of a `getChartRangeRequest` response.
///
/// `open` is an absolute price; `high`, `low` and `close` are deltas
/// relative to `open`; `ctm` is a millisecond epoch.
#[derive(Debug, Clone, Deserialize)]
pub struct RateInfo {
    pub ctm: i64,
    #[serde(rename = "ctmString", default)]
    pub ctm_string: String,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub vol: f64,
}

/// `getChartRangeRequest` response payload.
#[derive(Debug, Clone, Deserialize)]
pub struct ChartRangeData {
    pub digits: i64,
    #[serde(rename = "rateInfos")]
    pub rate_infos: Vec<RateInfo>,
}

/// One quotation of a `getTickPrices` response.
#[derive(Debug, Clone, Deserialize)]
pub struct TickRecord {
    pub symbol: String,
    pub ask: f64,
    pub bid: f64,
    #[serde(default)]
    pub high: f64,
    #[serde(default)]
    pub low: f64,
    pub timestamp: i64,
}

/// `getTickPrices` response payload.
#[derive(Debug, Clone, Deserialize)]
pub struct TickPricesData {
    pub quotations: Vec<TickRecord>,
}

/// `getCurrentUserData` response payload.
#[derive(Debug, Clone, Deserialize)]
pub struct UserDataRecord {
    pub currency: String,
    #[serde(default)]
    pub group: String,
    #[serde(default)]
    pub leverage: f64,
    #[serde(rename = "leverageMultiplier", default)]
    pub leverage_multiplier: f64,
}

/// `getCommissionDef` response payload.
#[derive(Debug, Clone, Deserialize)]
pub struct CommissionDef {
    pub commission: f64,
    #[serde(rename = "rateOfExchange")]
    pub rate_of_exchange: f64,
}

/// Trade request record for `tradeTransaction`.
#[derive(Debug, Clone, Serialize)]
pub struct TradeTransInfo {
    /// Operation code (0 = buy, 1 = sell, pending order codes above)
    pub cmd: i64,
    #[serde(rename = "customComment")]
    pub custom_comment: String,
    pub expiration: i64,
    pub offset: i64,
    pub order: i64,
    pub price: f64,
    /// Stop loss
    pub sl: f64,
    pub symbol: String,
    /// Take profit
    pub tp: f64,
    /// Transaction type (0 = open, 2 = close, 4 = delete)
    #[serde(rename = "type")]
    pub trans_type: i64,
    pub volume: f64,
}

/// `tradeTransaction` response payload.
#[derive(Debug, Clone, Deserialize)]
pub struct TradeTransactionResponse {
    pub order: i64,
}

/// `tradeTransactionStatus` response payload.
#[derive(Debug, Clone, Deserialize)]
pub struct TradeStatusRecord {
    pub order: i64,
    #[serde(rename = "requestStatus")]
    pub request_status: i64,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(rename = "customComment", default)]
    pub custom_comment: String,
}

/// Envelope of every streaming-socket message.
#[derive(Debug, Clone, Deserialize)]
pub struct StreamMessage {
    pub command: String,
    #[serde(default)]
    pub data: Value,
}

/// Balance payload pushed on the streaming socket.
///
/// Unlike `getMarginLevel`, the streaming payload uses camelCase margin
/// fields and carries no currency.
#[derive(Debug, Clone, Deserialize)]
pub struct StreamingBalance {
    pub balance: f64,
    #[serde(default)]
    pub credit: f64,
    pub equity: f64,
    pub margin: f64,
    #[serde(rename = "marginFree")]
    pub margin_free: f64,
    #[serde(rename = "marginLevel")]
    pub margin_level: f64,
}

impl StreamingBalance {
    /// Build a normalized snapshot, stamping in the account currency the
    /// streaming payload omits.
    pub fn into_snapshot(self, currency: String) -> BalanceSnapshot {
        BalanceSnapshot {
            currency,
            margin_free: self.margin_free,
            equity: self.equity,
            margin: self.margin,
            margin_level: self.margin_level,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_record_decode() {
        let raw = serde_json::json!({
            "ask": 4000.0,
            "bid": 4000.0,
            "categoryName": "Forex",
            "contractSize": 100000,
            "currency": "USD",
            "currencyPair": true,
            "currencyProfit": "SEK",
            "description": "USD/PLN",
            "expiration": null,
            "instantMaxVolume": 0,
            "leverage": 1.5,
            "lotMax": 10.0,
            "lotMin": 0.1,
            "lotStep": 0.1,
            "precision": 2,
            "symbol": "USDPLN",
            "tickSize": 1.0,
            "time": 1272446136891i64
        });
        let record: SymbolRecord = serde_json::from_value(raw).unwrap();
        assert_eq!(record.symbol, "USDPLN");
        assert_eq!(record.description, "USD/PLN");
        assert_eq!(record.lot_min, 0.1);
        assert_eq!(record.instant_max_volume, 0);
    }

    #[test]
    fn test_margin_level_to_snapshot() {
        let record: MarginLevelRecord = serde_json::from_value(serde_json::json!({
            "balance": 995800269.43,
            "credit": 1000.00,
            "currency": "PLN",
            "equity": 995985397.56,
            "margin": 572634.43,
            "margin_free": 995227635.00,
            "margin_level": 173930.41
        }))
        .unwrap();
        let snapshot = BalanceSnapshot::from(record);
        assert_eq!(snapshot.currency, "PLN");
        assert_eq!(snapshot.margin_free, 995_227_635.00);
        assert_eq!(snapshot.equity, 995_985_397.56);
    }

    #[test]
    fn test_streaming_balance_stamps_currency() {
        let balance: StreamingBalance = serde_json::from_value(serde_json::json!({
            "balance": 9950.0,
            "credit": 0.0,
            "equity": 10000.0,
            "margin": 500.0,
            "marginFree": 9500.0,
            "marginLevel": 2000.0
        }))
        .unwrap();
        let snapshot = balance.into_snapshot("PLN".to_string());
        assert_eq!(snapshot.currency, "PLN");
        assert_eq!(snapshot.margin_free, 9500.0);
    }
}
