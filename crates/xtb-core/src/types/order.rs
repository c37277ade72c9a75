//! Order intents and order constraints.

use serde::{Deserialize, Serialize};

/// Order side (buy or sell).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Buy,
    Sell,
}

impl Side {
    /// Get the opposite side.
    pub fn opposite(&self) -> Self {
        match self {
            Side::Buy => Side::Sell,
            Side::Sell => Side::Buy,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Buy => write!(f, "BUY"),
            Side::Sell => write!(f, "SELL"),
        }
    }
}

/// A market order intent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketOrder {
    pub symbol: String,
    pub side: Side,
    /// Desired amount of base asset
    pub size: f64,
}

/// A limit order intent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LimitOrder {
    pub symbol: String,
    pub side: Side,
    /// Limit price
    pub price: f64,
    /// Desired amount of base asset
    pub size: f64,
}

/// Market fee rates for a symbol.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Fees {
    pub maker_fee_rate: f64,
    pub taker_fee_rate: f64,
}

/// Notional bounds for one side of a market order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FundsRange {
    /// Minimum notional: minimum size times the current ask
    pub min_funds: f64,
    /// Maximum notional: maximum size times the current ask
    pub max_funds: f64,
}

/// Constraints applying to limit orders on a symbol.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LimitOrderLimits {
    pub base_min_size: f64,
    pub base_max_size: f64,
    pub base_increment: f64,
    pub price_increment: f64,
    pub min_price: f64,
    pub max_price: f64,
}

/// Constraints applying to market orders on a symbol.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarketOrderLimits {
    pub fractionable: bool,
    pub base_min_size: f64,
    pub base_max_size: f64,
    pub base_increment: f64,
    pub quote_increment: f64,
    pub buy: FundsRange,
    pub sell: FundsRange,
}

/// Full order-constraint record for a symbol.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderFilter {
    pub symbol: String,
    pub base_asset: String,
    /// Margin currency of the instrument
    pub quote_asset: String,
    /// Maximum instant volume the vendor accepts
    pub max_orders: i64,
    pub limit_order: LimitOrderLimits,
    pub market_order: MarketOrderLimits,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_opposite() {
        assert_eq!(Side::Buy.opposite(), Side::Sell);
        assert_eq!(Side::Sell.opposite(), Side::Buy);
    }

    #[test]
    fn test_side_display() {
        assert_eq!(Side::Buy.to_string(), "BUY");
        assert_eq!(Side::Sell.to_string(), "SELL");
    }
}
