//! Normalized exchange interface.

use crate::error::ExchangeError;
use crate::types::{
    AccountMapping, AssetBalance, Candle, Fees, LimitOrder, MarketOrder, OrderFilter,
    ProductDescriptor, Side,
};

/// Contract between strategy code and a broker connector.
///
/// Implementations translate a vendor's idiosyncratic field names, units and
/// payload shapes into these normalized types. Every method is a synchronous
/// call: vendor round-trips block the caller until a response or transport
/// failure, and no retry or timeout layer exists here; callers needing
/// timeouts must wrap calls externally.
pub trait ExchangeInterface: Send {
    /// The normalized product catalog, in vendor order.
    fn get_products(&self) -> &[ProductDescriptor];

    /// Build the full per-asset balance mapping.
    ///
    /// The mapping holds a zero entry for every known product, the home
    /// currency entry derived from the latest balance snapshot, and a
    /// guaranteed "USD" entry. Rebuilt from the latest streaming state on
    /// every call.
    fn get_account(&self) -> Result<AccountMapping, ExchangeError>;

    /// Get the balance entry for a single symbol.
    ///
    /// Fails with [`ExchangeError::NotFound`] when the symbol is absent from
    /// the mapping.
    fn get_asset_balance(&self, symbol: &str) -> Result<AssetBalance, ExchangeError>;

    /// Fetch historical candles for `[epoch_start, epoch_stop]` (seconds) at
    /// the given resolution in seconds.
    ///
    /// The resolution must be a whole number of minutes the vendor serves;
    /// otherwise the call fails with [`ExchangeError::InvalidResolution`].
    /// An empty vendor response yields an empty vector, not an error.
    fn get_product_history(
        &self,
        symbol: &str,
        epoch_start: i64,
        epoch_stop: i64,
        resolution: u64,
    ) -> Result<Vec<Candle>, ExchangeError>;

    /// Get the order-constraint record for a symbol from the cached catalog.
    fn get_order_filter(&self, symbol: &str) -> Result<OrderFilter, ExchangeError>;

    /// Get the current ask price of a symbol.
    fn get_price(&self, symbol: &str) -> Result<f64, ExchangeError>;

    /// Get market fee rates.
    fn get_fees(&self, symbol: &str) -> Fees;

    /// Submit a market order.
    fn market_order(&self, symbol: &str, side: Side, size: f64)
        -> Result<MarketOrder, ExchangeError>;

    /// Submit a limit order.
    fn limit_order(
        &self,
        symbol: &str,
        side: Side,
        price: f64,
        size: f64,
    ) -> Result<LimitOrder, ExchangeError>;

    /// Get the connector name.
    fn name(&self) -> &str;
}
