//! The XTB connector behind the normalized exchange interface.

use std::sync::{Arc, Mutex};
use tracing::debug;

use xtb_client::wire::{RateInfo, SymbolRecord};
use xtb_client::{ApiClient, Transport};
use xtb_core::error::ExchangeError;
use xtb_core::traits::ExchangeInterface;
use xtb_core::types::{
    AccountMapping, AssetBalance, Candle, Fees, FundsRange, LimitOrder, LimitOrderLimits,
    MarketOrder, MarketOrderLimits, OrderFilter, ProductDescriptor, Resolution, Side,
};

use crate::state::ExchangeState;

/// Normalized view of an XTB account.
///
/// Owns the request/response client (serialized behind a mutex, one
/// in-flight command at a time) and the catalog built at startup. Balance
/// updates arrive through [`ExchangeState`], fed by the streaming socket.
pub struct XtbExchange<T: Transport> {
    calls: Mutex<ApiClient<T>>,
    state: Arc<ExchangeState>,
    products: Vec<ProductDescriptor>,
    products_full: Vec<SymbolRecord>,
    currency: String,
}

/// Resolve one vendor candle into absolute prices and epoch seconds.
///
/// The vendor sends `open` absolute, `high`/`low`/`close` as deltas from
/// open, and `ctm` in milliseconds.
fn translate_rate(raw: &RateInfo) -> Candle {
    Candle {
        time: raw.ctm / 1000,
        open: raw.open,
        high: raw.open + raw.high,
        low: raw.open + raw.low,
        close: raw.open + raw.close,
        volume: raw.vol,
    }
}

impl<T: Transport> XtbExchange<T> {
    /// Build the adapter over a logged-in client: loads account metadata,
    /// the symbol catalog, and primes the balance cell.
    pub fn new(api: ApiClient<T>, state: Arc<ExchangeState>) -> Result<Self, ExchangeError> {
        let mut exchange = Self {
            calls: Mutex::new(api),
            state,
            products: Vec::new(),
            products_full: Vec::new(),
            currency: String::new(),
        };

        let user_data = exchange.calls.lock().unwrap().get_current_user_data()?;
        exchange.currency = user_data.currency;
        exchange.refresh_products()?;
        exchange.init_exchange()?;
        Ok(exchange)
    }

    /// Prime the balance cell from the request/response socket.
    ///
    /// The streaming subscription replaces the snapshot from here on.
    pub fn init_exchange(&self) -> Result<(), ExchangeError> {
        let level = self.calls.lock().unwrap().get_margin_level()?;
        self.state.balance.set(level.into());
        Ok(())
    }

    /// Rebuild the catalog from the full vendor symbol list.
    ///
    /// Replaces both the normalized descriptor list and the retained raw
    /// records wholesale, preserving vendor order. Single-writer: meant to
    /// run at startup and rarely thereafter, never concurrently with itself.
    pub fn refresh_products(&mut self) -> Result<(), ExchangeError> {
        let records = self.calls.lock().unwrap().get_all_symbols()?;
        self.products = records
            .iter()
            .map(|record| ProductDescriptor {
                symbol: record.symbol.clone(),
                base_asset: record.description.clone(),
                quote_asset: record.description.clone(),
                base_min_size: record.lot_min,
                base_max_size: record.lot_max,
                base_increment: record.lot_step,
            })
            .collect();
        self.products_full = records;
        debug!("Catalog refreshed: {} products", self.products.len());
        Ok(())
    }

    /// Free margin from the latest snapshot; zero before the first update.
    pub fn cash(&self) -> f64 {
        self.state
            .balance
            .get()
            .map(|snapshot| snapshot.margin_free)
            .unwrap_or(0.0)
    }

    /// The account's home currency, known from login-time user data.
    pub fn account_currency(&self) -> &str {
        &self.currency
    }

    // Callers expect a USD key even on accounts denominated elsewhere.
    fn ensure_usd_entry(account: &mut AccountMapping) {
        account
            .entry("USD".to_string())
            .or_insert_with(AssetBalance::default);
    }
}

impl<T: Transport> ExchangeInterface for XtbExchange<T> {
    fn get_products(&self) -> &[ProductDescriptor] {
        &self.products
    }

    fn get_account(&self) -> Result<AccountMapping, ExchangeError> {
        let mut account = AccountMapping::new();

        // One zero entry per known product
        for product in &self.products {
            account.insert(product.symbol.clone(), AssetBalance::default());
        }

        // Home currency entry from the latest snapshot. Before the first
        // update the currency is known from login but carries zero balances.
        match self.state.balance.get() {
            Some(snapshot) => {
                account.insert(
                    snapshot.currency.clone(),
                    AssetBalance {
                        available: snapshot.margin_free,
                        hold: snapshot.equity - snapshot.margin_free,
                    },
                );
            }
            None => {
                account
                    .entry(self.currency.clone())
                    .or_insert_with(AssetBalance::default);
            }
        }

        Self::ensure_usd_entry(&mut account);
        Ok(account)
    }

    fn get_asset_balance(&self, symbol: &str) -> Result<AssetBalance, ExchangeError> {
        self.get_account()?
            .remove(symbol)
            .ok_or_else(|| ExchangeError::NotFound(symbol.to_string()))
    }

    fn get_product_history(
        &self,
        symbol: &str,
        epoch_start: i64,
        epoch_stop: i64,
        resolution: u64,
    ) -> Result<Vec<Candle>, ExchangeError> {
        let resolution =
            Resolution::from_secs(resolution).ok_or(ExchangeError::InvalidResolution(resolution))?;

        let data = self.calls.lock().unwrap().get_chart_range(
            symbol,
            resolution.period_minutes(),
            epoch_start * 1000,
            epoch_stop * 1000,
        )?;

        // Vendor order preserved; an empty response is an empty table
        Ok(data.rate_infos.iter().map(translate_rate).collect())
    }

    fn get_order_filter(&self, symbol: &str) -> Result<OrderFilter, ExchangeError> {
        // Resolved from the retained raw records only, no vendor call
        let product = self
            .products_full
            .iter()
            .find(|product| product.symbol == symbol)
            .ok_or_else(|| ExchangeError::NotFound(symbol.to_string()))?;

        let price = product.ask;
        let funds = FundsRange {
            min_funds: product.lot_min * price,
            max_funds: product.lot_max * price,
        };

        Ok(OrderFilter {
            symbol: product.symbol.clone(),
            base_asset: product.symbol.clone(),
            quote_asset: product.currency.clone(),
            max_orders: product.instant_max_volume,
            limit_order: LimitOrderLimits {
                base_min_size: product.lot_min,
                base_max_size: product.lot_max,
                base_increment: product.lot_step,
                price_increment: product.tick_size,
                min_price: product.tick_size,
                max_price: f64::MAX,
            },
            market_order: MarketOrderLimits {
                fractionable: false,
                base_min_size: product.lot_min,
                base_max_size: product.lot_max,
                base_increment: product.lot_step,
                quote_increment: product.tick_size,
                buy: funds,
                sell: funds,
            },
        })
    }

    fn get_price(&self, symbol: &str) -> Result<f64, ExchangeError> {
        let record = self.calls.lock().unwrap().get_symbol(symbol)?;
        Ok(record.ask)
    }

    fn get_fees(&self, _symbol: &str) -> Fees {
        Fees {
            maker_fee_rate: 0.002,
            taker_fee_rate: 0.002,
        }
    }

    fn market_order(
        &self,
        _symbol: &str,
        _side: Side,
        _size: f64,
    ) -> Result<MarketOrder, ExchangeError> {
        Err(ExchangeError::Unsupported("market_order"))
    }

    fn limit_order(
        &self,
        _symbol: &str,
        _side: Side,
        _price: f64,
        _size: f64,
    ) -> Result<LimitOrder, ExchangeError> {
        Err(ExchangeError::Unsupported("limit_order"))
    }

    fn name(&self) -> &str {
        "XTB"
    }
}
