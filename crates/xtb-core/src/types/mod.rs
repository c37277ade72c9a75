//! Core data types for the trading system.

mod account;
mod candle;
mod order;
mod product;
mod resolution;

pub use account::{AccountMapping, AssetBalance, BalanceSnapshot};
pub use candle::{Candle, CandleSeries};
pub use order::{Fees, FundsRange, LimitOrder, LimitOrderLimits, MarketOrder, MarketOrderLimits, OrderFilter, Side};
pub use product::ProductDescriptor;
pub use resolution::Resolution;
