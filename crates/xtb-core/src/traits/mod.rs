//! Core traits for the trading system.

mod exchange;
mod indicator;
mod strategy;

pub use exchange::ExchangeInterface;
pub use indicator::OhlcvIndicator;
pub use strategy::{Action, BarStrategy, StrategyContext, SymbolState};
