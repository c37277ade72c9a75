//! Core types and traits for the XTB trading system.
//!
//! This crate provides the foundational building blocks including:
//! - Market data types (Candle, CandleSeries, Resolution)
//! - Normalized product, balance and order-constraint types
//! - Core traits for the exchange interface, strategies and indicators
//! - The error taxonomy shared across the workspace

pub mod types;
pub mod traits;
pub mod error;

pub use error::{TradingError, TradingResult};
pub use types::*;
pub use traits::*;
