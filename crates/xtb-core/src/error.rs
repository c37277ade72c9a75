//! Error types for the trading system.

use thiserror::Error;

/// Top-level trading system error.
#[derive(Error, Debug)]
pub enum TradingError {
    #[error("Client error: {0}")]
    Client(#[from] ClientError),

    #[error("Exchange error: {0}")]
    Exchange(#[from] ExchangeError),

    #[error("Strategy error: {0}")]
    Strategy(#[from] StrategyError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors at the vendor command boundary.
///
/// Every command funnels through a single dispatch function, so an
/// unsuccessful vendor response always surfaces as [`ClientError::Rejected`]
/// instead of an ad hoc `status` field check at the call site.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Command rejected by vendor: {code}: {description}")]
    Rejected { code: String, description: String },

    #[error("Malformed response: {0}")]
    Malformed(String),

    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Errors produced by the normalized exchange interface.
#[derive(Error, Debug)]
pub enum ExchangeError {
    /// Symbol absent from the catalog or the account mapping. Never
    /// silently defaulted.
    #[error("Symbol not found: {0}")]
    NotFound(String),

    /// Requested candle resolution is not a whole number of minutes the
    /// vendor serves.
    #[error("Unsupported resolution: {0} seconds")]
    InvalidResolution(u64),

    /// Operation the vendor connector does not implement.
    #[error("Operation not supported: {0}")]
    Unsupported(&'static str),

    #[error(transparent)]
    Client(#[from] ClientError),
}

/// Strategy-specific errors.
#[derive(Error, Debug)]
pub enum StrategyError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Exchange(#[from] ExchangeError),
}

/// Result type alias for trading operations.
pub type TradingResult<T> = Result<T, TradingError>;
