//! Account balance types.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Snapshot of the account margin state.
///
/// An atomic, immutable value: the streaming path replaces the whole
/// snapshot, it is never mutated field by field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceSnapshot {
    /// Account currency code, e.g. "PLN"
    pub currency: String,
    /// Free margin available for new positions
    pub margin_free: f64,
    /// Account equity
    pub equity: f64,
    /// Margin currently in use
    pub margin: f64,
    /// Margin level percentage
    pub margin_level: f64,
}

/// Per-asset balance entry in the account mapping.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct AssetBalance {
    /// Funds available to trade
    pub available: f64,
    /// Funds tied up (equity minus free margin for the home currency)
    pub hold: f64,
}

/// Symbol -> balance mapping covering every known product plus the account's
/// home currency. Rebuilt wholesale on every query.
pub type AccountMapping = HashMap<String, AssetBalance>;
