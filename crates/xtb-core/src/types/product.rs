//! Normalized product metadata.

use serde::{Deserialize, Serialize};

/// Normalized descriptor of a tradable product.
///
/// Built from the vendor's raw symbol record during a catalog refresh and
/// immutable afterwards; a refresh replaces the whole list, never individual
/// entries. The vendor exposes no separate base/quote labels, only a pair
/// description, which is carried into both asset fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDescriptor {
    /// Unique symbol id, e.g. "EURUSD"
    pub symbol: String,
    /// Base asset label
    pub base_asset: String,
    /// Quote asset label
    pub quote_asset: String,
    /// Minimum tradable size in lots
    pub base_min_size: f64,
    /// Maximum tradable size in lots
    pub base_max_size: f64,
    /// Size increment in lots
    pub base_increment: f64,
}
