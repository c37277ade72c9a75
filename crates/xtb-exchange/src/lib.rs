//! Normalized exchange interface over the XTB client.
//!
//! [`XtbExchange`] adapts the vendor's raw payloads into the shapes the
//! strategy layer consumes: a product catalog, an account balance mapping,
//! absolute-priced candle history and order constraints. [`ExchangeState`]
//! carries the balance snapshot the streaming path keeps replacing.

mod interface;
mod state;

pub use interface::XtbExchange;
pub use state::{ExchangeState, StateCell};
