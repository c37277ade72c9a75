//! Trading strategy implementations.
//!
//! Strategies implement the [`xtb_core::traits::BarStrategy`] seam: an
//! `init` that builds the per-symbol state and a `bar_event` driven once per
//! closed candle by the [`StrategyRunner`].

mod ichimoku_strategy;
mod runner;

pub use ichimoku_strategy::{IchimokuConfig, IchimokuStrategy};
pub use runner::StrategyRunner;
