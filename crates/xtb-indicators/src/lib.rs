//! Technical indicators for the XTB trading system.
//!
//! Indicator output is index-aligned with the input series: positions where
//! a rolling window is not yet full, or where a shift runs out of range, are
//! `f64::NAN` rather than zero, so downstream comparisons stay inert during
//! warmup.

pub mod ichimoku;
pub mod rolling;

pub use ichimoku::{Ichimoku, IchimokuPoint, IchimokuSeries};
