//! Blocking strategy loop.

use chrono::Utc;
use std::time::Duration;
use tracing::{debug, info};
use xtb_core::error::StrategyError;
use xtb_core::traits::{Action, BarStrategy, ExchangeInterface, StrategyContext};
use xtb_core::types::{Candle, Resolution};

/// Drives a [`BarStrategy`] over a live exchange.
///
/// Initializes the per-symbol state once, then blocks until each resolution
/// boundary, fetches the latest closed candle and feeds it to the strategy.
/// Vendor failures propagate out of `run` unchanged: there is no retry or
/// timeout layer here, and a hung vendor call blocks the loop.
pub struct StrategyRunner<'a> {
    strategy: &'a dyn BarStrategy,
    exchange: &'a dyn ExchangeInterface,
    symbol: String,
    resolution: Resolution,
}

/// First resolution boundary strictly after `now`.
fn next_boundary(now: i64, secs: i64) -> i64 {
    (now / secs + 1) * secs
}

impl<'a> StrategyRunner<'a> {
    pub fn new(
        strategy: &'a dyn BarStrategy,
        exchange: &'a dyn ExchangeInterface,
        symbol: String,
        resolution: Resolution,
    ) -> Self {
        Self {
            strategy,
            exchange,
            symbol,
            resolution,
        }
    }

    /// Fetch the most recent closed candle newer than `last_time`.
    fn latest_closed_bar(&self, last_time: Option<i64>) -> Result<Option<Candle>, StrategyError> {
        let now = Utc::now().timestamp();
        let secs = self.resolution.as_secs() as i64;
        let candles = self.exchange.get_product_history(
            &self.symbol,
            now - 2 * secs,
            now,
            self.resolution.as_secs(),
        )?;
        Ok(candles
            .into_iter()
            .filter(|candle| last_time.map_or(true, |time| candle.time > time))
            .last())
    }

    /// Run the strategy until a failure unwinds out of the loop.
    pub fn run(&self) -> Result<(), StrategyError> {
        let ctx = StrategyContext {
            exchange: self.exchange,
            resolution: self.resolution,
        };
        let mut state = self.strategy.init(&self.symbol, &ctx)?;
        info!(
            "Strategy {} running on {} at {}",
            self.strategy.name(),
            self.symbol,
            self.resolution
        );

        loop {
            let now = Utc::now().timestamp();
            let wakeup = next_boundary(now, self.resolution.as_secs() as i64);
            std::thread::sleep(Duration::from_secs((wakeup - now).max(1) as u64));

            let last_time = state.history.last().map(|candle| candle.time);
            match self.latest_closed_bar(last_time)? {
                Some(bar) => {
                    let action = self.strategy.bar_event(&bar, &self.symbol, &mut state, &ctx)?;
                    if action != Action::Hold {
                        info!("{} on {} at close {}", action_label(action), self.symbol, bar.close);
                    }
                }
                None => debug!("No closed candle for {} yet", self.symbol),
            }
        }
    }
}

fn action_label(action: Action) -> &'static str {
    match action {
        Action::Buy => "BUY",
        Action::Sell => "SELL",
        Action::Hold => "HOLD",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_boundary() {
        assert_eq!(next_boundary(0, 3600), 3600);
        assert_eq!(next_boundary(3599, 3600), 3600);
        assert_eq!(next_boundary(3600, 3600), 7200);
        assert_eq!(next_boundary(3601, 3600), 7200);
    }
}
