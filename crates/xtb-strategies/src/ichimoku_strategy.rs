//! Ichimoku trend-following strategy.
//!
//! Two states per symbol, FLAT and LONG. A bar whose close and low clear the
//! base line while the conversion line is above it opens a position; a close
//! under the base line with the conversion line below it exits.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use xtb_core::error::StrategyError;
use xtb_core::traits::{Action, BarStrategy, StrategyContext, SymbolState};
use xtb_core::types::{Candle, Side};
use xtb_indicators::{Ichimoku, IchimokuPoint};

/// Configuration for the Ichimoku strategy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IchimokuConfig {
    /// Order size in lots for every entry and exit
    pub order_size: f64,
    /// Candles retained per symbol; also the warmup fetch size
    pub history_size: usize,
    /// Conversion line window
    pub conversion_period: usize,
    /// Base line window
    pub base_period: usize,
    /// Leading span B window
    pub leading_b_period: usize,
    /// Forward/backward shift of the spans
    pub displacement: usize,
}

impl Default for IchimokuConfig {
    fn default() -> Self {
        Self {
            order_size: 1.0,
            history_size: 78,
            conversion_period: 9,
            base_period: 26,
            leading_b_period: 52,
            displacement: 26,
        }
    }
}

impl IchimokuConfig {
    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), StrategyError> {
        if self.order_size <= 0.0 {
            return Err(StrategyError::InvalidConfig(
                "Order size must be positive".into(),
            ));
        }
        if self.history_size < self.leading_b_period + self.displacement {
            return Err(StrategyError::InvalidConfig(
                "History must cover the largest indicator span".into(),
            ));
        }
        Ok(())
    }
}

/// Ichimoku trend-following strategy.
pub struct IchimokuStrategy {
    config: IchimokuConfig,
    ichimoku: Ichimoku,
}

impl IchimokuStrategy {
    /// Create a new Ichimoku strategy.
    pub fn new(config: IchimokuConfig) -> Result<Self, StrategyError> {
        config.validate()?;
        let ichimoku = Ichimoku::with_periods(
            config.conversion_period,
            config.base_period,
            config.leading_b_period,
            config.displacement,
        );
        Ok(Self { config, ichimoku })
    }

    /// Transition rule over the latest bar and indicator values.
    ///
    /// NaN indicator values compare false, so warmup bars never transition.
    fn decide(bar: &Candle, point: &IchimokuPoint, has_bought: bool) -> Action {
        if has_bought {
            if point.conversion < point.base && bar.close < point.base {
                Action::Sell
            } else {
                Action::Hold
            }
        } else if point.conversion > point.base
            && bar.close > point.base
            && bar.low > point.base
        {
            Action::Buy
        } else {
            Action::Hold
        }
    }
}

impl BarStrategy for IchimokuStrategy {
    fn name(&self) -> &str {
        "Ichimoku"
    }

    fn init(&self, symbol: &str, ctx: &StrategyContext<'_>) -> Result<SymbolState, StrategyError> {
        let mut state = SymbolState::new(
            symbol.to_string(),
            ctx.resolution,
            self.config.history_size,
        );

        let stop = Utc::now().timestamp();
        let start = stop - self.config.history_size as i64 * ctx.resolution.as_secs() as i64;
        let warmup =
            ctx.exchange
                .get_product_history(symbol, start, stop, ctx.resolution.as_secs())?;
        info!("Warmup for {symbol}: {} candles", warmup.len());

        state.history.extend(warmup);
        state.has_bought = false;
        Ok(state)
    }

    fn bar_event(
        &self,
        bar: &Candle,
        symbol: &str,
        state: &mut SymbolState,
        ctx: &StrategyContext<'_>,
    ) -> Result<Action, StrategyError> {
        state.history.push(*bar);

        let series = self.ichimoku.calculate(
            &state.history.highs(),
            &state.history.lows(),
            &state.history.closes(),
        );
        let point = match series.last() {
            Some(point) => point,
            None => return Ok(Action::Hold),
        };

        let action = Self::decide(bar, &point, state.has_bought);
        match action {
            Action::Buy => {
                // The position flag commits regardless of the submission
                // result; the outcome is logged, never inspected.
                if let Err(err) =
                    ctx.exchange
                        .market_order(symbol, Side::Buy, self.config.order_size)
                {
                    warn!("Buy order for {symbol} failed: {err}");
                }
                state.has_bought = true;
            }
            Action::Sell => {
                if let Err(err) =
                    ctx.exchange
                        .market_order(symbol, Side::Sell, self.config.order_size)
                {
                    warn!("Sell order for {symbol} failed: {err}");
                }
                state.has_bought = false;
            }
            Action::Hold => {}
        }
        Ok(action)
    }
}
