//! Strategy trait definitions.

use crate::error::StrategyError;
use crate::traits::ExchangeInterface;
use crate::types::{Candle, CandleSeries, Resolution};

/// Decision produced by a strategy on a bar event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Buy,
    Sell,
    Hold,
}

/// Typed per-symbol strategy state.
///
/// Owned exclusively by the strategy loop driving the symbol; mutated only on
/// bar events and never shared across symbols or threads, so it needs no
/// locking.
#[derive(Debug)]
pub struct SymbolState {
    /// Rolling candle history, bounded to the largest indicator span
    pub history: CandleSeries,
    /// Whether a position is currently open
    pub has_bought: bool,
}

impl SymbolState {
    /// Create an empty state: no history, no open position.
    pub fn new(symbol: String, resolution: Resolution, capacity: usize) -> Self {
        Self {
            history: CandleSeries::with_capacity(symbol, resolution, capacity),
            has_bought: false,
        }
    }
}

/// Everything a strategy needs from its surroundings on each call.
pub struct StrategyContext<'a> {
    /// The exchange the strategy reads from and submits orders to
    pub exchange: &'a dyn ExchangeInterface,
    /// Resolution of the bar stream
    pub resolution: Resolution,
}

/// Bar-driven trading strategy.
///
/// The harness calls `init` once before the bar stream starts, then
/// `bar_event` once per new bar. A strategy issues at most one order call per
/// bar event.
pub trait BarStrategy: Send {
    /// Get the unique name of this strategy.
    fn name(&self) -> &str;

    /// Build the initial per-symbol state, warmup history included.
    fn init(&self, symbol: &str, ctx: &StrategyContext<'_>) -> Result<SymbolState, StrategyError>;

    /// Process a new bar, mutating the state and possibly issuing an order.
    fn bar_event(
        &self,
        bar: &Candle,
        symbol: &str,
        state: &mut SymbolState,
        ctx: &StrategyContext<'_>,
    ) -> Result<Action, StrategyError>;
}
