//! Run the strategy loop.

use anyhow::Result;
use tracing::info;
use xtb_config::Settings;
use xtb_strategies::{IchimokuStrategy, StrategyRunner};

pub fn run(settings: &Settings) -> Result<()> {
    let session = super::open_session(settings)?;

    // Balance updates keep flowing into the shared cell from here on
    let _stream = super::subscribe_balance(&session)?;
    info!("Streaming balance subscription attached");

    let strategy = IchimokuStrategy::new(settings.strategy.ichimoku.clone())?;
    let runner = StrategyRunner::new(
        &strategy,
        &session.exchange,
        settings.strategy.symbol.clone(),
        settings.strategy.resolution,
    );
    runner.run()?;

    Ok(())
}
