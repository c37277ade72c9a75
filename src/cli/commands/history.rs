//! Fetch translated candle history.

use anyhow::{anyhow, Result};
use chrono::Utc;
use std::str::FromStr;
use xtb_config::Settings;
use xtb_core::traits::ExchangeInterface;
use xtb_core::types::Resolution;

use crate::cli::HistoryArgs;

pub fn run(args: HistoryArgs, settings: &Settings) -> Result<()> {
    let resolution = Resolution::from_str(&args.resolution).map_err(|err| anyhow!(err))?;

    let stop = Utc::now().timestamp();
    let start = stop - args.bars * resolution.as_secs() as i64;

    let session = super::open_session(settings)?;
    let candles = session.exchange.get_product_history(
        &args.symbol,
        start,
        stop,
        resolution.as_secs(),
    )?;

    println!("{} candles for {} at {}", candles.len(), args.symbol, resolution);
    println!(
        "{:<20} {:>12} {:>12} {:>12} {:>12} {:>12}",
        "TIME", "OPEN", "HIGH", "LOW", "CLOSE", "VOLUME"
    );
    for candle in &candles {
        println!(
            "{:<20} {:>12.5} {:>12.5} {:>12.5} {:>12.5} {:>12.2}",
            candle.datetime().format("%Y-%m-%d %H:%M:%S"),
            candle.open,
            candle.high,
            candle.low,
            candle.close,
            candle.volume,
        );
    }

    Ok(())
}
