//! List the product catalog.

use anyhow::Result;
use xtb_config::Settings;
use xtb_core::traits::ExchangeInterface;

pub fn run(settings: &Settings) -> Result<()> {
    let session = super::open_session(settings)?;
    let products = session.exchange.get_products();

    println!("{} products", products.len());
    println!("{:<12} {:<24} {:>8} {:>8} {:>8}", "SYMBOL", "DESCRIPTION", "MIN", "MAX", "STEP");
    for product in products {
        println!(
            "{:<12} {:<24} {:>8} {:>8} {:>8}",
            product.symbol,
            product.base_asset,
            product.base_min_size,
            product.base_max_size,
            product.base_increment,
        );
    }

    Ok(())
}
