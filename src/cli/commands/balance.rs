//! Show the account balance mapping.

use anyhow::Result;
use xtb_config::Settings;
use xtb_core::traits::ExchangeInterface;

pub fn run(settings: &Settings) -> Result<()> {
    let session = super::open_session(settings)?;
    let account = session.exchange.get_account()?;

    let mut funded: Vec<_> = account
        .iter()
        .filter(|(_, balance)| balance.available != 0.0 || balance.hold != 0.0)
        .collect();
    funded.sort_by(|a, b| a.0.cmp(b.0));

    println!("Account currency: {}", session.exchange.account_currency());
    println!("{:<12} {:>16} {:>16}", "ASSET", "AVAILABLE", "HOLD");
    for (asset, balance) in &funded {
        println!("{:<12} {:>16.2} {:>16.2}", asset, balance.available, balance.hold);
    }
    println!("({} empty entries not shown)", account.len() - funded.len());

    Ok(())
}
