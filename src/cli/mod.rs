//! CLI definitions.

pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "xtb-trader")]
#[command(author, version, about = "XTB xStation connector with an Ichimoku strategy")]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "xtb-trader.toml")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the normalized product catalog
    Symbols,
    /// Show the account balance mapping
    Balance,
    /// Fetch translated candle history
    History(HistoryArgs),
    /// Run the strategy loop
    Run,
}

#[derive(clap::Args)]
pub struct HistoryArgs {
    /// Symbol to fetch
    #[arg(short, long)]
    pub symbol: String,

    /// Candle resolution
    #[arg(short, long, default_value = "1h")]
    pub resolution: String,

    /// Number of candles
    #[arg(short = 'n', long, default_value = "100")]
    pub bars: i64,
}
