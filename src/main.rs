//! XTB trading CLI application.

mod cli;
mod logging;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use logging::setup_logging;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = xtb_config::load_settings(&cli.config)?;

    // Keep the file-writer guard alive for the process lifetime
    let _guard = setup_logging(&settings.logging);

    match cli.command {
        Commands::Symbols => cli::commands::symbols::run(&settings),
        Commands::Balance => cli::commands::balance::run(&settings),
        Commands::History(args) => cli::commands::history::run(args, &settings),
        Commands::Run => cli::commands::run::run(&settings),
    }
}
