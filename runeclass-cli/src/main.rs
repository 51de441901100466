//! Command-line entry point for runeclass

use anyhow::Result;
use clap::Parser;
use runeclass_cli::commands::{init_logging, Commands};

/// Inspect printable and graphic classification of Unicode code points
#[derive(Debug, Parser)]
#[command(name = "runeclass", version, about, long_about = None)]
struct Cli {
    /// Increase verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.command.is_quiet());
    log::debug!("Arguments: {:?}", cli);

    cli.command.execute()
}
