//! `CoiLab` CLI - Command-line interface for the catalog converter

pub mod commands;
pub mod progress;

use clap::Parser;
use commands::Commands;
use tracing::Level;

#[derive(Parser)]
#[command(name = "coilab")]
#[command(about = "CoiLab: Captain of Industry data to FactorioLab", long_about = None)]
#[command(version)]
struct Cli {
    /// Log per-entity detail
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Run the `CoiLab` CLI
pub fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let level = if cli.verbose {
        Level::DEBUG
    } else if cli.command.is_quiet() {
        Level::WARN
    } else {
        Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .init();

    cli.command.execute()?;

    Ok(())
}
