//! Dicestats CLI binary.
//!
//! This binary provides command-line access to dicestats:
//! - Exact statistics for a pool of dice
//! - Inspection of the effective configuration

use clap::Parser;
use dicestats::{DicestatsConfig, init_tracing};

mod cli;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{Cli, Commands, show_config, run_stats};

    let cli = Cli::parse();

    init_tracing(cli.verbose)?;

    let config = match &cli.config {
        Some(path) => DicestatsConfig::from_file(path)?,
        None => DicestatsConfig::load()?,
    };
    config.validate()?;

    match cli.command {
        Commands::Stats(args) => {
            run_stats(&args, &config)?;
        }

        Commands::Config => {
            show_config(&config)?;
        }
    }

    Ok(())
}
