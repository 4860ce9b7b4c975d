//! CLI command definitions.

use clap::{Args, Parser, Subcommand, ValueEnum};
use dicestats::Operator;
use std::path::PathBuf;

/// Dicestats - exact probability distributions for dice pools
#[derive(Parser, Debug)]
#[command(name = "dicestats")]
#[command(about = "Exact probability distributions for dice pools", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file used instead of the layered defaults
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the distribution of a pool of identical dice
    Stats(StatsArgs),

    /// Print the effective configuration as JSON
    Config,
}

/// Arguments for the stats command
#[derive(Args, Debug)]
pub struct StatsArgs {
    /// Number of dice in the pool
    #[arg(short = 'n', long, default_value = "1")]
    pub count: usize,

    /// Sides per die
    #[arg(short, long, default_value = "6")]
    pub sides: u32,

    /// Operator folding the pool
    #[arg(long, default_value = "sum")]
    pub op: Operator,

    /// Result to exclude; may be repeated
    #[arg(long = "drop", allow_negative_numbers = true)]
    pub drops: Vec<i64>,

    /// Output format
    #[arg(long, default_value = "table")]
    pub format: OutputFormat,

    /// Chart title
    #[arg(long)]
    pub title: Option<String>,
}

/// Output format options
#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum OutputFormat {
    /// Exact fractions with percentages
    Table,
    /// Summary and points as JSON
    Json,
    /// Text bar chart
    Chart,
}
