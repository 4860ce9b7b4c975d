//! Command-line interface module.

mod commands;
mod stats;

pub use commands::{Cli, Commands};
pub use stats::{run_stats, show_config};
