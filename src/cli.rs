//! Command line options

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Default)]
#[command(name = "dotdot")]
#[command(about = "Collect the star, dodge the bouncing faces")]
pub struct Cli {
    /// RON config file (defaults to ./dotdot.ron when present)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Seed for a reproducible run
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print the effective config as RON and exit
    #[arg(long)]
    pub print_config: bool,

    /// Write the effective config to PATH and exit
    #[arg(long, value_name = "PATH")]
    pub write_config: Option<PathBuf>,
}
