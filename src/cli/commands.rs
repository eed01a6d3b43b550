use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "idr-radar", about = "Daily USD/IDR market-intelligence snapshot")]
pub struct Cli {
    /// Run date (YYYY-MM-DD). Overrides DATE_OVERRIDE; default is today in WIB
    #[arg(long, global = true)]
    pub date: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Collect every source and write the snapshot JSON
    Fetch {
        /// Output file (default: RADAR_OUTPUT or data/market_data.json)
        #[arg(long)]
        output: Option<PathBuf>,
        /// Print the snapshot to stdout instead of writing a file
        #[arg(long)]
        stdout: bool,
    },
    /// Report whether the run date is a trading day
    Check,
    /// Classify a headline with the keyword heuristic
    Classify {
        title: String,
    },
}
