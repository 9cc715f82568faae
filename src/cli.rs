use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "agrometeo", version, about = "Farm weather decision support")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config.yaml
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute the agronomic report from a weather export
    Report {
        /// JSON weather export with daily and hourly blocks
        #[arg(short, long)]
        input: PathBuf,

        /// Crop for the GDD section (overrides config)
        #[arg(long)]
        crop: Option<String>,

        /// Fruit crop for the chilling section (overrides config)
        #[arg(long)]
        fruit: Option<String>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Print the built-in crop reference tables
    Crops,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
