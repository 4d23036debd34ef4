//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Salescope: monthly sales report generator
#[derive(Parser)]
#[command(name = "salescope")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate reports for every sales file in a directory
    Run {
        /// Directory containing sales data files (CSV/TSV)
        #[arg(short, long, value_name = "DIR", default_value = "data")]
        input: PathBuf,

        /// Root directory for report output (default: reports)
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,

        /// Path to a JSON configuration file (default: ./config.json if present)
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,
    },

    /// Generate the report for a single sales file
    Report {
        /// Path to the sales data file (CSV/TSV)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Root directory for report output (default: reports)
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,

        /// Path to a JSON configuration file (default: ./config.json if present)
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,
    },
}
