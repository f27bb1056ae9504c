//! Promo Drift CLI
//!
//! Compares two snapshots of a loyalty promotion event and reports
//! field-level drift with a coarse severity level.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use promo_drift::commands::{
    display_fields, display_scenarios, display_version, execute_check, execute_scenario, CheckArgs,
};

/// Promo Drift - field-level drift detection for loyalty events
#[derive(Parser, Debug)]
#[command(name = "promo-drift")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Compare two event snapshot files
    Check {
        /// Path to the v1 event snapshot JSON
        #[arg(long)]
        v1: PathBuf,

        /// Path to the v2 event snapshot JSON
        #[arg(long)]
        v2: PathBuf,

        /// Path to write the JSON report
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Run a built-in sample scenario
    Scenario {
        /// Scenario name (see `scenarios`)
        #[arg(short, long)]
        name: String,

        /// Path to write the JSON report
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List built-in sample scenarios
    Scenarios,

    /// Display the tracked drift fields
    Fields,

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        Commands::Check { v1, v2, output } => {
            execute_check(CheckArgs { v1, v2, output })?;
        }

        Commands::Scenario { name, output } => {
            execute_scenario(&name, output.as_deref())?;
        }

        Commands::Scenarios => display_scenarios(),

        Commands::Fields => display_fields(),

        Commands::Version => display_version(),
    }

    Ok(())
}
