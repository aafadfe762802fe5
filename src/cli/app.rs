//! CLI definitions and entry point

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use super::commands;
use borderpost::output::OutputMode;

/// borderpost - Entry screening for the Kanton border checkpoint
#[derive(Parser, Debug)]
#[command(
    name = "borderpost",
    version,
    about = "Entry screening for the Kanton border checkpoint",
    long_about = "Screen traveler entry records against visa policy, the watchlist,\n\
                  and medical advisories.\n\n\
                  Every record in a batch receives exactly one verdict: Accept,\n\
                  Reject, Secondary, or Quarantine."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Screen a batch of entry records, one verdict per record
    Decide {
        /// Path to the records file (JSON array)
        records: PathBuf,

        /// Path to the watchlist file (overrides borderpost.toml)
        #[arg(short, long)]
        watchlist: Option<PathBuf>,

        /// Path to the countries file (overrides borderpost.toml)
        #[arg(short, long)]
        countries: Option<PathBuf>,

        /// Screening date visas are aged against, YYYY-MM-DD (defaults to today)
        #[arg(long, value_name = "DATE")]
        as_of: Option<NaiveDate>,
    },

    /// Check a batch for completeness without issuing verdicts
    Validate {
        /// Path to the records file (JSON array)
        records: PathBuf,
    },

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match cli.command {
        Some(Command::Decide {
            records,
            watchlist,
            countries,
            as_of,
        }) => commands::decide(&records, watchlist, countries, as_of, output_mode),
        Some(Command::Validate { records }) => commands::validate(&records, output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("borderpost v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("borderpost v{}", env!("CARGO_PKG_VERSION"));
                println!("\nRun 'borderpost --help' for usage");
                println!("Run 'borderpost decide <records.json>' to screen a batch");
            }
            Ok(())
        },
    }
}
