#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! CLI entry point for the courtside toolchain.
//!
//! * `scrape` walks a manifest of statistics pages, saving each one as a
//!   fixture. Exit code 0 means every item succeeded or was skipped, 1 that
//!   some item failed, 2 that the source blocked the run.
//! * `extract` runs a record parser over a saved page and prints one JSON
//!   record per line.
//!
//! Uses `indicatif-log-bridge` (via [`progress::init_logger`]) so log lines
//! and the scrape progress bar never fight for the terminal.

mod extract;
mod progress;
mod scrape;

use std::process::ExitCode;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "courtside", about = "Basketball statistics scraper and extractor")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch every page listed in a manifest, resuming from the checkpoint
    Scrape(scrape::ScrapeArgs),
    /// Parse a saved page into JSON records
    Extract(extract::ExtractArgs),
}

#[tokio::main]
async fn main() -> ExitCode {
    let multi = progress::init_logger();
    let cli = Cli::parse();

    match cli.command {
        Commands::Scrape(args) => ExitCode::from(scrape::run(&args, &multi).await),
        Commands::Extract(args) => match extract::run(&args) {
            Ok(count) => {
                log::info!("Extracted {count} records from {}", args.file.display());
                ExitCode::SUCCESS
            }
            Err(e) => {
                log::error!("Extraction failed: {e}");
                ExitCode::FAILURE
            }
        },
    }
}
