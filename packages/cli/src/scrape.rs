//! `courtside scrape`: fetch every page of a manifest to disk.

use std::path::PathBuf;
use std::time::Duration;

use clap::Args;
use courtside_parser::validation::validate_fixture;
use courtside_scraper::{
    RunError,
    checkpoint::CheckpointLedger,
    client::HttpPageClient,
    fetcher::{Fetcher, FetcherConfig},
    manifest::load_manifest,
    metrics::RunMetrics,
    orchestrator::{self, RunOptions, Validator},
};
use indicatif::MultiProgress;

use crate::progress::IndicatifProgress;

#[derive(Debug, Args)]
#[allow(clippy::struct_excessive_bools)]
pub struct ScrapeArgs {
    /// Manifest of pages to fetch (`.json` or `.toml`)
    pub manifest: PathBuf,
    /// Checkpoint file (default: `<output_dir>/.checkpoint.json`)
    #[arg(long)]
    pub checkpoint: Option<PathBuf>,
    /// Write payloads without running their validators
    #[arg(long)]
    pub no_validate: bool,
    /// Re-fetch pages whose fixture file already exists
    #[arg(long)]
    pub no_skip_existing: bool,
    /// Re-attempt pages that failed in earlier runs
    #[arg(long)]
    pub retry_failures: bool,
    /// Minimum seconds between requests
    #[arg(long, default_value = "3.0", value_parser = parse_seconds)]
    pub min_interval: Duration,
    /// Maximum seconds between requests
    #[arg(long, default_value = "6.0", value_parser = parse_seconds)]
    pub max_interval: Duration,
    /// Per-request timeout in seconds
    #[arg(long, default_value = "30", value_parser = parse_seconds)]
    pub timeout: Duration,
    /// Retries after the first attempt of each request
    #[arg(long, default_value_t = 3)]
    pub max_retries: u32,
    /// Base of the exponential retry backoff, in seconds
    #[arg(long, default_value = "2.0", value_parser = parse_seconds)]
    pub backoff_base: Duration,
    /// Record HTTP 403 as a failed item instead of aborting the run
    #[arg(long)]
    pub continue_on_block: bool,
    /// Only process the first N manifest items
    #[arg(long)]
    pub limit: Option<usize>,
}

fn parse_seconds(value: &str) -> Result<Duration, String> {
    let seconds: f64 = value
        .parse()
        .map_err(|e| format!("{value:?} is not a number of seconds: {e}"))?;
    Duration::try_from_secs_f64(seconds).map_err(|e| format!("{value:?}: {e}"))
}

impl ScrapeArgs {
    fn fetcher_config(&self) -> FetcherConfig {
        FetcherConfig {
            min_interval: self.min_interval,
            max_interval: self.max_interval,
            timeout: self.timeout,
            max_retries: self.max_retries,
            backoff_base: self.backoff_base,
            stop_on_block: !self.continue_on_block,
        }
    }

    const fn run_options(&self) -> RunOptions {
        RunOptions {
            validate: !self.no_validate,
            skip_existing: !self.no_skip_existing,
            checkpoint_every: 10,
            limit: self.limit,
        }
    }
}

/// Runs the scrape and prints the summary. Returns the process exit code.
pub async fn run(args: &ScrapeArgs, multi: &MultiProgress) -> u8 {
    let result = scrape(args, multi).await;

    match &result {
        Ok(metrics) => print_summary(metrics),
        Err(RunError::Blocked { url, metrics }) => {
            print_summary(metrics);
            println!("Aborted: blocked by source at {url}");
        }
        Err(e) => log::error!("{e}"),
    }

    orchestrator::exit_code(&result)
}

async fn scrape(args: &ScrapeArgs, multi: &MultiProgress) -> Result<RunMetrics, RunError> {
    let manifest = load_manifest(&args.manifest)?;
    let checkpoint_path = args
        .checkpoint
        .clone()
        .unwrap_or_else(|| manifest.default_checkpoint_path());
    let mut ledger =
        CheckpointLedger::load(checkpoint_path)?.with_retry_failures(args.retry_failures);

    let config = args.fetcher_config();
    let client = HttpPageClient::new(config.timeout)?;
    let mut fetcher = Fetcher::new(client, &config);

    let validator: &dyn Validator = &validate_fixture;
    let progress = IndicatifProgress::items_bar(multi, "Scraping");

    orchestrator::run(
        &mut fetcher,
        &mut ledger,
        &manifest,
        Some(validator),
        &args.run_options(),
        progress.as_ref(),
    )
    .await
}

fn print_summary(metrics: &RunMetrics) {
    println!();
    println!("Scrape summary");
    println!("{}", "-".repeat(40));
    println!("{metrics}");
}
