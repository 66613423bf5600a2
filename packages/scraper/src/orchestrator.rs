//! The scrape loop.
//!
//! Each [`WorkItem`] is resolved by the first rule that applies:
//!
//! 1. already completed in the ledger: skipped (`checkpointed`)
//! 2. failed in an earlier run and failures are not retried: skipped
//!    (`prior_failure`)
//! 3. destination already on disk with skip-existing on: skipped
//!    (`fixture_exists`)
//! 4. fetched:
//!    * block signal: the checkpoint is saved and the run aborts
//!    * transport failure on every attempt: failed (`network_error: ...`)
//!    * 404: failed (`not_found_404`)
//!    * any other non-200: failed (`http_<code>`)
//!    * 200 rejected by the validator: payload written to
//!      `<destination>.invalid`, failed (`validation_failed: ...`)
//!    * otherwise: payload written to the destination, completed

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::{
    FetchError, RunError,
    checkpoint::CheckpointLedger,
    client::PageClient,
    fetcher::Fetcher,
    manifest::{Manifest, WorkItem},
    metrics::RunMetrics,
    progress::ProgressCallback,
};

/// Suffix of payloads that failed validation.
pub const INVALID_SUFFIX: &str = ".invalid";

/// Checks a fetched payload before it is persisted.
pub trait Validator: Send + Sync {
    /// Returns the problems found in `raw`; empty means valid.
    fn validate(&self, raw: &[u8], validator_id: &str) -> Vec<String>;
}

impl<F> Validator for F
where
    F: Fn(&[u8], &str) -> Vec<String> + Send + Sync,
{
    fn validate(&self, raw: &[u8], validator_id: &str) -> Vec<String> {
        self(raw, validator_id)
    }
}

/// Switches for a run. Retrying prior failures is configured on the
/// [`CheckpointLedger`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOptions {
    /// Run the validator over payloads that name one.
    pub validate: bool,
    /// Skip items whose destination file already exists.
    pub skip_existing: bool,
    /// Save the checkpoint after this many processed items.
    pub checkpoint_every: u64,
    /// Only process the first `limit` items.
    pub limit: Option<usize>,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            validate: true,
            skip_existing: true,
            checkpoint_every: 10,
            limit: None,
        }
    }
}

/// Process exit status of a run: 0 when every item succeeded or was
/// skipped, 1 when any item failed, 2 when the run aborted on a block.
#[must_use]
pub const fn exit_code(result: &Result<RunMetrics, RunError>) -> u8 {
    match result {
        Ok(metrics) if metrics.failed == 0 => 0,
        Err(RunError::Blocked { .. }) => 2,
        Ok(_) | Err(_) => 1,
    }
}

enum ItemOutcome {
    Completed,
    Failed(String),
    Skipped(&'static str),
}

/// Drives `manifest` through fetch, validation and persistence, recording
/// each outcome in `ledger`.
///
/// The ledger is saved every [`RunOptions::checkpoint_every`] processed
/// items and once more before returning, whether the run finished or
/// aborted.
///
/// # Errors
///
/// * [`RunError::Blocked`] if the source refused a request with a block
///   signal. Items after it are never attempted. Returned even when the
///   final checkpoint save fails; that failure is logged.
/// * [`RunError::Checkpoint`] if the ledger cannot be saved.
pub async fn run<C: PageClient>(
    fetcher: &mut Fetcher<C>,
    ledger: &mut CheckpointLedger,
    manifest: &Manifest,
    validator: Option<&dyn Validator>,
    options: &RunOptions,
    progress: &dyn ProgressCallback,
) -> Result<RunMetrics, RunError> {
    let items: Vec<&WorkItem> = manifest
        .items
        .iter()
        .take(options.limit.unwrap_or(usize::MAX))
        .collect();
    let mut metrics = RunMetrics::new(items.len() as u64);
    let checkpoint_every = options.checkpoint_every.max(1);

    log::info!(
        "Scraping {} of {} manifest items",
        items.len(),
        manifest.items.len()
    );
    progress.set_total(metrics.total);

    for item in items {
        let url = item.source_url.as_str();
        progress.set_message(url.to_owned());

        let outcome = match process_item(fetcher, ledger, item, validator, options).await {
            Ok(outcome) => outcome,
            Err(FetchError::Blocked { url }) => {
                if let Err(e) = ledger.save() {
                    log::error!("Could not save checkpoint before aborting: {e}");
                }
                progress.finish(format!("Aborted: blocked at {url}"));
                log::error!("Run aborted after {} items: {metrics}", metrics.processed());
                return Err(RunError::Blocked { url, metrics });
            }
            Err(e @ FetchError::Network { .. }) => {
                ItemOutcome::Failed(format!("network_error: {e}"))
            }
            Err(e) => ItemOutcome::Failed(format!("fetch_error: {e}")),
        };

        match outcome {
            ItemOutcome::Completed => {
                log::info!("Saved {url} to {}", item.destination_path.display());
                ledger.mark_completed(url, &item.destination_path);
                metrics.record_completed();
            }
            ItemOutcome::Failed(reason) => {
                log::warn!("Failed {url}: {reason}");
                ledger.mark_failed(url, &item.destination_path, &reason);
                metrics.record_failed(&reason);
            }
            ItemOutcome::Skipped(reason) => {
                log::debug!("Skipped {url}: {reason}");
                // `checkpointed` and `prior_failure` keep their existing
                // ledger entry; the maps stay disjoint.
                if reason == "fixture_exists" {
                    ledger.mark_skipped(url, &item.destination_path, reason);
                }
                metrics.record_skipped();
            }
        }

        progress.inc(1);
        if metrics.processed() % checkpoint_every == 0 {
            ledger.save()?;
        }
    }

    ledger.save()?;
    progress.finish(format!(
        "{} completed, {} failed, {} skipped",
        metrics.completed, metrics.failed, metrics.skipped
    ));
    log::info!("Run finished: {metrics}");
    Ok(metrics)
}

async fn process_item<C: PageClient>(
    fetcher: &mut Fetcher<C>,
    ledger: &CheckpointLedger,
    item: &WorkItem,
    validator: Option<&dyn Validator>,
    options: &RunOptions,
) -> Result<ItemOutcome, FetchError> {
    let url = item.source_url.as_str();

    if ledger.is_completed(url) {
        return Ok(ItemOutcome::Skipped("checkpointed"));
    }
    if ledger.is_failed(url) && !ledger.should_retry_failure(url) {
        return Ok(ItemOutcome::Skipped("prior_failure"));
    }
    if options.skip_existing && item.destination_path.exists() {
        return Ok(ItemOutcome::Skipped("fixture_exists"));
    }

    let response = fetcher.fetch(url).await?;
    match response.status {
        200 => {}
        404 => return Ok(ItemOutcome::Failed("not_found_404".to_owned())),
        status => return Ok(ItemOutcome::Failed(format!("http_{status}"))),
    }

    if options.validate
        && let (Some(validator), Some(validator_id)) = (validator, item.validator_id.as_deref())
    {
        let errors = validator.validate(&response.body, validator_id);
        if !errors.is_empty() {
            let aside = invalid_path(&item.destination_path);
            if let Err(e) = write_payload(&aside, &response.body) {
                log::warn!("Could not keep invalid payload for {url}: {e}");
            }
            return Ok(ItemOutcome::Failed(format!(
                "validation_failed: {}",
                errors.join("; ")
            )));
        }
    }

    Ok(match write_payload(&item.destination_path, &response.body) {
        Ok(()) => ItemOutcome::Completed,
        Err(e) => ItemOutcome::Failed(format!("write_error: {e}")),
    })
}

/// `<destination>.invalid`, next to the destination.
#[must_use]
pub fn invalid_path(destination: &Path) -> PathBuf {
    let mut path = OsString::from(destination.as_os_str());
    path.push(INVALID_SUFFIX);
    PathBuf::from(path)
}

fn write_payload(path: &Path, body: &[u8]) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, body)
}
