//! Durable per-URL progress of a scrape.
//!
//! The ledger is a JSON document with three maps keyed by absolute URL:
//!
//! ```json
//! {
//!   "completed": { "https://...": { "fixture_path": "...", "timestamp": "..." } },
//!   "failed":    { "https://...": { "fixture_path": "...", "timestamp": "...", "reason": "http_500" } },
//!   "skipped":   { ... }
//! }
//! ```
//!
//! A URL is in at most one map: marking it moves it.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::CheckpointError;

/// One URL's recorded outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerEntry {
    pub fixture_path: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Which map a URL is recorded in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedgerStatus {
    Completed,
    Failed,
    Skipped,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
struct LedgerMaps {
    #[serde(default)]
    completed: BTreeMap<String, LedgerEntry>,
    #[serde(default)]
    failed: BTreeMap<String, LedgerEntry>,
    #[serde(default)]
    skipped: BTreeMap<String, LedgerEntry>,
}

impl LedgerMaps {
    const fn map_mut(&mut self, status: LedgerStatus) -> &mut BTreeMap<String, LedgerEntry> {
        match status {
            LedgerStatus::Completed => &mut self.completed,
            LedgerStatus::Failed => &mut self.failed,
            LedgerStatus::Skipped => &mut self.skipped,
        }
    }
}

/// The checkpoint of a run, bound to the file it loads from and saves to.
#[derive(Debug, Clone)]
pub struct CheckpointLedger {
    path: PathBuf,
    maps: LedgerMaps,
    retry_failures: bool,
}

impl CheckpointLedger {
    /// Loads the ledger at `path`. A missing file is an empty ledger.
    ///
    /// # Errors
    ///
    /// * [`CheckpointError::Io`] if the file exists but cannot be read.
    /// * [`CheckpointError::Corrupt`] if it is not a valid ledger. Progress
    ///   is never silently reset.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, CheckpointError> {
        let path = path.into();
        let maps = match fs::read_to_string(&path) {
            Ok(contents) => {
                serde_json::from_str(&contents).map_err(|source| CheckpointError::Corrupt {
                    path: path.display().to_string(),
                    source,
                })?
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No checkpoint at {}, starting fresh", path.display());
                LedgerMaps::default()
            }
            Err(e) => return Err(e.into()),
        };

        let ledger = Self {
            path,
            maps,
            retry_failures: false,
        };
        log::debug!(
            "Loaded checkpoint: {} completed, {} failed, {} skipped",
            ledger.maps.completed.len(),
            ledger.maps.failed.len(),
            ledger.maps.skipped.len()
        );
        Ok(ledger)
    }

    /// Opts into re-attempting URLs that failed in an earlier run.
    #[must_use]
    pub const fn with_retry_failures(mut self, retry_failures: bool) -> Self {
        self.retry_failures = retry_failures;
        self
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes the ledger to a sibling temp file and renames it over the
    /// checkpoint path.
    ///
    /// # Errors
    ///
    /// Returns [`CheckpointError`] if serialization or any file operation
    /// fails.
    pub fn save(&self) -> Result<(), CheckpointError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let mut temp_name = self.path.file_name().unwrap_or_default().to_os_string();
        temp_name.push(".tmp");
        let temp_path = self.path.with_file_name(temp_name);

        let json = serde_json::to_string_pretty(&self.maps)?;
        fs::write(&temp_path, json)?;
        fs::rename(&temp_path, &self.path)?;

        log::debug!("Saved checkpoint to {}", self.path.display());
        Ok(())
    }

    fn mark(&mut self, status: LedgerStatus, url: &str, fixture_path: &Path, reason: Option<&str>) {
        for other in [LedgerStatus::Completed, LedgerStatus::Failed, LedgerStatus::Skipped] {
            if other != status {
                self.maps.map_mut(other).remove(url);
            }
        }
        self.maps.map_mut(status).insert(
            url.to_owned(),
            LedgerEntry {
                fixture_path: fixture_path.display().to_string(),
                timestamp: Utc::now(),
                reason: reason.map(str::to_owned),
            },
        );
    }

    pub fn mark_completed(&mut self, url: &str, fixture_path: &Path) {
        self.mark(LedgerStatus::Completed, url, fixture_path, None);
    }

    pub fn mark_failed(&mut self, url: &str, fixture_path: &Path, reason: &str) {
        self.mark(LedgerStatus::Failed, url, fixture_path, Some(reason));
    }

    pub fn mark_skipped(&mut self, url: &str, fixture_path: &Path, reason: &str) {
        self.mark(LedgerStatus::Skipped, url, fixture_path, Some(reason));
    }

    #[must_use]
    pub fn is_completed(&self, url: &str) -> bool {
        self.maps.completed.contains_key(url)
    }

    #[must_use]
    pub fn is_failed(&self, url: &str) -> bool {
        self.maps.failed.contains_key(url)
    }

    /// Whether `url` failed before and this run re-attempts failures.
    #[must_use]
    pub fn should_retry_failure(&self, url: &str) -> bool {
        self.retry_failures && self.is_failed(url)
    }

    /// Where `url` is recorded, if anywhere.
    #[must_use]
    pub fn status(&self, url: &str) -> Option<(LedgerStatus, &LedgerEntry)> {
        if let Some(entry) = self.maps.completed.get(url) {
            return Some((LedgerStatus::Completed, entry));
        }
        if let Some(entry) = self.maps.failed.get(url) {
            return Some((LedgerStatus::Failed, entry));
        }
        self.maps
            .skipped
            .get(url)
            .map(|entry| (LedgerStatus::Skipped, entry))
    }

    /// `(completed, failed, skipped)` entry counts.
    #[must_use]
    pub fn counts(&self) -> (usize, usize, usize) {
        (
            self.maps.completed.len(),
            self.maps.failed.len(),
            self.maps.skipped.len(),
        )
    }
}
