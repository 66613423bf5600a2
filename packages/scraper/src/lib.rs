#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Resumable, rate-limited scraping of statistics pages to disk.
//!
//! A run walks a [`manifest::Manifest`] of work items in order, one at a
//! time:
//!
//! 1. [`checkpoint::CheckpointLedger`] decides whether the item was already
//!    handled by an earlier run.
//! 2. [`fetcher::Fetcher`] waits out the jittered [`rate_limiter`]
//!    interval, issues the request through a [`client::PageClient`] and
//!    applies the [`retry`] policy.
//! 3. An optional [`orchestrator::Validator`] checks the payload before it
//!    is written to its fixture path.
//!
//! This crate knows nothing about page contents; validation rules are
//! supplied by the caller.

pub mod checkpoint;
pub mod client;
pub mod fetcher;
pub mod manifest;
pub mod metrics;
pub mod orchestrator;
pub mod progress;
pub mod rate_limiter;
pub mod retry;

/// Errors that end a single fetch.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The transport failed on every allowed attempt.
    #[error("Network error after {attempts} attempts: {source}")]
    Network {
        /// Attempts made, including the first.
        attempts: u32,
        /// The last transport error.
        #[source]
        source: client::TransportError,
    },

    /// The source answered 403 and the run is configured to stop on
    /// blocks. Fatal for the whole run.
    #[error("Blocked by source (HTTP 403) at {url}")]
    Blocked {
        /// The URL that was refused.
        url: String,
    },

    /// The request could not be built (bad URL, client setup).
    #[error("Client error: {0}")]
    Client(String),

    /// The attempt loop ended without a decision. Indicates a bug in the
    /// retry policy.
    #[error("Retry loop exhausted without a result for {url}")]
    UnexpectedExhaustion {
        /// The URL being fetched.
        url: String,
    },
}

/// Errors loading or saving the checkpoint ledger.
#[derive(Debug, thiserror::Error)]
pub enum CheckpointError {
    /// Reading or writing the checkpoint file failed.
    #[error("Checkpoint I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The checkpoint file exists but is not a valid ledger.
    #[error("Corrupt checkpoint file {path}: {source}")]
    Corrupt {
        /// The offending file.
        path: String,
        /// What failed to deserialize.
        #[source]
        source: serde_json::Error,
    },

    /// The ledger could not be serialized.
    #[error("Checkpoint serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Errors loading a manifest.
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    /// Reading the manifest file failed.
    #[error("Manifest I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A `.json` (or extension-less) manifest failed to parse.
    #[error("Manifest JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A `.toml` manifest failed to parse.
    #[error("Manifest TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// The base URL, or a work item URL relative to it, is not a URL.
    #[error("Invalid URL {url:?}: {message}")]
    InvalidUrl {
        /// The text that failed to parse.
        url: String,
        /// The URL parser's message.
        message: String,
    },
}

/// Errors that end a whole run.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    /// A fetch was refused with a block signal. The checkpoint was saved
    /// before this was returned.
    #[error("Run aborted: blocked by source at {url}")]
    Blocked {
        /// The URL that was refused.
        url: String,
        /// Outcomes recorded before the abort.
        metrics: metrics::RunMetrics,
    },

    /// The HTTP client could not be set up.
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// The checkpoint could not be saved.
    #[error(transparent)]
    Checkpoint(#[from] CheckpointError),

    /// The manifest could not be loaded.
    #[error(transparent)]
    Manifest(#[from] ManifestError),
}
