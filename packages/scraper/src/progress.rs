//! Progress reporting for a scrape run.
//!
//! The orchestrator reports through [`ProgressCallback`] without knowing
//! how progress is drawn. The binary supplies an `indicatif` bar; tests and
//! quiet runs use [`NullProgress`].

/// Receives progress updates from a run.
pub trait ProgressCallback: Send + Sync {
    /// Set the total number of work items.
    fn set_total(&self, total: u64);

    /// Advance by `delta` processed items.
    fn inc(&self, delta: u64);

    /// Update the message shown beside the indicator, usually the current
    /// URL.
    fn set_message(&self, msg: String);

    /// Mark the run finished with a final message.
    fn finish(&self, msg: String);
}

/// Ignores every update.
pub struct NullProgress;

impl ProgressCallback for NullProgress {
    fn set_total(&self, _total: u64) {}
    fn inc(&self, _delta: u64) {}
    fn set_message(&self, _msg: String) {}
    fn finish(&self, _msg: String) {}
}
