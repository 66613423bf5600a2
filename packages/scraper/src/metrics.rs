//! Per-run outcome counters.

use std::collections::BTreeMap;
use std::fmt;

/// Counts of item outcomes for one run. Never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunMetrics {
    pub total: u64,
    pub completed: u64,
    pub failed: u64,
    pub skipped: u64,
    /// Failure count per reason kind (`http_500`, `validation_failed`, ...).
    pub failure_reasons: BTreeMap<String, u64>,
}

/// The part of a failure reason before any `:` detail.
#[must_use]
pub fn reason_kind(reason: &str) -> &str {
    reason.split_once(':').map_or(reason, |(kind, _)| kind).trim()
}

impl RunMetrics {
    #[must_use]
    pub fn new(total: u64) -> Self {
        Self {
            total,
            ..Self::default()
        }
    }

    pub const fn record_completed(&mut self) {
        self.completed += 1;
    }

    pub const fn record_skipped(&mut self) {
        self.skipped += 1;
    }

    pub fn record_failed(&mut self, reason: &str) {
        self.failed += 1;
        *self
            .failure_reasons
            .entry(reason_kind(reason).to_owned())
            .or_default() += 1;
    }

    /// Items that reached a terminal state.
    #[must_use]
    pub const fn processed(&self) -> u64 {
        self.completed + self.failed + self.skipped
    }

    /// Failure reasons, most frequent first, ties by name.
    #[must_use]
    pub fn sorted_failure_reasons(&self) -> Vec<(&str, u64)> {
        let mut reasons: Vec<(&str, u64)> = self
            .failure_reasons
            .iter()
            .map(|(reason, count)| (reason.as_str(), *count))
            .collect();
        reasons.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        reasons
    }
}

impl fmt::Display for RunMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "total: {}, completed: {}, failed: {}, skipped: {}",
            self.total, self.completed, self.failed, self.skipped
        )?;
        for (reason, count) in self.sorted_failure_reasons() {
            write!(f, "\n  {reason}: {count}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_failures_by_kind() {
        let mut metrics = RunMetrics::new(5);
        metrics.record_failed("validation_failed: table pbp has no data rows");
        metrics.record_failed("validation_failed: page is empty");
        metrics.record_failed("http_500");
        metrics.record_completed();
        metrics.record_skipped();

        assert_eq!(metrics.processed(), 5);
        assert_eq!(
            metrics.sorted_failure_reasons(),
            vec![("validation_failed", 2), ("http_500", 1)]
        );
        assert_eq!(
            metrics.to_string(),
            "total: 5, completed: 1, failed: 3, skipped: 1\n  validation_failed: 2\n  http_500: 1"
        );
    }

    #[test]
    fn reason_kind_without_detail_is_whole_reason() {
        assert_eq!(reason_kind("not_found_404"), "not_found_404");
        assert_eq!(reason_kind("network_error: timeout: x"), "network_error");
    }
}
