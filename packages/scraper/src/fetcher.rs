//! The rate-limited retry loop around a [`PageClient`].

use std::time::Duration;

use crate::{
    FetchError,
    client::{PageClient, RawResponse},
    rate_limiter::RateLimiter,
    retry::{Decision, RetryPolicy},
};

/// Tunables for a [`Fetcher`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetcherConfig {
    /// Lower bound of the jittered gap between requests.
    pub min_interval: Duration,
    /// Upper bound of the jittered gap between requests.
    pub max_interval: Duration,
    /// Per-request timeout, applied by the HTTP client.
    pub timeout: Duration,
    pub max_retries: u32,
    pub backoff_base: Duration,
    /// Treat HTTP 403 as fatal for the whole run.
    pub stop_on_block: bool,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        let policy = RetryPolicy::default();
        Self {
            min_interval: Duration::from_secs(3),
            max_interval: Duration::from_secs(6),
            timeout: Duration::from_secs(30),
            max_retries: policy.max_retries,
            backoff_base: policy.backoff_base,
            stop_on_block: policy.stop_on_block,
        }
    }
}

impl FetcherConfig {
    #[must_use]
    pub const fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy {
            max_retries: self.max_retries,
            backoff_base: self.backoff_base,
            stop_on_block: self.stop_on_block,
        }
    }
}

/// Fetches pages one at a time, spacing every attempt (retries included)
/// through a single [`RateLimiter`].
#[derive(Debug)]
pub struct Fetcher<C> {
    client: C,
    policy: RetryPolicy,
    limiter: RateLimiter,
}

impl<C: PageClient> Fetcher<C> {
    #[must_use]
    pub fn new(client: C, config: &FetcherConfig) -> Self {
        let limiter = RateLimiter::new(config.min_interval, config.max_interval);
        Self::with_rate_limiter(client, config, limiter)
    }

    #[must_use]
    pub const fn with_rate_limiter(
        client: C,
        config: &FetcherConfig,
        limiter: RateLimiter,
    ) -> Self {
        Self {
            client,
            policy: config.retry_policy(),
            limiter,
        }
    }

    #[must_use]
    pub const fn client(&self) -> &C {
        &self.client
    }

    /// Fetches `url`, retrying transient failures.
    ///
    /// Any response the policy does not retry is returned as-is, including
    /// 404s and a 5xx or 429 that survived every attempt. The caller
    /// decides what those mean. A 429 carrying a numeric `Retry-After` is
    /// waited out for exactly that long and repeated without using up an
    /// attempt.
    ///
    /// # Errors
    ///
    /// * [`FetchError::Blocked`] on HTTP 403 with stop-on-block enabled.
    /// * [`FetchError::Network`] if the last attempt failed in transport.
    /// * [`FetchError::UnexpectedExhaustion`] if the loop ends undecided.
    pub async fn fetch(&mut self, url: &str) -> Result<RawResponse, FetchError> {
        let max_attempts = self.policy.max_attempts();
        let mut attempt = 0;
        while attempt < max_attempts {
            self.limiter.wait().await;
            let outcome = self.client.get(url).await;

            match self.policy.classify(url, attempt, outcome) {
                Decision::Return(response) => {
                    log::debug!("HTTP {} for {url}", response.status);
                    return Ok(response);
                }
                Decision::Fatal(e) => {
                    if matches!(e, FetchError::Blocked { .. }) {
                        log::error!("Blocked by source at {url}; stopping");
                    }
                    return Err(e);
                }
                Decision::RetryAfter(delay) => {
                    log::warn!("HTTP 429 for {url}, server asked to wait {delay:?}");
                    tokio::time::sleep(delay).await;
                }
                Decision::Retry { delay, reason } => {
                    log::warn!(
                        "{reason} for {url} (attempt {}/{max_attempts}), retrying in {delay:?}",
                        attempt + 1
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
            }
        }

        Err(FetchError::UnexpectedExhaustion {
            url: url.to_owned(),
        })
    }
}
