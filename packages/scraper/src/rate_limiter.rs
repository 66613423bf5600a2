//! Jittered request spacing.

use std::time::Duration;

use rand::{Rng as _, SeedableRng as _, rngs::StdRng};
use tokio::time::Instant;

/// Enforces a randomized minimum gap between consecutive requests.
///
/// Every call to [`RateLimiter::wait`] draws a fresh interval uniformly
/// from `[min_interval, max_interval]` and sleeps until that much time has
/// passed since the previous request started. One instance is shared by
/// every attempt of a run, retries included.
#[derive(Debug)]
pub struct RateLimiter {
    min_interval: Duration,
    max_interval: Duration,
    rng: StdRng,
    last_request: Option<Instant>,
}

impl RateLimiter {
    /// Creates a limiter seeded from the OS. A `max_interval` below
    /// `min_interval` is raised to it.
    #[must_use]
    pub fn new(min_interval: Duration, max_interval: Duration) -> Self {
        Self::with_rng(min_interval, max_interval, StdRng::from_entropy())
    }

    /// Creates a limiter with a deterministic jitter sequence.
    #[must_use]
    pub fn with_seed(min_interval: Duration, max_interval: Duration, seed: u64) -> Self {
        Self::with_rng(min_interval, max_interval, StdRng::seed_from_u64(seed))
    }

    fn with_rng(min_interval: Duration, max_interval: Duration, rng: StdRng) -> Self {
        Self {
            min_interval,
            max_interval: max_interval.max(min_interval),
            rng,
            last_request: None,
        }
    }

    /// Draws the next interval in `[min_interval, max_interval]`.
    pub fn next_interval(&mut self) -> Duration {
        if self.max_interval <= self.min_interval {
            return self.min_interval;
        }
        let seconds = self
            .rng
            .gen_range(self.min_interval.as_secs_f64()..=self.max_interval.as_secs_f64());
        Duration::from_secs_f64(seconds)
    }

    /// Sleeps until a freshly drawn interval has elapsed since the last
    /// request, then records now as the start of the next one.
    pub async fn wait(&mut self) {
        let interval = self.next_interval();
        if let Some(last) = self.last_request {
            let elapsed = last.elapsed();
            if elapsed < interval {
                let remaining = interval - elapsed;
                log::debug!("Rate limiter sleeping {remaining:?}");
                tokio::time::sleep(remaining).await;
            }
        }
        self.last_request = Some(Instant::now());
    }

    /// When the previous request started, if any.
    #[must_use]
    pub const fn last_request(&self) -> Option<Instant> {
        self.last_request
    }
}
