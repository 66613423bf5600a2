//! Response classification for the fetch retry loop.
//!
//! [`RetryPolicy::classify`] turns the outcome of one attempt into a
//! [`Decision`]; [`crate::fetcher::Fetcher`] runs the loop. Rules, checked
//! in order:
//!
//! | outcome                  | not last attempt       | last attempt        |
//! |--------------------------|------------------------|---------------------|
//! | transport error          | retry after backoff    | fatal network error |
//! | 403, stop-on-block       | fatal block            | fatal block         |
//! | 403, continue            | return                 | return              |
//! | 429, numeric Retry-After | wait, same attempt     | wait, same attempt  |
//! | 429                      | retry after backoff    | return              |
//! | 5xx                      | retry after backoff    | return              |
//! | anything else            | return                 | return              |
//!
//! A numeric `Retry-After` is slept exactly and does not use up an attempt.

use std::time::Duration;

use crate::{
    FetchError,
    client::{RawResponse, TransportError},
};

/// Upper bound of a computed backoff delay.
pub const MAX_BACKOFF: Duration = Duration::from_secs(300);

const FORBIDDEN: u16 = 403;
const TOO_MANY_REQUESTS: u16 = 429;
const FIRST_SERVER_ERROR: u16 = 500;

/// What the fetch loop should do after an attempt.
#[derive(Debug)]
pub enum Decision {
    /// Sleep for the server's `Retry-After`, then repeat the same attempt.
    RetryAfter(Duration),
    /// Sleep for `delay`, then try again.
    Retry {
        delay: Duration,
        /// Short description for logs (`"HTTP 503"`, `"timeout: ..."`).
        reason: String,
    },
    /// Hand this response to the caller.
    Return(RawResponse),
    /// Stop with this error.
    Fatal(FetchError),
}

/// `min(300s, base * 2^attempt)`, with `attempt` counted from 0.
#[must_use]
pub fn backoff_delay(base: Duration, attempt: u32) -> Duration {
    if base.is_zero() {
        return Duration::ZERO;
    }
    let exponent = i32::try_from(attempt).unwrap_or(i32::MAX);
    let seconds = base.as_secs_f64() * 2_f64.powi(exponent);
    if seconds.is_finite() {
        Duration::from_secs_f64(seconds.min(MAX_BACKOFF.as_secs_f64()))
    } else {
        MAX_BACKOFF
    }
}

/// Parses a numeric `Retry-After` value (seconds). HTTP-date values,
/// negative numbers and values too large for a [`Duration`] are ignored.
#[must_use]
pub fn parse_retry_after(value: &str) -> Option<Duration> {
    let seconds: f64 = value.trim().parse().ok()?;
    Duration::try_from_secs_f64(seconds).ok()
}

/// The retry rules of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Retries after the first attempt; `max_retries + 1` attempts total.
    pub max_retries: u32,
    pub backoff_base: Duration,
    /// Treat HTTP 403 as a fatal block signal for the whole run.
    pub stop_on_block: bool,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 3,
            backoff_base: Duration::from_secs(2),
            stop_on_block: true,
        }
    }
}

impl RetryPolicy {
    /// Total attempts allowed per fetch.
    #[must_use]
    pub const fn max_attempts(&self) -> u32 {
        self.max_retries.saturating_add(1)
    }

    /// Classifies the outcome of attempt number `attempt` (from 0).
    #[must_use]
    pub fn classify(
        &self,
        url: &str,
        attempt: u32,
        outcome: Result<RawResponse, TransportError>,
    ) -> Decision {
        let is_last = attempt >= self.max_retries;
        let backoff = || backoff_delay(self.backoff_base, attempt);

        let response = match outcome {
            Err(source) if is_last => {
                return Decision::Fatal(FetchError::Network {
                    attempts: attempt + 1,
                    source,
                });
            }
            Err(e) => {
                return Decision::Retry {
                    delay: backoff(),
                    reason: e.0,
                };
            }
            Ok(response) => response,
        };

        match response.status {
            FORBIDDEN if self.stop_on_block => Decision::Fatal(FetchError::Blocked {
                url: url.to_owned(),
            }),
            TOO_MANY_REQUESTS => {
                let retry_after = response.retry_after.as_deref().and_then(parse_retry_after);
                match retry_after {
                    Some(delay) => Decision::RetryAfter(delay),
                    None if is_last => Decision::Return(response),
                    None => Decision::Retry {
                        delay: backoff(),
                        reason: format!("HTTP {TOO_MANY_REQUESTS}"),
                    },
                }
            }
            status if status >= FIRST_SERVER_ERROR && !is_last => Decision::Retry {
                delay: backoff(),
                reason: format!("HTTP {status}"),
            },
            _ => Decision::Return(response),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const URL: &str = "https://example.test/page.html";

    fn policy() -> RetryPolicy {
        RetryPolicy::default()
    }

    fn status(code: u16) -> Result<RawResponse, TransportError> {
        Ok(RawResponse::new(code, Vec::new()))
    }

    #[test]
    fn backoff_doubles_until_cap() {
        let base = Duration::from_secs(2);
        let delays: Vec<Duration> = (0..12).map(|k| backoff_delay(base, k)).collect();
        assert_eq!(delays[0], Duration::from_secs(2));
        assert_eq!(delays[1], Duration::from_secs(4));
        assert_eq!(delays[3], Duration::from_secs(16));
        assert!(delays.windows(2).all(|pair| pair[0] <= pair[1]));
        assert_eq!(delays[11], MAX_BACKOFF);
        assert_eq!(backoff_delay(base, u32::MAX), MAX_BACKOFF);
    }

    #[test]
    fn backoff_matches_formula_for_fractional_base() {
        let base = Duration::from_millis(1500);
        for k in 0..10 {
            let expected = (1.5 * f64::from(2_u32.pow(k))).min(300.0);
            let actual = backoff_delay(base, k).as_secs_f64();
            assert!((actual - expected).abs() < 1e-9, "attempt {k}");
        }
    }

    #[test]
    fn transport_errors_retry_then_fail() {
        let error = || Err(TransportError("connect: refused".to_owned()));
        assert!(matches!(
            policy().classify(URL, 0, error()),
            Decision::Retry { .. }
        ));
        assert!(matches!(
            policy().classify(URL, 3, error()),
            Decision::Fatal(FetchError::Network { attempts: 4, .. })
        ));
    }

    #[test]
    fn forbidden_is_fatal_when_stopping_on_block() {
        assert!(matches!(
            policy().classify(URL, 0, status(403)),
            Decision::Fatal(FetchError::Blocked { .. })
        ));
        let lenient = RetryPolicy {
            stop_on_block: false,
            ..policy()
        };
        assert!(matches!(
            lenient.classify(URL, 0, status(403)),
            Decision::Return(RawResponse { status: 403, .. })
        ));
    }

    #[test]
    fn too_many_requests_honours_retry_after() {
        let response = Ok(RawResponse::new(429, Vec::new()).with_retry_after("17"));
        match policy().classify(URL, 1, response) {
            Decision::RetryAfter(delay) => assert_eq!(delay, Duration::from_secs(17)),
            other => panic!("expected retry-after, got {other:?}"),
        }
        match policy().classify(URL, 1, status(429)) {
            Decision::Retry { delay, .. } => assert_eq!(delay, Duration::from_secs(4)),
            other => panic!("expected retry, got {other:?}"),
        }
        let dated = Ok(RawResponse::new(429, Vec::new())
            .with_retry_after("Wed, 21 Oct 2015 07:28:00 GMT"));
        match policy().classify(URL, 0, dated) {
            Decision::Retry { delay, .. } => assert_eq!(delay, Duration::from_secs(2)),
            other => panic!("expected retry, got {other:?}"),
        }
    }

    #[test]
    fn retry_after_applies_on_the_last_attempt() {
        let response = Ok(RawResponse::new(429, Vec::new()).with_retry_after("7200"));
        match policy().classify(URL, 3, response) {
            Decision::RetryAfter(delay) => assert_eq!(delay, Duration::from_secs(7200)),
            other => panic!("expected retry-after, got {other:?}"),
        }
    }

    #[test]
    fn server_errors_are_returned_once_exhausted() {
        assert!(matches!(
            policy().classify(URL, 2, status(503)),
            Decision::Retry { .. }
        ));
        assert!(matches!(
            policy().classify(URL, 3, status(503)),
            Decision::Return(RawResponse { status: 503, .. })
        ));
        assert!(matches!(
            policy().classify(URL, 3, status(429)),
            Decision::Return(RawResponse { status: 429, .. })
        ));
    }

    #[test]
    fn other_statuses_return_immediately() {
        for code in [200, 301, 404, 410] {
            assert!(matches!(
                policy().classify(URL, 0, status(code)),
                Decision::Return(RawResponse { status, .. }) if status == code
            ));
        }
    }

    #[test]
    fn retry_after_parsing() {
        assert_eq!(parse_retry_after(" 5 "), Some(Duration::from_secs(5)));
        assert_eq!(parse_retry_after("0.5"), Some(Duration::from_millis(500)));
        assert_eq!(parse_retry_after("-1"), None);
        assert_eq!(parse_retry_after("soon"), None);
        assert_eq!(parse_retry_after("999999"), Some(Duration::from_secs(999_999)));
        assert_eq!(parse_retry_after("1e300"), None);
    }
}
