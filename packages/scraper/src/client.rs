//! The HTTP seam.
//!
//! [`PageClient`] issues exactly one GET per call and reports what came
//! back; retry, rate limiting and status interpretation live in
//! [`crate::fetcher`]. [`HttpPageClient`] is the `reqwest` implementation.

use std::time::Duration;

use crate::FetchError;

/// User agent sent with every request.
pub const USER_AGENT: &str = concat!(
    "courtside/",
    env!("CARGO_PKG_VERSION"),
    " (+statistics fixture collector)"
);

/// What a single GET returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    /// HTTP status code.
    pub status: u16,
    /// The raw `Retry-After` header, if present.
    pub retry_after: Option<String>,
    /// The response body.
    pub body: Vec<u8>,
}

impl RawResponse {
    #[must_use]
    pub const fn new(status: u16, body: Vec<u8>) -> Self {
        Self {
            status,
            retry_after: None,
            body,
        }
    }

    #[must_use]
    pub fn with_retry_after(mut self, value: &str) -> Self {
        self.retry_after = Some(value.to_owned());
        self
    }
}

/// A request that produced no HTTP response (DNS, connect, timeout, reset,
/// truncated body).
#[derive(Debug, Clone, thiserror::Error)]
#[error("{0}")]
pub struct TransportError(pub String);

impl From<reqwest::Error> for TransportError {
    fn from(e: reqwest::Error) -> Self {
        let kind = if e.is_timeout() {
            "timeout"
        } else if e.is_connect() {
            "connect"
        } else if e.is_body() || e.is_decode() {
            "body"
        } else {
            "request"
        };
        Self(format!("{kind}: {e}"))
    }
}

/// Issues one GET request.
pub trait PageClient: Send + Sync {
    /// Fetches `url` once. Any HTTP status is a successful call.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] when no response was received.
    fn get(
        &self,
        url: &str,
    ) -> impl std::future::Future<Output = Result<RawResponse, TransportError>> + Send;
}

/// [`PageClient`] backed by a shared `reqwest` connection pool.
#[derive(Debug, Clone)]
pub struct HttpPageClient {
    client: reqwest::Client,
}

impl HttpPageClient {
    /// Builds a client with a per-request `timeout`.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Client`] if the TLS backend cannot be
    /// initialized.
    pub fn new(timeout: Duration) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| FetchError::Client(e.to_string()))?;
        Ok(Self { client })
    }
}

impl PageClient for HttpPageClient {
    async fn get(&self, url: &str) -> Result<RawResponse, TransportError> {
        let response = self.client.get(url).send().await?;
        let status = response.status().as_u16();
        let retry_after = response
            .headers()
            .get(reqwest::header::RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .map(String::from);
        let body = response.bytes().await?.to_vec();
        Ok(RawResponse {
            status,
            retry_after,
            body,
        })
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::collections::{BTreeMap, VecDeque};
    use std::sync::Mutex;

    use tokio::time::Instant;

    use super::{PageClient, RawResponse, TransportError};

    type Scripted = Result<RawResponse, TransportError>;

    /// In-memory [`PageClient`] replaying scripted outcomes per URL.
    ///
    /// URLs without a script (or whose script ran out) get a 200 with a
    /// small page body.
    #[derive(Default)]
    pub struct ScriptedClient {
        scripts: Mutex<BTreeMap<String, VecDeque<Scripted>>>,
        requests: Mutex<Vec<(String, Instant)>>,
    }

    impl ScriptedClient {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn script(self, url: &str, outcomes: impl IntoIterator<Item = Scripted>) -> Self {
            self.scripts
                .lock()
                .unwrap()
                .entry(url.to_owned())
                .or_default()
                .extend(outcomes);
            self
        }

        pub fn status(code: u16) -> Scripted {
            Ok(RawResponse::new(code, format!("<html>{code}</html>").into_bytes()))
        }

        pub fn requests(&self) -> Vec<String> {
            self.requests
                .lock()
                .unwrap()
                .iter()
                .map(|(url, _)| url.clone())
                .collect()
        }

        pub fn request_times(&self) -> Vec<Instant> {
            self.requests.lock().unwrap().iter().map(|(_, at)| *at).collect()
        }
    }

    impl PageClient for ScriptedClient {
        fn get(
            &self,
            url: &str,
        ) -> impl std::future::Future<Output = Result<RawResponse, TransportError>> + Send
        {
            self.requests
                .lock()
                .unwrap()
                .push((url.to_owned(), Instant::now()));
            let outcome = self
                .scripts
                .lock()
                .unwrap()
                .get_mut(url)
                .and_then(VecDeque::pop_front)
                .unwrap_or_else(|| Self::status(200));
            async move { outcome }
        }
    }
}
