use std::time::Duration;

use serde_json::Value;
use tracing::{debug, warn};
use url::Url;

use crate::error::FetchError;
use crate::feed::parse_feed;
use crate::types::{FetchRequest, FetchResult};

/// Where the fetch service listens unless configured otherwise.
pub const DEFAULT_ENDPOINT: &str = "http://0.0.0.0:8000/fetch";

/// Client for the fetch service. POSTs a JSON [`FetchRequest`] and
/// classifies whatever comes back: RSS/XML bodies (or an XML-bearing
/// `content` field inside a JSON object) are parsed into a feed, other
/// JSON is returned as-is, and anything else is returned as raw text.
pub struct FetchClient {
    client: reqwest::Client,
    endpoint: String,
}

impl FetchClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// Like [`FetchClient::new`] but with a request timeout. The plain
    /// constructor inherits reqwest's default of no timeout.
    pub fn with_timeout(endpoint: impl Into<String>, timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(timeout)
                .build()
                .unwrap_or_else(|_| reqwest::Client::new()),
            endpoint: endpoint.into(),
        }
    }

    /// Fetch `url` with the service defaults: `max_length` 10000,
    /// `start_index` 0, not raw.
    pub async fn fetch(&self, url: &str) -> FetchResult {
        self.fetch_with(&FetchRequest::new(url)).await
    }

    /// Fetch with full control over the request fields. Transport and
    /// feed-parse failures fold into [`FetchResult::Error`]; this never
    /// returns an `Err` past its own boundary.
    pub async fn fetch_with(&self, request: &FetchRequest) -> FetchResult {
        match self.dispatch(request).await {
            Ok(result) => result,
            Err(e) => {
                warn!("request error for {}: {}", request.url, e);
                FetchResult::Error {
                    error: e.to_string(),
                }
            }
        }
    }

    async fn dispatch(&self, request: &FetchRequest) -> Result<FetchResult, FetchError> {
        let endpoint = Url::parse(&self.endpoint)?;
        debug!("fetching {} via {}", request.url, endpoint);

        let response = self
            .client
            .post(endpoint)
            .json(request)
            .send()
            .await?
            .error_for_status()?;

        let body = response.text().await?;

        if looks_like_rss(&body) {
            return Ok(FetchResult::RssFeed {
                rss_feed: parse_feed(&body)?,
            });
        }

        let value: Value = match serde_json::from_str(&body) {
            Ok(value) => value,
            Err(_) => return Ok(FetchResult::Raw { content: body }),
        };

        // Only the literal top-level `content` string of a JSON object
        // gets a second look; nothing else is reinspected for XML.
        if let Some(content) = value
            .as_object()
            .and_then(|object| object.get("content"))
            .and_then(Value::as_str)
        {
            if looks_like_rss(content) {
                return Ok(FetchResult::RssFeed {
                    rss_feed: parse_feed(content)?,
                });
            }
        }

        Ok(FetchResult::Opaque(value))
    }
}

impl Default for FetchClient {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}

/// Prefix sniff only, no Content-Type inspection.
fn looks_like_rss(body: &str) -> bool {
    let trimmed = body.trim();
    trimmed.starts_with("<?xml") || trimmed.starts_with("<rss")
}
