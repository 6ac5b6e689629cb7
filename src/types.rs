use serde::{Deserialize, Serialize};

/// Request body sent to the fetch service. Fields are passed through
/// verbatim; `max_length` and `start_index` are interpreted by the
/// service, not by us.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FetchRequest {
    pub url: String,
    pub max_length: u64,
    pub start_index: u64,
    pub raw: bool,
}

impl FetchRequest {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_length: 10_000,
            start_index: 0,
            raw: false,
        }
    }
}

/// Everything a fetch can come back as. Untagged so each variant
/// serializes to the same JSON shape the fetch service's callers
/// already expect: `{"rss_feed": ..}`, `{"content": ..}`,
/// `{"error": ..}`, or the decoded JSON value itself.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FetchResult {
    RssFeed { rss_feed: Feed },
    Raw { content: String },
    Error { error: String },
    Opaque(serde_json::Value),
}

/// A parsed RSS 2.0 channel. Missing elements come back as empty
/// strings, never null.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Feed {
    pub title: String,
    pub description: String,
    pub link: String,
    pub items: Vec<FeedItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FeedItem {
    pub title: String,
    pub link: String,
    #[serde(rename = "pubDate")]
    pub pub_date: String,
    pub description: String,
    pub categories: Vec<String>,
}
