use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    #[error("RSS parsing failed: {0}")]
    FeedParse(#[from] rss::Error),

    #[error("invalid fetch endpoint: {0}")]
    Endpoint(#[from] url::ParseError),
}
