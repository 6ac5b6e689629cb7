//! Fetch web content through a fetch service and parse RSS when the
//! payload turns out to be a feed.
//!
//! [`FetchClient`] POSTs a [`FetchRequest`] to the service and sniffs
//! the response body; XML goes through [`parse_feed`], JSON and plain
//! text pass through untouched as [`FetchResult`] variants.

pub mod client;
pub mod error;
pub mod feed;
pub mod types;

pub use client::{FetchClient, DEFAULT_ENDPOINT};
pub use error::FetchError;
pub use feed::parse_feed;
pub use types::{Feed, FeedItem, FetchRequest, FetchResult};
