use rss::Channel;

use crate::error::FetchError;
use crate::types::{Feed, FeedItem};

/// Parse an RSS 2.0 document into a [`Feed`]. Malformed XML and a
/// missing `<channel>` both come back as [`FetchError::FeedParse`];
/// absent elements default to empty strings.
pub fn parse_feed(xml: &str) -> Result<Feed, FetchError> {
    let channel = Channel::read_from(xml.as_bytes())?;

    let items = channel
        .items()
        .iter()
        .map(|item| FeedItem {
            title: item.title().unwrap_or_default().to_string(),
            link: item.link().unwrap_or_default().to_string(),
            pub_date: item.pub_date().unwrap_or_default().to_string(),
            description: item.description().unwrap_or_default().to_string(),
            categories: item
                .categories()
                .iter()
                .map(|category| category.name().to_string())
                .collect(),
        })
        .collect();

    Ok(Feed {
        title: channel.title().to_string(),
        description: channel.description().to_string(),
        link: channel.link().to_string(),
        items,
    })
}
