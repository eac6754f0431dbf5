pub mod http;

use async_trait::async_trait;
use chrono::Utc;
use feed_rs::parser;
use html_escape::decode_html_entities;
use url::Url;

use crate::app::{MinbarError, Result};
use crate::domain::FeedItem;

pub use http::HttpFeedFetcher;

/// Remote source of news items.
#[async_trait]
pub trait FeedSource {
    /// Fetch and parse the feed at `url`. The whole collection is re-fetched
    /// each call; there is no pagination.
    async fn fetch_feed(&self, url: &Url) -> Result<Vec<FeedItem>>;
}

/// Converts a raw feed document into [`FeedItem`]s.
///
/// Entries missing a title, link, or timestamp are dropped rather than
/// surfaced half-filled. A document with zero entries is an empty
/// collection, not an error.
#[derive(Clone)]
pub struct FeedNormalizer;

impl Default for FeedNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl FeedNormalizer {
    pub fn new() -> Self {
        Self
    }

    pub fn normalize(&self, feed_url: &str, body: &[u8]) -> Result<Vec<FeedItem>> {
        let feed = parser::parse(body).map_err(|e| MinbarError::FeedParse(e.to_string()))?;

        let items: Vec<FeedItem> = feed
            .entries
            .into_iter()
            .filter_map(|entry| {
                let title = entry
                    .title
                    .map(|t| decode_html_entities(&t.content).to_string())?;
                let link = entry
                    .links
                    .first()
                    .and_then(|l| Url::parse(&l.href).ok())?;
                let published_at = entry
                    .published
                    .or(entry.updated)
                    .map(|dt| dt.with_timezone(&Utc))?;
                let summary = entry
                    .summary
                    .map(|s| decode_html_entities(&s.content).to_string())
                    .unwrap_or_default();

                let entry_id = if entry.id.is_empty() {
                    link.as_str().to_string()
                } else {
                    entry.id
                };

                Some(FeedItem {
                    id: FeedItem::generate_id(feed_url, &entry_id),
                    title,
                    link,
                    published_at,
                    summary,
                })
            })
            .collect();

        Ok(items)
    }
}
