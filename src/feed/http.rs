use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use url::Url;

use crate::app::Result;
use crate::domain::FeedItem;
use crate::feed::{FeedNormalizer, FeedSource};

pub struct HttpFeedFetcher {
    client: Client,
    normalizer: FeedNormalizer,
}

impl HttpFeedFetcher {
    pub fn new() -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .gzip(true)
            .brotli(true)
            .user_agent(concat!("minbar/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            normalizer: FeedNormalizer::new(),
        }
    }
}

impl Default for HttpFeedFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FeedSource for HttpFeedFetcher {
    async fn fetch_feed(&self, url: &Url) -> Result<Vec<FeedItem>> {
        let response = self.client.get(url.clone()).send().await?;
        response.error_for_status_ref()?;

        let body = response.bytes().await?;
        self.normalizer.normalize(url.as_str(), &body)
    }
}
