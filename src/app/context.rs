use std::sync::Arc;

use crate::app::error::{MinbarError, Result};
use crate::config::Config;
use crate::feed::{FeedSource, HttpFeedFetcher};
use crate::quran::{HttpQuranClient, QuranApi};
use crate::service::{NewsFeedService, SurahCatalogService, SurahDetailService};

pub struct AppContext {
    pub config: Config,
    pub catalog: SurahCatalogService,
    pub detail: SurahDetailService,
    pub news: NewsFeedService,
}

impl AppContext {
    pub fn new(config: Config) -> Result<Self> {
        let api_base = config
            .quran_api_base()
            .map_err(|e| MinbarError::Config(e.to_string()))?;
        let feed_url = config
            .news_feed_url()
            .map_err(|e| MinbarError::Config(e.to_string()))?;

        let quran: Arc<dyn QuranApi + Send + Sync> = Arc::new(HttpQuranClient::new(api_base));
        let feed: Arc<dyn FeedSource + Send + Sync> = Arc::new(HttpFeedFetcher::new());

        Ok(Self {
            catalog: SurahCatalogService::new(quran.clone()),
            detail: SurahDetailService::new(quran),
            news: NewsFeedService::new(feed, feed_url),
            config,
        })
    }
}
