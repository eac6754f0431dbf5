use std::sync::Arc;

use tokio::sync::watch;
use url::Url;

use crate::app::Result;
use crate::domain::{FeedItem, LoadPhase};
use crate::feed::FeedSource;

/// Published state of the news feed.
#[derive(Debug, Clone, Default)]
pub struct NewsState {
    pub phase: LoadPhase,
    pub items: Vec<FeedItem>,
    pub error: Option<String>,
}

/// Owns the fetched news collection for one feed URL.
pub struct NewsFeedService {
    source: Arc<dyn FeedSource + Send + Sync>,
    feed_url: Url,
    tx: watch::Sender<NewsState>,
}

impl NewsFeedService {
    pub fn new(source: Arc<dyn FeedSource + Send + Sync>, feed_url: Url) -> Self {
        Self {
            source,
            feed_url,
            tx: watch::Sender::new(NewsState::default()),
        }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> NewsState {
        self.tx.borrow().clone()
    }

    /// Subscribe to state changes.
    pub fn subscribe(&self) -> watch::Receiver<NewsState> {
        self.tx.subscribe()
    }

    /// Re-fetch the whole feed, replacing the collection atomically on
    /// success. A call while a refresh is in flight is a no-op; on failure
    /// whatever was shown before stays in place.
    pub async fn refresh(&self) -> Result<()> {
        let entered = self.tx.send_if_modified(|state| {
            if state.phase.is_loading() {
                return false;
            }
            state.phase = LoadPhase::Loading;
            true
        });
        if !entered {
            tracing::debug!("feed refresh already in flight, ignoring");
            return Ok(());
        }

        match self.source.fetch_feed(&self.feed_url).await {
            Ok(items) => {
                tracing::info!(count = items.len(), "news feed refreshed");
                self.tx.send_modify(|state| {
                    state.phase = LoadPhase::Loaded;
                    state.items = items;
                    state.error = None;
                });
                Ok(())
            }
            Err(e) => {
                tracing::error!("news feed refresh failed: {}", e);
                self.tx.send_modify(|state| {
                    state.phase = LoadPhase::Failed;
                    state.error = Some(e.to_string());
                });
                Err(e)
            }
        }
    }
}
