use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use url::Url;

/// One news entry parsed from the mosque's RSS feed.
///
/// The collection a service holds is replaced atomically on every successful
/// fetch; there is no incremental merge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedItem {
    pub id: String,
    pub title: String,
    pub link: Url,
    pub published_at: DateTime<Utc>,
    pub summary: String,
}

impl FeedItem {
    /// Generate a deterministic ID from feed URL and entry ID
    pub fn generate_id(feed_url: &str, entry_id: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(feed_url.as_bytes());
        hasher.update(entry_id.as_bytes());
        hex::encode(hasher.finalize())
    }
}
