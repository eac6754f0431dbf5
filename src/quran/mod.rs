pub mod http;

use async_trait::async_trait;

use crate::app::Result;
use crate::domain::{Ayah, Surah};

pub use http::HttpQuranClient;

/// Remote source of Quran content.
#[async_trait]
pub trait QuranApi {
    /// Fetch the catalog of all surahs.
    async fn fetch_surah_list(&self) -> Result<Vec<Surah>>;

    /// Fetch the verses of one surah, sorted ascending by verse id.
    ///
    /// `number` outside 1-114 fails without issuing a request.
    async fn fetch_surah_detail(&self, number: u32) -> Result<Vec<Ayah>>;
}
