use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use url::Url;

use crate::app::{MinbarError, Result};
use crate::domain::{Ayah, Surah};
use crate::quran::QuranApi;

pub struct HttpQuranClient {
    client: Client,
    base_url: Url,
}

impl HttpQuranClient {
    pub fn new(base_url: Url) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .gzip(true)
            .brotli(true)
            .user_agent(concat!("minbar/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("Failed to build HTTP client");

        Self { client, base_url }
    }

    fn detail_url(&self, number: u32) -> Result<Url> {
        let base = self.base_url.as_str().trim_end_matches('/');
        Ok(Url::parse(&format!("{}/{}", base, number))?)
    }
}

/// Decode a detail payload, enforcing ascending verse order.
fn decode_detail(body: &[u8]) -> Result<Vec<Ayah>> {
    let mut ayahs: Vec<Ayah> = serde_json::from_slice(body)?;
    ayahs.sort_by_key(|a| a.id);
    Ok(ayahs)
}

#[async_trait]
impl QuranApi for HttpQuranClient {
    async fn fetch_surah_list(&self) -> Result<Vec<Surah>> {
        let response = self.client.get(self.base_url.clone()).send().await?;
        response.error_for_status_ref()?;

        let surahs: Vec<Surah> = response.json().await?;
        Ok(surahs)
    }

    async fn fetch_surah_detail(&self, number: u32) -> Result<Vec<Ayah>> {
        if !Surah::is_valid_number(number) {
            return Err(MinbarError::InvalidSurah(number));
        }

        let response = self.client.get(self.detail_url(number)?).send().await?;
        response.error_for_status_ref()?;

        let body = response.bytes().await?;
        decode_detail(&body)
    }
}
