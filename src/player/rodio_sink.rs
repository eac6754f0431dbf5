use std::io::Cursor;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use rodio::{Decoder, OutputStream, Sink};
use url::Url;

use crate::app::{MinbarError, Result};
use crate::player::AudioSink;

/// Plays recitation audio through the default output device.
///
/// The whole resource is fetched before decoding; ayah recitations are short
/// clips, not continuous streams.
pub struct RodioSink {
    client: Client,
    active: Option<ActiveStream>,
}

struct ActiveStream {
    // Held alive for the device; dropping the stream closes it.
    _stream: OutputStream,
    sink: Sink,
}

impl RodioSink {
    pub fn new() -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .user_agent(concat!("minbar/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            active: None,
        }
    }
}

impl Default for RodioSink {
    fn default() -> Self {
        Self::new()
    }
}

fn unopenable<E: std::fmt::Display>(e: E) -> MinbarError {
    MinbarError::Playback(e.to_string())
}

#[async_trait(?Send)]
impl AudioSink for RodioSink {
    async fn start(&mut self, url: &Url) -> Result<()> {
        self.stop();

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(unopenable)?
            .error_for_status()
            .map_err(unopenable)?;
        let bytes = response.bytes().await.map_err(unopenable)?.to_vec();

        let (stream, handle) = OutputStream::try_default().map_err(unopenable)?;
        let sink = Sink::try_new(&handle).map_err(unopenable)?;
        let source = Decoder::new(Cursor::new(bytes)).map_err(unopenable)?;
        sink.append(source);

        self.active = Some(ActiveStream {
            _stream: stream,
            sink,
        });
        Ok(())
    }

    fn pause(&mut self) {
        if let Some(active) = &self.active {
            active.sink.pause();
        }
    }

    fn stop(&mut self) {
        if let Some(active) = self.active.take() {
            active.sink.stop();
        }
    }

    fn is_finished(&self) -> bool {
        self.active.as_ref().map(|a| a.sink.empty()).unwrap_or(true)
    }
}
