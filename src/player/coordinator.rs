use tokio::sync::watch;
use url::Url;

use crate::app::Result;
use crate::domain::PlaybackState;
use crate::player::AudioSink;

/// Owns the audio sink and tracks which verse is current.
pub struct PlaybackCoordinator {
    sink: Box<dyn AudioSink>,
    tx: watch::Sender<PlaybackState>,
}

impl PlaybackCoordinator {
    pub fn new(sink: Box<dyn AudioSink>) -> Self {
        Self {
            sink,
            tx: watch::Sender::new(PlaybackState::default()),
        }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> PlaybackState {
        *self.tx.borrow()
    }

    /// Subscribe to state changes.
    pub fn subscribe(&self) -> watch::Receiver<PlaybackState> {
        self.tx.subscribe()
    }

    /// Start playing `item`'s audio, stopping any active stream first.
    ///
    /// On failure the coordinator is left not playing and the error
    /// propagates to the caller.
    pub async fn play(&mut self, item: u32, audio: &Url) -> Result<()> {
        if self.state().is_playing {
            self.sink.stop();
        }

        match self.sink.start(audio).await {
            Ok(()) => {
                tracing::debug!(item, "playback started");
                self.tx.send_modify(|state| {
                    state.current_item = Some(item);
                    state.is_playing = true;
                });
                Ok(())
            }
            Err(e) => {
                tracing::error!(item, "playback failed: {}", e);
                self.tx.send_modify(|state| state.is_playing = false);
                Err(e)
            }
        }
    }

    /// Pause the active stream.
    ///
    /// The current item is kept so the caller can distinguish resuming it
    /// from switching to another verse.
    pub fn pause(&mut self) {
        self.sink.pause();
        self.tx.send_modify(|state| state.is_playing = false);
    }

    /// Observe end-of-stream. Returns true if playback just finished; the
    /// current item is preserved.
    pub fn poll(&mut self) -> bool {
        if self.state().is_playing && self.sink.is_finished() {
            tracing::debug!("playback reached end of stream");
            self.tx.send_modify(|state| state.is_playing = false);
            return true;
        }
        false
    }
}
