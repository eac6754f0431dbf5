//! Recitation audio playback.
//!
//! At most one stream is active at a time. [`PlaybackCoordinator`] owns the
//! output device behind the [`AudioSink`] seam; `play`, `pause`, and `stop`
//! are the only mutators of playback state.

pub mod coordinator;
pub mod rodio_sink;

use async_trait::async_trait;
use url::Url;

use crate::app::Result;

pub use coordinator::PlaybackCoordinator;
pub use rodio_sink::RodioSink;

/// Output device handle.
///
/// `?Send` because audio output streams are bound to the thread that opened
/// them; the coordinator lives on the interaction task.
#[async_trait(?Send)]
pub trait AudioSink {
    /// Start streaming `url` from the beginning, replacing any active stream.
    async fn start(&mut self, url: &Url) -> Result<()>;

    /// Halt delivery. A later `start` begins a fresh stream.
    fn pause(&mut self);

    /// Discard the active stream, if any.
    fn stop(&mut self);

    /// True once the active stream has played to its end (or none exists).
    fn is_finished(&self) -> bool;
}
