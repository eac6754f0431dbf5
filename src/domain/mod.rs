pub mod ayah;
pub mod feed;
pub mod state;
pub mod surah;

pub use ayah::Ayah;
pub use feed::FeedItem;
pub use state::{LoadPhase, PlaybackState};
pub use surah::{RevelationType, Surah};
