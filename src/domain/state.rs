/// Where a fetch-backed service is in its lifecycle.
///
/// `Idle -> Loading -> {Loaded, Failed}`. A failed fetch keeps whatever
/// collection was shown before; only the phase and error change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadPhase {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed,
}

impl LoadPhase {
    pub fn is_loading(self) -> bool {
        matches!(self, LoadPhase::Loading)
    }
}

/// What the audio coordinator is doing right now.
///
/// Invariant: `is_playing` implies `current_item` is set. Pausing keeps the
/// item so a caller can tell "resume this verse" apart from "switch verses".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlaybackState {
    pub current_item: Option<u32>,
    pub is_playing: bool,
}
