use serde::{Deserialize, Serialize};
use url::Url;

/// One verse of a surah, with its recitation audio.
///
/// The `id` is unique and ordered within a surah; a detail fetch replaces
/// the whole set when a different surah is selected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ayah {
    pub id: u32,
    pub text: String,
    pub audio: Url,
}
