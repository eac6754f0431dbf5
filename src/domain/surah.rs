use std::fmt;

use serde::{Deserialize, Serialize};

/// Whether a surah was revealed in Mecca or Medina.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RevelationType {
    Meccan,
    Medinan,
}

impl fmt::Display for RevelationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RevelationType::Meccan => write!(f, "Meccan"),
            RevelationType::Medinan => write!(f, "Medinan"),
        }
    }
}

/// One chapter of the Quran, as listed by the catalog endpoint.
///
/// Field names follow the wire format, so a fetched catalog serializes back
/// to the same JSON it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Surah {
    pub number: u32,
    pub name: String,
    pub english_name: String,
    pub revelation_type: RevelationType,
}

impl Surah {
    pub const FIRST: u32 = 1;
    pub const LAST: u32 = 114;

    /// True when `number` identifies an actual surah.
    pub fn is_valid_number(number: u32) -> bool {
        (Self::FIRST..=Self::LAST).contains(&number)
    }

    /// Secondary display line, e.g. "Surah Al-Faatiha・Meccan".
    pub fn subtitle(&self) -> String {
        format!("Surah {}・{}", self.english_name, self.revelation_type)
    }
}
