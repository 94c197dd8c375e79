use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// The kind of media record stored.
///
/// This is a closed set: the kind tag is embedded in every storage key and
/// routes deserialization, so adding a variant is a wire-format change.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Movie,
    Music,
}

impl MediaKind {
    /// All registered kinds.
    pub const ALL: [MediaKind; 2] = [MediaKind::Movie, MediaKind::Music];

    /// The kind tag as used in storage keys.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Movie => "movie",
            Self::Music => "music",
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MediaKind {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "movie" => Ok(Self::Movie),
            "music" => Ok(Self::Music),
            other => Err(TypeError::UnknownMediaKind {
                key: other.to_string(),
            }),
        }
    }
}
