use serde::{Deserialize, Serialize};

use crate::date::parse_consumed_date;
use crate::error::TypeError;
use crate::id::MediaId;
use crate::validate::{non_empty, positive_year};

/// A single piece of music in the catalog. `date_listened` is a Unix timestamp.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Music {
    pub id: MediaId,
    pub title: String,
    pub artist: String,
    pub year: i32,
    #[serde(rename = "date")]
    pub date_listened: i64,
}

impl Music {
    /// Validate raw field values and construct a music record with a fresh
    /// identity.
    ///
    /// Validation order is fixed and short-circuits: title, artist, year,
    /// date. On failure no partial record is returned.
    pub fn new(
        title: &str,
        artist: &str,
        year: i32,
        date_listened: &str,
    ) -> Result<Self, TypeError> {
        let title = non_empty("title", title)?;
        let artist = non_empty("artist", artist)?;
        let year = positive_year(year)?;
        let date_listened = parse_consumed_date(date_listened)?;

        Ok(Self {
            id: MediaId::generate(),
            title,
            artist,
            year,
            date_listened,
        })
    }

    /// Replace the identity. Used when a record addresses an existing key.
    pub fn with_id(mut self, id: MediaId) -> Self {
        self.id = id;
        self
    }
}
