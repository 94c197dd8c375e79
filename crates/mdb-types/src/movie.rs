use serde::{Deserialize, Serialize};

use crate::date::parse_consumed_date;
use crate::error::TypeError;
use crate::id::MediaId;
use crate::validate::{non_empty, positive_year};

/// A single movie in the catalog. `date_watched` is a Unix timestamp.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    pub id: MediaId,
    pub title: String,
    pub director: String,
    pub year: i32,
    #[serde(rename = "date")]
    pub date_watched: i64,
}

impl Movie {
    /// Validate raw field values and construct a movie with a fresh identity.
    ///
    /// Validation order is fixed and short-circuits: title, director, year,
    /// date. `date_watched` follows the grammar of
    /// [`parse_consumed_date`](crate::date::parse_consumed_date). On failure
    /// no partial record is returned.
    pub fn new(
        title: &str,
        director: &str,
        year: i32,
        date_watched: &str,
    ) -> Result<Self, TypeError> {
        let title = non_empty("title", title)?;
        let director = non_empty("director", director)?;
        let year = positive_year(year)?;
        let date_watched = parse_consumed_date(date_watched)?;

        Ok(Self {
            id: MediaId::generate(),
            title,
            director,
            year,
            date_watched,
        })
    }

    /// Replace the identity. Used when a record addresses an existing key.
    pub fn with_id(mut self, id: MediaId) -> Self {
        self.id = id;
        self
    }
}
