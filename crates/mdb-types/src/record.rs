use crate::error::TypeError;
use crate::id::MediaId;
use crate::key;
use crate::kind::MediaKind;
use crate::movie::Movie;
use crate::music::Music;

/// A catalog record of any kind.
///
/// The variant set is closed: deserialization picks the concrete shape with
/// a single exhaustive match on the kind recovered from the storage key,
/// before the payload is read.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MediaRecord {
    Movie(Movie),
    Music(Music),
}

impl MediaRecord {
    /// The kind tag of this record.
    pub fn kind(&self) -> MediaKind {
        match self {
            Self::Movie(_) => MediaKind::Movie,
            Self::Music(_) => MediaKind::Music,
        }
    }

    /// The record's identity.
    pub fn id(&self) -> &MediaId {
        match self {
            Self::Movie(m) => &m.id,
            Self::Music(m) => &m.id,
        }
    }

    /// The record's title.
    pub fn title(&self) -> &str {
        match self {
            Self::Movie(m) => &m.title,
            Self::Music(m) => &m.title,
        }
    }

    /// The storage key this record lives at: `media/<kind>/<id>`.
    pub fn storage_key(&self) -> String {
        key::storage_key(self.kind(), self.id())
    }

    /// Replace the identity, keeping every other field.
    pub fn with_id(self, id: MediaId) -> Self {
        match self {
            Self::Movie(m) => Self::Movie(m.with_id(id)),
            Self::Music(m) => Self::Music(m.with_id(id)),
        }
    }

    /// Serialize to the stored byte encoding (flat field-tagged JSON).
    ///
    /// The kind is not part of the payload; it is carried by the key.
    pub fn to_bytes(&self) -> Result<Vec<u8>, TypeError> {
        let result = match self {
            Self::Movie(m) => serde_json::to_vec(m),
            Self::Music(m) => serde_json::to_vec(m),
        };
        result.map_err(|e| TypeError::Serialization(e.to_string()))
    }

    /// Deserialize the stored byte encoding into the variant named by `kind`.
    pub fn from_bytes(kind: MediaKind, bytes: &[u8]) -> Result<Self, TypeError> {
        match kind {
            MediaKind::Movie => serde_json::from_slice(bytes)
                .map(Self::Movie)
                .map_err(|e| TypeError::Serialization(e.to_string())),
            MediaKind::Music => serde_json::from_slice(bytes)
                .map(Self::Music)
                .map_err(|e| TypeError::Serialization(e.to_string())),
        }
    }
}

impl From<Movie> for MediaRecord {
    fn from(movie: Movie) -> Self {
        Self::Movie(movie)
    }
}

impl From<Music> for MediaRecord {
    fn from(music: Music) -> Self {
        Self::Music(music)
    }
}
