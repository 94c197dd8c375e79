use mdb_types::{base_prefix, storage_key, MediaId, MediaKind};

/// Selects which stored records a read returns.
///
/// Each filter maps to a single listing prefix: no filter matches every
/// record, a kind matches all records of that kind, and a kind plus
/// identity matches exactly one record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ReadFilter {
    /// Every record in the catalog.
    All,
    /// Every record of one kind.
    Kind(MediaKind),
    /// Exactly one record.
    Exact { kind: MediaKind, id: MediaId },
}

impl ReadFilter {
    /// The listing prefix this filter selects.
    pub fn prefix(&self) -> String {
        match self {
            Self::All => base_prefix(None),
            Self::Kind(kind) => base_prefix(Some(*kind)),
            Self::Exact { kind, id } => storage_key(*kind, id),
        }
    }
}
