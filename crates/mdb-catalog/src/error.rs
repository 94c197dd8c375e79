use mdb_store::StoreError;

/// Errors from catalog operations.
///
/// Every variant carries the offending key or prefix so callers can act on
/// the failure. The catalog never retries; a failed call surfaces
/// immediately.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Update target does not exist; no write was performed.
    #[error("record not found: {key}")]
    NotFound { key: String },

    /// A record could not be serialized for storage.
    #[error("failed to encode record for {key}: {reason}")]
    Encode { key: String, reason: String },

    /// A stored payload could not be deserialized.
    #[error("failed to decode object {key}: {reason}")]
    Decode { key: String, reason: String },

    /// The object store failed a write (put or delete).
    #[error("failed to write {key}")]
    StorageWrite {
        key: String,
        #[source]
        source: StoreError,
    },

    /// The object store failed a read (get or existence check).
    #[error("failed to read {key}")]
    StorageRead {
        key: String,
        #[source]
        source: StoreError,
    },

    /// The object store failed a prefix listing.
    #[error("failed to list prefix {prefix:?}")]
    StorageList {
        prefix: String,
        #[source]
        source: StoreError,
    },
}
