use mdb_store::ObjectStore;
use mdb_types::{kind_from_key, storage_key, MediaId, MediaKind, MediaRecord};
use tracing::{debug, warn};

use crate::error::CatalogError;
use crate::filter::ReadFilter;

/// The CRUD service over one object-store namespace.
///
/// Holds the store handle and nothing else; construct one instance and
/// pass it into command handlers. All operations are single-shot
/// synchronous calls against the store.
#[derive(Debug)]
pub struct MediaCatalog<S> {
    store: S,
}

impl<S: ObjectStore> MediaCatalog<S> {
    /// Create a catalog over the given object store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The underlying object store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Write a new record to the catalog.
    ///
    /// Create performs no existence check: a put at an occupied key
    /// silently overwrites. Uniqueness is guaranteed upstream by identity
    /// generation, not enforced here.
    pub fn create(&self, record: &MediaRecord) -> Result<(), CatalogError> {
        let key = record.storage_key();
        let bytes = record.to_bytes().map_err(|e| CatalogError::Encode {
            key: key.clone(),
            reason: e.to_string(),
        })?;

        self.store
            .put(&key, &bytes)
            .map_err(|source| CatalogError::StorageWrite {
                key: key.clone(),
                source,
            })?;

        debug!(%key, "record created");
        Ok(())
    }

    /// Retrieve the records matching `filter`.
    ///
    /// Records come back in whatever order the store listed their keys;
    /// the store's order is not guaranteed and no re-sorting is applied.
    ///
    /// Keys whose kind cannot be recovered (foreign or corrupt keys under
    /// the namespace) are skipped with a warning instead of failing the
    /// whole listing, as are keys that vanish between the list and the
    /// get. All other failures abort the call.
    pub fn read(&self, filter: &ReadFilter) -> Result<Vec<MediaRecord>, CatalogError> {
        let prefix = filter.prefix();
        let keys = self
            .store
            .list(&prefix)
            .map_err(|source| CatalogError::StorageList {
                prefix: prefix.clone(),
                source,
            })?;

        let mut records = Vec::with_capacity(keys.len());
        for key in keys {
            let kind = match kind_from_key(&key) {
                Ok(kind) => kind,
                Err(e) => {
                    warn!(%key, error = %e, "skipping object with unrecognized key");
                    continue;
                }
            };

            let bytes = self
                .store
                .get(&key)
                .map_err(|source| CatalogError::StorageRead {
                    key: key.clone(),
                    source,
                })?;
            let Some(bytes) = bytes else {
                warn!(%key, "object vanished between list and get; skipping");
                continue;
            };

            let record =
                MediaRecord::from_bytes(kind, &bytes).map_err(|e| CatalogError::Decode {
                    key: key.clone(),
                    reason: e.to_string(),
                })?;
            records.push(record);
        }

        debug!(%prefix, count = records.len(), "read complete");
        Ok(records)
    }

    /// Replace the record stored at the identity `id`.
    ///
    /// The target must already exist: an absent key fails with
    /// [`CatalogError::NotFound`] and nothing is written; Update never
    /// creates a record. The replacement payload is stored whole (full
    /// replace, not a merge), under the addressed identity regardless of
    /// the identity `record` itself carries. Callers must carry forward
    /// any fields they do not intend to change.
    pub fn update(&self, id: &MediaId, record: &MediaRecord) -> Result<(), CatalogError> {
        let key = storage_key(record.kind(), id);

        let present = self
            .store
            .exists(&key)
            .map_err(|source| CatalogError::StorageRead {
                key: key.clone(),
                source,
            })?;
        if !present {
            return Err(CatalogError::NotFound { key });
        }

        let replacement = record.clone().with_id(id.clone());
        let bytes = replacement.to_bytes().map_err(|e| CatalogError::Encode {
            key: key.clone(),
            reason: e.to_string(),
        })?;

        self.store
            .put(&key, &bytes)
            .map_err(|source| CatalogError::StorageWrite {
                key: key.clone(),
                source,
            })?;

        debug!(%key, "record replaced");
        Ok(())
    }

    /// Remove the record at `(kind, id)`.
    ///
    /// Deleting an absent key is success; the catalog does not distinguish
    /// "deleted" from "was already absent".
    pub fn delete(&self, id: &MediaId, kind: MediaKind) -> Result<(), CatalogError> {
        let key = storage_key(kind, id);
        self.store
            .delete(&key)
            .map_err(|source| CatalogError::StorageWrite {
                key: key.clone(),
                source,
            })?;

        debug!(%key, "record deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use mdb_store::InMemoryObjectStore;
    use mdb_types::{Movie, Music};

    use super::*;

    fn catalog() -> MediaCatalog<InMemoryObjectStore> {
        MediaCatalog::new(InMemoryObjectStore::new())
    }

    fn movie() -> MediaRecord {
        Movie::new("Solaris", "Andrei Tarkovsky", 1972, "2020-05-05")
            .unwrap()
            .into()
    }

    fn music() -> MediaRecord {
        Music::new("A Love Supreme", "John Coltrane", 1965, "2020-05-06")
            .unwrap()
            .into()
    }

    #[test]
    fn create_then_read_exact_returns_the_record() {
        let catalog = catalog();
        let record = movie();
        catalog.create(&record).unwrap();

        let found = catalog
            .read(&ReadFilter::Exact {
                kind: MediaKind::Movie,
                id: record.id().clone(),
            })
            .unwrap();
        assert_eq!(found, vec![record]);
    }

    #[test]
    fn read_filters_isolate_kinds() {
        let catalog = catalog();
        catalog.create(&movie()).unwrap();
        catalog.create(&music()).unwrap();

        assert_eq!(catalog.read(&ReadFilter::Kind(MediaKind::Movie)).unwrap().len(), 1);
        assert_eq!(catalog.read(&ReadFilter::Kind(MediaKind::Music)).unwrap().len(), 1);
        assert_eq!(catalog.read(&ReadFilter::All).unwrap().len(), 2);
    }

    #[test]
    fn read_of_empty_catalog_is_empty() {
        assert!(catalog().read(&ReadFilter::All).unwrap().is_empty());
    }

    #[test]
    fn read_skips_foreign_keys_under_namespace() {
        let catalog = catalog();
        catalog.create(&movie()).unwrap();
        // A key the codec cannot map to a kind must not fail the listing.
        catalog.store().put("media/podcast/x", b"{}").unwrap();
        catalog.store().put("media/stray", b"{}").unwrap();

        let records = catalog.read(&ReadFilter::All).unwrap();
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn read_surfaces_corrupt_payloads() {
        let catalog = catalog();
        catalog
            .store()
            .put("media/movie/bad", b"not json")
            .unwrap();

        let err = catalog.read(&ReadFilter::All).unwrap_err();
        assert!(matches!(err, CatalogError::Decode { .. }));
    }

    #[test]
    fn create_on_present_key_overwrites_without_error() {
        let catalog = catalog();
        let record = movie();
        catalog.create(&record).unwrap();
        // Second create at the same key replaces the payload silently.
        let replacement = MediaRecord::from(
            Movie::new("Mirror", "Andrei Tarkovsky", 1975, "").unwrap(),
        )
        .with_id(record.id().clone());
        catalog.create(&replacement).unwrap();

        let found = catalog
            .read(&ReadFilter::Exact {
                kind: MediaKind::Movie,
                id: record.id().clone(),
            })
            .unwrap();
        assert_eq!(found, vec![replacement]);
    }

    #[test]
    fn update_replaces_payload_under_addressed_id() {
        let catalog = catalog();
        let original = movie();
        catalog.create(&original).unwrap();

        // The replacement record carries its own fresh id; the stored
        // identity must remain the addressed one.
        let replacement: MediaRecord =
            Movie::new("Solaris", "Andrei Tarkovsky", 1972, "2021-01-01")
                .unwrap()
                .into();
        catalog.update(original.id(), &replacement).unwrap();

        let found = catalog
            .read(&ReadFilter::Exact {
                kind: MediaKind::Movie,
                id: original.id().clone(),
            })
            .unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id(), original.id());
        match &found[0] {
            MediaRecord::Movie(m) => assert_eq!(m.date_watched, 1_609_459_200),
            other => panic!("expected movie, got {other:?}"),
        }
    }

    #[test]
    fn update_on_absent_key_fails_and_writes_nothing() {
        let catalog = catalog();
        let record = movie();

        let err = catalog.update(record.id(), &record).unwrap_err();
        assert!(matches!(err, CatalogError::NotFound { .. }));
        // The failed update must not have created a record.
        assert!(catalog.read(&ReadFilter::All).unwrap().is_empty());
    }

    #[test]
    fn delete_twice_succeeds_both_times() {
        let catalog = catalog();
        let record = music();
        catalog.create(&record).unwrap();

        catalog.delete(record.id(), MediaKind::Music).unwrap();
        catalog.delete(record.id(), MediaKind::Music).unwrap();
        assert!(catalog.read(&ReadFilter::All).unwrap().is_empty());
    }

    #[test]
    fn delete_only_removes_the_addressed_record() {
        let catalog = catalog();
        let keep = movie();
        let gone = movie();
        catalog.create(&keep).unwrap();
        catalog.create(&gone).unwrap();

        catalog.delete(gone.id(), MediaKind::Movie).unwrap();

        let found = catalog.read(&ReadFilter::Kind(MediaKind::Movie)).unwrap();
        assert_eq!(found, vec![keep]);
    }

    #[test]
    fn full_lifecycle_absent_present_absent() {
        let catalog = catalog();
        let record = movie();
        let exact = ReadFilter::Exact {
            kind: MediaKind::Movie,
            id: record.id().clone(),
        };

        assert!(catalog.read(&exact).unwrap().is_empty());
        catalog.create(&record).unwrap();
        assert_eq!(catalog.read(&exact).unwrap().len(), 1);
        catalog.update(record.id(), &record).unwrap();
        assert_eq!(catalog.read(&exact).unwrap().len(), 1);
        catalog.delete(record.id(), MediaKind::Movie).unwrap();
        assert!(catalog.read(&exact).unwrap().is_empty());
    }
}
