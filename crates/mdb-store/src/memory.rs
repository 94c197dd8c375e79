//! In-memory object store for testing and ephemeral use.
//!
//! [`InMemoryObjectStore`] keeps all objects in a `BTreeMap` behind a
//! `RwLock`, so prefix listings come back in key order and tests are
//! deterministic. Data is lost when the store is dropped.

use std::collections::BTreeMap;
use std::sync::RwLock;

use crate::error::{StoreError, StoreResult};
use crate::traits::ObjectStore;

/// An in-memory implementation of [`ObjectStore`].
pub struct InMemoryObjectStore {
    objects: RwLock<BTreeMap<String, Vec<u8>>>,
}

impl InMemoryObjectStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            objects: RwLock::new(BTreeMap::new()),
        }
    }

    /// Number of objects currently stored.
    pub fn len(&self) -> usize {
        self.objects
            .read()
            .map(|map| map.len())
            .unwrap_or_default()
    }

    /// Returns `true` if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for InMemoryObjectStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ObjectStore for InMemoryObjectStore {
    fn put(&self, key: &str, data: &[u8]) -> StoreResult<()> {
        let mut map = self
            .objects
            .write()
            .map_err(|e| StoreError::Backend(format!("lock poisoned: {e}")))?;
        map.insert(key.to_string(), data.to_vec());
        Ok(())
    }

    fn get(&self, key: &str) -> StoreResult<Option<Vec<u8>>> {
        let map = self
            .objects
            .read()
            .map_err(|e| StoreError::Backend(format!("lock poisoned: {e}")))?;
        Ok(map.get(key).cloned())
    }

    fn delete(&self, key: &str) -> StoreResult<()> {
        let mut map = self
            .objects
            .write()
            .map_err(|e| StoreError::Backend(format!("lock poisoned: {e}")))?;
        map.remove(key);
        Ok(())
    }

    fn exists(&self, key: &str) -> StoreResult<bool> {
        let map = self
            .objects
            .read()
            .map_err(|e| StoreError::Backend(format!("lock poisoned: {e}")))?;
        Ok(map.contains_key(key))
    }

    fn list(&self, prefix: &str) -> StoreResult<Vec<String>> {
        let map = self
            .objects
            .read()
            .map_err(|e| StoreError::Backend(format!("lock poisoned: {e}")))?;
        Ok(map
            .keys()
            .filter(|k| k.starts_with(prefix))
            .cloned()
            .collect())
    }
}

impl std::fmt::Debug for InMemoryObjectStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryObjectStore")
            .field("object_count", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn put_and_get() {
        let store = InMemoryObjectStore::new();
        store.put("media/movie/a", b"payload").unwrap();
        assert_eq!(
            store.get("media/movie/a").unwrap(),
            Some(b"payload".to_vec())
        );
    }

    #[test]
    fn get_missing_returns_none() {
        let store = InMemoryObjectStore::new();
        assert!(store.get("media/movie/missing").unwrap().is_none());
    }

    #[test]
    fn put_overwrites() {
        let store = InMemoryObjectStore::new();
        store.put("k", b"one").unwrap();
        store.put("k", b"two").unwrap();
        assert_eq!(store.get("k").unwrap(), Some(b"two".to_vec()));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn delete_is_idempotent() {
        let store = InMemoryObjectStore::new();
        store.put("k", b"v").unwrap();
        store.delete("k").unwrap();
        assert!(!store.exists("k").unwrap());
        // Deleting again is still success.
        store.delete("k").unwrap();
    }

    #[test]
    fn exists_reflects_state() {
        let store = InMemoryObjectStore::new();
        assert!(!store.exists("k").unwrap());
        store.put("k", b"v").unwrap();
        assert!(store.exists("k").unwrap());
    }

    #[test]
    fn list_filters_by_prefix() {
        let store = InMemoryObjectStore::new();
        store.put("media/movie/a", b"1").unwrap();
        store.put("media/music/b", b"2").unwrap();
        store.put("other/c", b"3").unwrap();

        assert_eq!(
            store.list("media/movie").unwrap(),
            vec!["media/movie/a".to_string()]
        );
        assert_eq!(store.list("media").unwrap().len(), 2);
        assert_eq!(store.list("").unwrap().len(), 3);
        assert!(store.list("media/podcast").unwrap().is_empty());
    }

    #[test]
    fn list_is_key_ordered() {
        let store = InMemoryObjectStore::new();
        store.put("media/b", b"").unwrap();
        store.put("media/a", b"").unwrap();
        store.put("media/c", b"").unwrap();
        assert_eq!(
            store.list("media").unwrap(),
            vec![
                "media/a".to_string(),
                "media/b".to_string(),
                "media/c".to_string()
            ]
        );
    }

    #[test]
    fn concurrent_reads_are_safe() {
        use std::sync::Arc;
        use std::thread;

        let store = Arc::new(InMemoryObjectStore::new());
        store.put("shared", b"data").unwrap();

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    assert_eq!(store.get("shared").unwrap(), Some(b"data".to_vec()));
                })
            })
            .collect();

        for h in handles {
            h.join().expect("thread should not panic");
        }
    }
}
