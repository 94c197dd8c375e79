use crate::error::StoreResult;

/// Flat-namespace object store.
///
/// All implementations must satisfy these invariants:
/// - `put` always succeeds-or-overwrites; it never fails because a key
///   already exists.
/// - `delete` of an absent key is success, indistinguishable from deleting
///   a present one.
/// - `get` and `exists` report absence as a value, not an error; errors
///   mean transport or permission failures.
/// - Every operation is a single synchronous request/response call with no
///   retry or backoff inside the store.
/// - Concurrent writers to the same key are last-write-wins; the store
///   performs no conflict detection.
pub trait ObjectStore: Send + Sync {
    /// Write `data` under `key`, creating or overwriting the object.
    fn put(&self, key: &str, data: &[u8]) -> StoreResult<()>;

    /// Read the object at `key`.
    ///
    /// Returns `Ok(None)` if the object does not exist.
    fn get(&self, key: &str) -> StoreResult<Option<Vec<u8>>>;

    /// Delete the object at `key`. Absent keys are not an error.
    fn delete(&self, key: &str) -> StoreResult<()>;

    /// Check whether an object exists without reading its body.
    fn exists(&self, key: &str) -> StoreResult<bool>;

    /// List every key starting with `prefix`, in one call.
    ///
    /// Pass `""` to list all keys. The returned order is backend-defined.
    fn list(&self, prefix: &str) -> StoreResult<Vec<String>>;
}
