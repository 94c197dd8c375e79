//! Flat-namespace object storage for the media-db catalog.
//!
//! The catalog's "database" is entirely encoded in object keys: every
//! record is one object in a flat keyspace, and the only query primitive
//! is a prefix listing. This crate defines that collaborator contract and
//! two backends.
//!
//! # Storage Backends
//!
//! All backends implement the [`ObjectStore`] trait:
//!
//! - [`InMemoryObjectStore`] -- `BTreeMap`-based store for tests and embedding
//! - [`FsObjectStore`] -- one file per object under a root directory
//!
//! # Design Rules
//!
//! 1. `put` is create-or-overwrite; the store enforces no uniqueness.
//! 2. `delete` of an absent key is success (idempotent).
//! 3. `get` and `exists` distinguish not-found from transport errors.
//! 4. Listing is a single call; its order is backend-defined and consumers
//!    must not rely on it.
//! 5. All I/O errors are propagated, never silently ignored.

pub mod error;
pub mod fs;
pub mod memory;
pub mod traits;

// Re-export primary types at crate root for ergonomic imports.
pub use error::{StoreError, StoreResult};
pub use fs::FsObjectStore;
pub use memory::InMemoryObjectStore;
pub use traits::ObjectStore;
