//! CRUD service for the media-db catalog.
//!
//! [`MediaCatalog`] orchestrates the object-store primitives with the key
//! codec and record encoding from `mdb-types`:
//!
//! - Create: serialize and put; silent overwrite, uniqueness is upstream
//!   in identity generation
//! - Read: prefix list, recover the kind from each key, get, deserialize
//! - Update: existence check first; never creates a record
//! - Delete: idempotent, absence is success
//!
//! Per key the state machine is `absent → (Create) → present → (Update)* →
//! present → (Delete) → absent`. Update on absent is an error with no
//! write; Delete on absent is success; Create on present overwrites.
//!
//! Concurrent writers to the same identity are last-write-wins with no
//! detection: no version or ETag check is performed anywhere. This is a
//! known consistency gap, accepted for a single-user catalog.

pub mod catalog;
pub mod error;
pub mod filter;

pub use catalog::MediaCatalog;
pub use error::CatalogError;
pub use filter::ReadFilter;
