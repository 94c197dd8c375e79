//! Foundation types for the media-db catalog.
//!
//! This crate provides the validated record types and the key codec that
//! maps them onto a flat object-store namespace. Every other mdb crate
//! depends on `mdb-types`.
//!
//! # Key Types
//!
//! - [`MediaId`]: opaque random identity, generated once at construction
//! - [`MediaKind`]: closed set of record variants ("movie", "music")
//! - [`Movie`] / [`Music`]: validated value records
//! - [`MediaRecord`]: closed sum type over all record variants
//!
//! The key codec in [`key`] derives `media/<kind>/<id>` storage keys and
//! recovers the kind from an existing key. The kind is encoded in the key
//! rather than the payload so the concrete variant is known before the
//! body is ever read.

pub mod date;
pub mod error;
pub mod id;
pub mod key;
pub mod kind;
pub mod movie;
pub mod music;
pub mod record;

mod validate;

pub use date::{format_unix_date, parse_consumed_date};
pub use error::TypeError;
pub use id::MediaId;
pub use key::{base_prefix, kind_from_key, storage_key, NAMESPACE};
pub use kind::MediaKind;
pub use movie::Movie;
pub use music::Music;
pub use record::MediaRecord;
