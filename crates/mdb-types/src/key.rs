//! Bidirectional mapping between typed identities and storage keys.
//!
//! Every record lives at `media/<kind>/<id>`. Encoding the kind into the
//! key lets the catalog pick the concrete variant for deserialization
//! before reading the body, and lets listing be filtered by kind or by a
//! single record with nothing but a key prefix.
//!
//! The layout is stable wire format: existing stored keys depend on it.

use crate::error::TypeError;
use crate::id::MediaId;
use crate::kind::MediaKind;

/// Root namespace shared by all catalog keys.
pub const NAMESPACE: &str = "media";

/// Derive the storage key for a record of the given kind and identity.
pub fn storage_key(kind: MediaKind, id: &MediaId) -> String {
    format!("{NAMESPACE}/{kind}/{id}")
}

/// Recover the media kind from an existing storage key.
///
/// The key must have the exact shape `media/<kind>/<id>` with a non-empty
/// id and a registered kind tag in the middle segment.
pub fn kind_from_key(key: &str) -> Result<MediaKind, TypeError> {
    let mut segments = key.split('/');
    match (
        segments.next(),
        segments.next(),
        segments.next(),
        segments.next(),
    ) {
        (Some(NAMESPACE), Some(tag), Some(id), None) if !id.is_empty() => {
            tag.parse().map_err(|_| TypeError::UnknownMediaKind {
                key: key.to_string(),
            })
        }
        _ => Err(TypeError::UnknownMediaKind {
            key: key.to_string(),
        }),
    }
}

/// The listing prefix selecting all records, or all records of one kind.
///
/// Pass the result of [`storage_key`] instead to select exactly one record.
pub fn base_prefix(kind: Option<MediaKind>) -> String {
    match kind {
        None => NAMESPACE.to_string(),
        Some(kind) => format!("{NAMESPACE}/{kind}"),
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn derived_key_has_expected_shape() {
        let id = MediaId::parse("abc-123").unwrap();
        assert_eq!(storage_key(MediaKind::Movie, &id), "media/movie/abc-123");
        assert_eq!(storage_key(MediaKind::Music, &id), "media/music/abc-123");
    }

    #[test]
    fn kind_recovered_from_derived_key() {
        for kind in MediaKind::ALL {
            let key = storage_key(kind, &MediaId::generate());
            assert_eq!(kind_from_key(&key).unwrap(), kind);
        }
    }

    #[test]
    fn unknown_kind_segment_is_rejected() {
        let err = kind_from_key("media/podcast/abc").unwrap_err();
        assert!(matches!(err, TypeError::UnknownMediaKind { .. }));
    }

    #[test]
    fn malformed_shapes_are_rejected() {
        for key in [
            "",
            "media",
            "media/movie",
            "media/movie/",
            "media/movie/a/b",
            "other/movie/abc",
            "movie/abc",
        ] {
            assert!(kind_from_key(key).is_err(), "accepted {key:?}");
        }
    }

    #[test]
    fn prefixes_by_scope() {
        assert_eq!(base_prefix(None), "media");
        assert_eq!(base_prefix(Some(MediaKind::Movie)), "media/movie");
        assert_eq!(base_prefix(Some(MediaKind::Music)), "media/music");
    }

    #[test]
    fn kind_prefixes_never_collide() {
        // A music key must not match the movie prefix and vice versa.
        let music_key = storage_key(MediaKind::Music, &MediaId::generate());
        assert!(!music_key.starts_with(&base_prefix(Some(MediaKind::Movie))));
    }

    proptest! {
        #[test]
        fn key_roundtrip_recovers_kind(kind_idx in 0usize..2, id in "[a-zA-Z0-9-]{1,64}") {
            let kind = MediaKind::ALL[kind_idx];
            let id = MediaId::parse(&id).unwrap();
            let key = storage_key(kind, &id);
            prop_assert_eq!(kind_from_key(&key).unwrap(), kind);
            prop_assert!(key.starts_with(&base_prefix(Some(kind))));
            prop_assert!(key.starts_with(&base_prefix(None)));
        }
    }
}
