use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::TypeError;

/// Opaque identity for one record within its kind.
///
/// A `MediaId` is assigned exactly once, at record construction, and is
/// never regenerated or mutated by an update. Generation uses a random
/// UUID v4, so same-kind key collisions are treated as impossible.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MediaId(String);

impl MediaId {
    /// Generate a fresh random identity.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Parse an identity supplied by a caller (e.g. from the CLI).
    ///
    /// Any non-empty trimmed token without a `/` is accepted as a lookup
    /// identity; only [`MediaId::generate`] guarantees UUID shape. The
    /// `/` rejection keeps every derived key exactly three segments.
    pub fn parse(s: &str) -> Result<Self, TypeError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(TypeError::EmptyField { field: "id" });
        }
        if s.contains('/') {
            return Err(TypeError::InvalidId(s.to_string()));
        }
        Ok(Self(s.to_string()))
    }

    /// The identity as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MediaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
