use thiserror::Error;

/// Errors produced by record construction and the key codec.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TypeError {
    /// A textual field was empty after trimming.
    #[error("{field} must not be empty")]
    EmptyField { field: &'static str },

    /// The year was outside the accepted range.
    #[error("year must be a positive integer, got {0}")]
    InvalidYear(i32),

    /// The date string did not match the fixed calendar-date grammar.
    #[error("invalid date {input:?}: {reason}")]
    InvalidDate { input: String, reason: String },

    /// An identity token contained a character reserved by the key layout.
    #[error("id {0:?} must not contain '/'")]
    InvalidId(String),

    /// A storage key did not map to a registered media kind.
    #[error("key {key:?} does not correspond to a known media kind")]
    UnknownMediaKind { key: String },

    /// Serialization or deserialization failure.
    #[error("serialization error: {0}")]
    Serialization(String),
}
