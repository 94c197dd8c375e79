//! Shared field validation helpers for record constructors.
//!
//! Validation short-circuits on the first failing field, so the error a
//! caller sees for a given input is deterministic.

use crate::error::TypeError;

/// Require a non-empty string after trimming; returns the trimmed value.
pub(crate) fn non_empty(field: &'static str, value: &str) -> Result<String, TypeError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(TypeError::EmptyField { field });
    }
    Ok(trimmed.to_string())
}

/// Require a positive year. No upper bound is enforced.
pub(crate) fn positive_year(year: i32) -> Result<i32, TypeError> {
    if year < 1 {
        return Err(TypeError::InvalidYear(year));
    }
    Ok(year)
}
