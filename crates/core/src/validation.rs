//! Field and identifier validation for incoming requests.
//!
//! Text fields are considered present only when they contain at least one
//! non-whitespace character, mirroring the trimmed-required semantics of the
//! stored records.

use serde::Deserialize;

use crate::error::CoreError;
use crate::types::DbId;

/// Returns `true` when the value is absent or whitespace only.
pub fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(|v| v.trim().is_empty())
}

/// Ensure every value is present and non-blank.
///
/// Returns [`CoreError::Validation`] carrying `message` if any value fails.
pub fn require_fields(values: &[Option<&str>], message: &str) -> Result<(), CoreError> {
    if values.iter().any(|v| is_blank(*v)) {
        return Err(CoreError::Validation(message.to_string()));
    }
    Ok(())
}

/// Ensure an optional update field is not explicitly set to a blank value.
///
/// `None` means "leave unchanged" and is always accepted.
pub fn reject_blank(field: &str, value: Option<&str>) -> Result<(), CoreError> {
    match value {
        Some(v) if v.trim().is_empty() => Err(CoreError::Validation(format!(
            "{field} must not be empty"
        ))),
        _ => Ok(()),
    }
}

/// Trim an optional text field, preserving `None`.
pub fn trimmed(value: Option<&str>) -> Option<String> {
    value.map(|v| v.trim().to_string())
}

/// Parse a raw path segment into a record identifier.
///
/// Identifiers are positive base-10 integers. Anything else (empty, signed,
/// non-numeric, zero, overflowing) is rejected with
/// `"Invalid <label> id"`.
pub fn parse_id(label: &str, raw: &str) -> Result<DbId, CoreError> {
    let invalid = || CoreError::Validation(format!("Invalid {label} id"));

    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }

    match raw.parse::<DbId>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(invalid()),
    }
}

/// An identifier sent in a JSON body, either as a number or a string.
///
/// Anything else (null, booleans, fractions, objects) deserializes as
/// [`RawId::Unsupported`] so the caller decides how to report it.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawId {
    Number(i64),
    Text(String),
    Unsupported(serde::de::IgnoredAny),
}

impl RawId {
    /// Resolve to a record identifier with the same rules as [`parse_id`].
    pub fn parse(&self, label: &str) -> Result<DbId, CoreError> {
        match self {
            RawId::Number(n) if *n > 0 => Ok(*n),
            RawId::Text(s) => parse_id(label, s.trim()),
            _ => Err(CoreError::Validation(format!("Invalid {label} id"))),
        }
    }
}
