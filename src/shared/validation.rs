// src/shared/validation.rs

use thiserror::Error;

/// Local form validation failures, raised before any request is sent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("{field} must be between {min} and {max}")]
    OutOfRange {
        field: &'static str,
        min: i64,
        max: i64,
    },

    #[error("thumbnail index {index} is out of range for {len} images")]
    InvalidThumbnail { index: usize, len: usize },

    #[error("index {index} is out of range for {len} items")]
    InvalidIndex { index: usize, len: usize },

    #[error("no troubleshooting entry is being edited")]
    NoActiveTroubleshooting,
}

/// Blank (whitespace only) counts as missing.
pub fn require(field: &'static str, value: &str) -> Result<(), FormError> {
    if value.trim().is_empty() {
        return Err(FormError::MissingField(field));
    }
    Ok(())
}

pub fn require_range(field: &'static str, value: i64, min: i64, max: i64) -> Result<(), FormError> {
    if value < min || value > max {
        return Err(FormError::OutOfRange { field, min, max });
    }
    Ok(())
}
