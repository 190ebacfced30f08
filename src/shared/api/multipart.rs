// src/shared/api/multipart.rs

use reqwest::multipart::Part;

use super::error::ApiClientError;
use crate::modules::multimedia::application::domain::entities::LocalFile;

/// Builds a file part carrying the original file name and content type.
pub fn file_part(file: LocalFile) -> Result<Part, ApiClientError> {
    let LocalFile {
        file_name,
        content_type,
        bytes,
    } = file;

    Part::bytes(bytes)
        .file_name(file_name.clone())
        .mime_str(&content_type)
        .map_err(|e| ApiClientError::InvalidPart(format!("{file_name}: {e}")))
}

/// Builds a `application/json` text part.
pub fn json_part(json: String) -> Result<Part, ApiClientError> {
    Part::text(json)
        .mime_str("application/json")
        .map_err(|e| ApiClientError::InvalidPart(e.to_string()))
}
