use super::error::ApiClientError;

/// Converts an id coming from a route or a form field into the numeric id the
/// backend expects in its paths. Fails before any request is issued.
pub fn parse_numeric_id(raw: &str) -> Result<i64, ApiClientError> {
    let trimmed = raw.trim();

    if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_digit()) {
        return Err(ApiClientError::InvalidId(raw.to_string()));
    }

    match trimmed.parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(ApiClientError::InvalidId(raw.to_string())),
    }
}
