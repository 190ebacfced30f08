// src/shared/api/error.rs

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiClientError {
    /// Connection refused, DNS failure, timeout from the client defaults.
    #[error("Request failed: {0}")]
    Transport(String),

    #[error("Backend responded with {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Failed to decode response: {0}")]
    Decode(String),

    /// Path segment that the backend expects to be numeric.
    #[error("Invalid id: {0:?}")]
    InvalidId(String),

    #[error("Invalid multipart part: {0}")]
    InvalidPart(String),
}

impl ApiClientError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiClientError::Status { status: 404, .. })
    }
}

impl From<reqwest::Error> for ApiClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiClientError::Decode(err.to_string())
        } else {
            ApiClientError::Transport(err.to_string())
        }
    }
}
