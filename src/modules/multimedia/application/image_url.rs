// src/modules/multimedia/application/image_url.rs

use super::preview_registry::PREVIEW_SCHEME;

pub const STATIC_IMAGE_PREFIX: &str = "/images/";
pub const IMAGE_API_PREFIX: &str = "/api/images/";
pub const DEFAULT_PROJECT_IMAGE: &str = "/images/project-placeholder.jpg";
pub const DEFAULT_PROFILE_IMAGE: &str = "/images/portfolio.jpg";

/// Turns a stored image reference into a URL an `<img>` tag can load.
///
/// A reference may be a bare file name, a backend-relative `/api/images/..`
/// path, a bundled static asset under `/images/`, an absolute URL or a local
/// `blob:` preview. Only the first two need the backend origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUrlResolver {
    origin: String,
}

impl ImageUrlResolver {
    pub fn new(origin: impl Into<String>) -> Self {
        let origin = origin.into().trim_end_matches('/').to_string();
        Self { origin }
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Resolves with the project placeholder as fallback.
    pub fn resolve(&self, reference: Option<&str>) -> String {
        self.resolve_or(reference, DEFAULT_PROJECT_IMAGE)
    }

    pub fn resolve_or(&self, reference: Option<&str>, fallback: &str) -> String {
        let reference = match reference {
            Some(r) if !r.is_empty() => r,
            _ => return fallback.to_string(),
        };

        if reference.starts_with("http://")
            || reference.starts_with("https://")
            || reference.starts_with(PREVIEW_SCHEME)
            || reference.starts_with(STATIC_IMAGE_PREFIX)
        {
            return reference.to_string();
        }

        if reference.starts_with(IMAGE_API_PREFIX) {
            return format!("{}{}", self.origin, reference);
        }

        format!("{}{}{}", self.origin, IMAGE_API_PREFIX, reference)
    }
}
