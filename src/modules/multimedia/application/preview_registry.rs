// src/modules/multimedia/application/preview_registry.rs

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::debug;
use uuid::Uuid;

use super::domain::entities::LocalFile;

pub const PREVIEW_SCHEME: &str = "blob:";

/// Process-wide table of local preview URLs for files not yet uploaded.
///
/// Every URL handed out by [`PreviewRegistry::create`] stays live until it is
/// revoked, so owners must revoke on removal, replacement and drop.
#[derive(Debug, Clone, Default)]
pub struct PreviewRegistry {
    previews: Arc<Mutex<HashMap<String, LocalFile>>>,
}

impl PreviewRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create(&self, file: &LocalFile) -> String {
        let url = format!("{PREVIEW_SCHEME}{}", Uuid::new_v4());
        self.previews.lock().insert(url.clone(), file.clone());
        debug!("Preview created: {} ({})", url, file.file_name);
        url
    }

    /// Returns `false` when the URL was unknown or already revoked.
    pub fn revoke(&self, url: &str) -> bool {
        let removed = self.previews.lock().remove(url).is_some();
        if removed {
            debug!("Preview revoked: {}", url);
        }
        removed
    }

    pub fn live_count(&self) -> usize {
        self.previews.lock().len()
    }

    pub fn is_preview(reference: &str) -> bool {
        reference.starts_with(PREVIEW_SCHEME)
    }
}
