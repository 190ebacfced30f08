use async_trait::async_trait;

use crate::modules::multimedia::application::domain::entities::{LocalFile, UploadedImage};
use crate::shared::api::ApiClientError;

/// Standalone image upload; the returned reference is usable anywhere an
/// image reference is stored.
#[async_trait]
pub trait ImageGateway: Send + Sync {
    async fn upload_image(&self, file: LocalFile) -> Result<UploadedImage, ApiClientError>;
}
