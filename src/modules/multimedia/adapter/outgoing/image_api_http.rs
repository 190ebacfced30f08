use async_trait::async_trait;
use reqwest::{multipart::Form, Method};
use tracing::info;

use crate::modules::multimedia::application::domain::entities::{LocalFile, UploadedImage};
use crate::modules::multimedia::application::ports::outgoing::image_gateway::ImageGateway;
use crate::shared::api::multipart::file_part;
use crate::shared::api::{ApiClientError, ApiHttpClient};

const UPLOAD_PATH: &str = "/api/images/upload";

#[derive(Debug, Clone)]
pub struct ImageApiHttp {
    http: ApiHttpClient,
}

impl ImageApiHttp {
    pub fn new(http: ApiHttpClient) -> Self {
        Self { http }
    }
}

#[async_trait]
impl ImageGateway for ImageApiHttp {
    async fn upload_image(&self, file: LocalFile) -> Result<UploadedImage, ApiClientError> {
        let original_name = file.file_name.clone();
        let form = Form::new().part("file", file_part(file)?);

        let uploaded: UploadedImage = self
            .http
            .send_multipart(Method::POST, UPLOAD_PATH, form)
            .await?;

        info!("Image uploaded: {} -> {}", original_name, uploaded.file_url);
        Ok(uploaded)
    }
}
