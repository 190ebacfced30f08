// src/shared/api/http_client.rs

use reqwest::{multipart::Form, Method, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, error};

use super::error::ApiClientError;

/// Single point of HTTP access to the portfolio backend.
///
/// Every request and response is logged at `debug`; failures are logged at
/// `error` with the method, url and body before being returned.
#[derive(Debug, Clone)]
pub struct ApiHttpClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiHttpClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn get_json<T>(&self, path: &str) -> Result<T, ApiClientError>
    where
        T: DeserializeOwned,
    {
        self.request_json(Method::GET, path).await
    }

    /// Bodiless request whose response is decoded, e.g. a nested DELETE that
    /// answers with the parent aggregate.
    pub async fn request_json<T>(&self, method: Method, path: &str) -> Result<T, ApiClientError>
    where
        T: DeserializeOwned,
    {
        let response = self.dispatch(method, path, |r| r).await?;
        Self::decode(response).await
    }

    /// GET that treats 404, an empty body and a literal `null` as "nothing there".
    pub async fn get_optional_json<T>(&self, path: &str) -> Result<Option<T>, ApiClientError>
    where
        T: DeserializeOwned,
    {
        let response = match self.dispatch(Method::GET, path, |r| r).await {
            Ok(response) => response,
            Err(err) if err.is_not_found() => return Ok(None),
            Err(err) => return Err(err),
        };

        let text = response.text().await?;
        let trimmed = text.trim();
        if trimmed.is_empty() || trimmed == "null" {
            return Ok(None);
        }

        serde_json::from_str(trimmed)
            .map(Some)
            .map_err(|e| ApiClientError::Decode(e.to_string()))
    }

    pub async fn send_json<B, T>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<T, ApiClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        if let Ok(payload) = serde_json::to_string(body) {
            debug!("API payload: {} {} {}", method, path, payload);
        }
        let response = self.dispatch(method, path, |r| r.json(body)).await?;
        Self::decode(response).await
    }

    pub async fn send_multipart<T>(
        &self,
        method: Method,
        path: &str,
        form: Form,
    ) -> Result<T, ApiClientError>
    where
        T: DeserializeOwned,
    {
        let response = self.dispatch(method, path, |r| r.multipart(form)).await?;
        Self::decode(response).await
    }

    /// For endpoints answering `204 No Content`; any body is ignored.
    pub async fn send_empty(&self, method: Method, path: &str) -> Result<(), ApiClientError> {
        self.dispatch(method, path, |r| r).await?;
        Ok(())
    }

    async fn dispatch<F>(
        &self,
        method: Method,
        path: &str,
        build: F,
    ) -> Result<Response, ApiClientError>
    where
        F: FnOnce(RequestBuilder) -> RequestBuilder,
    {
        let url = self.url(path);
        debug!("API request: {} {}", method, url);

        let request = build(self.client.request(method.clone(), &url));
        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                error!("API request error: {} {}: {}", method, url, e);
                return Err(ApiClientError::from(e));
            }
        };

        let status = response.status();
        debug!("API response: {} {} {}", status.as_u16(), method, url);

        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        error!("API error: {} {} {}: {}", status.as_u16(), method, url, body);

        Err(ApiClientError::Status {
            status: status.as_u16(),
            body,
        })
    }

    async fn decode<T>(response: Response) -> Result<T, ApiClientError>
    where
        T: DeserializeOwned,
    {
        let text = response.text().await?;
        serde_json::from_str(&text).map_err(|e| {
            error!("Failed to decode API response: {} ({})", e, text);
            ApiClientError::Decode(e.to_string())
        })
    }
}
