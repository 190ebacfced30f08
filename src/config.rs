// src/config.rs

use std::env;
use std::path::PathBuf;

use thiserror::Error;
use tracing::debug;

pub const DEFAULT_API_URL: &str = "http://localhost:8080";
pub const DEFAULT_SESSION_FILE: &str = ".portfolio_session.json";
/// Client-side gate only; the backend does not check it.
pub const DEFAULT_ADMIN_PASSWORD: &str = "portfolio-admin";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{key} must be an http(s) URL, got {value:?}")]
    InvalidUrl { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_url: String,
    pub admin_password: String,
    pub session_file: PathBuf,
}

impl ClientConfig {
    pub fn new(
        api_url: impl Into<String>,
        admin_password: impl Into<String>,
        session_file: impl Into<PathBuf>,
    ) -> Self {
        Self {
            api_url: api_url.into().trim_end_matches('/').to_string(),
            admin_password: admin_password.into(),
            session_file: session_file.into(),
        }
    }

    /// Reads `.env.{RUST_ENV}` (or `.env`) and then the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let rust_env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
        let env_file = format!(".env.{}", rust_env);
        if dotenvy::from_filename(&env_file).is_err() {
            dotenvy::dotenv().ok();
        }

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup. Blank values count as unset.
    ///
    /// The backend origin is `PORTFOLIO_API_URL`, else the site's own origin
    /// (`PORTFOLIO_SITE_ORIGIN`), else [`DEFAULT_API_URL`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let (key, api_url) = match (read("PORTFOLIO_API_URL"), read("PORTFOLIO_SITE_ORIGIN")) {
            (Some(url), _) => ("PORTFOLIO_API_URL", url),
            (None, Some(origin)) => ("PORTFOLIO_SITE_ORIGIN", origin),
            (None, None) => ("PORTFOLIO_API_URL", DEFAULT_API_URL.to_string()),
        };
        let api_url = api_url.trim().to_string();
        if !(api_url.starts_with("http://") || api_url.starts_with("https://")) {
            return Err(ConfigError::InvalidUrl {
                key,
                value: api_url,
            });
        }
        debug!("Backend origin from {}: {}", key, api_url);

        let admin_password =
            read("PORTFOLIO_ADMIN_PASSWORD").unwrap_or_else(|| DEFAULT_ADMIN_PASSWORD.to_string());
        let session_file =
            read("PORTFOLIO_SESSION_FILE").unwrap_or_else(|| DEFAULT_SESSION_FILE.to_string());

        Ok(Self::new(api_url, admin_password, session_file))
    }
}
