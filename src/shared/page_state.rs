// src/shared/page_state.rs

use serde::Serialize;

/// User-visible message shown above a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "message", rename_all = "lowercase")]
pub enum Banner {
    Error(String),
    Success(String),
    Notice(String),
}

impl Banner {
    pub fn message(&self) -> &str {
        match self {
            Banner::Error(m) | Banner::Success(m) | Banner::Notice(m) => m,
        }
    }
}

/// Loading flag and banner owned by every page container.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageStatus {
    loading: bool,
    banner: Option<Banner>,
}

impl PageStatus {
    pub fn loading() -> Self {
        Self {
            loading: true,
            banner: None,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn banner(&self) -> Option<&Banner> {
        self.banner.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        match &self.banner {
            Some(Banner::Error(m)) => Some(m),
            _ => None,
        }
    }

    pub fn begin(&mut self) {
        self.loading = true;
    }

    pub fn finish(&mut self) {
        self.loading = false;
    }

    pub fn fail(&mut self, message: impl Into<String>) {
        self.banner = Some(Banner::Error(message.into()));
    }

    pub fn succeed(&mut self, message: impl Into<String>) {
        self.banner = Some(Banner::Success(message.into()));
    }

    pub fn dismiss(&mut self) {
        self.banner = None;
    }
}
