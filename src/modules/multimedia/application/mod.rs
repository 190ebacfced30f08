pub mod domain;
pub mod image_url;
pub mod ports;
pub mod preview_registry;

pub use image_url::ImageUrlResolver;
pub use preview_registry::PreviewRegistry;
