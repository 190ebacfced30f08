mod image_api_http;

pub use image_api_http::ImageApiHttp;
