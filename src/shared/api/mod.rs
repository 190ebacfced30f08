pub mod error;
pub mod http_client;
pub mod ids;
pub mod multipart;

pub use error::ApiClientError;
pub use http_client::ApiHttpClient;
pub use ids::parse_numeric_id;
