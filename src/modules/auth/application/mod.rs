pub mod auth_context;
pub mod domain;
pub mod ports;

pub use auth_context::AuthContext;
