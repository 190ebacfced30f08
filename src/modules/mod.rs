pub mod auth;
pub mod multimedia;
pub mod profile;
pub mod project;
