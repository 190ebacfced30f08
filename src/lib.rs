pub mod config;
pub mod modules;
pub mod shared;

pub use modules::auth;
pub use modules::multimedia;
pub use modules::profile;
pub use modules::project;

#[cfg(test)]
mod tests;
