pub mod defaults;
pub mod domain;
pub mod home_page;
pub mod ports;

pub use home_page::{HomePage, HomeView, ProfileMutation};
