pub mod api;
pub mod entity_id;
pub mod page_state;
pub mod serde_ext;
pub mod validation;

pub use entity_id::EntityId;
pub use page_state::{Banner, PageStatus};
pub use validation::FormError;
