pub mod app;
pub mod items;

pub use app::{health_check, index};
pub use items::{create_item, list_items};
