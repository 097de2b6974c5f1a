pub mod item;

pub use item::{Item, ID_FIELD};
