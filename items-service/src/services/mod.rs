pub mod database;
pub mod memory;
pub mod store;

pub use database::MongoItemStore;
pub use memory::InMemoryItemStore;
pub use store::ItemStore;
