use crate::models::Item;
use async_trait::async_trait;
use service_core::error::AppError;

/// The two operations the HTTP surface needs from a document store.
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// Every stored item, in the store's natural order, without the
    /// store-assigned identifier. Unbounded.
    async fn list_all(&self) -> Result<Vec<Item>, AppError>;

    /// Persist `item` as-is. The store assigns the identifier.
    async fn insert(&self, item: Item) -> Result<(), AppError>;
}
