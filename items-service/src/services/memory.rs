use crate::models::Item;
use crate::services::ItemStore;
use async_trait::async_trait;
use service_core::error::AppError;
use tokio::sync::RwLock;

/// Process-local store, used by tests and for running without a database.
///
/// Items come back in insertion order. A client-supplied `_id` is kept in
/// storage but stripped from reads, the same as the MongoDB projection.
#[derive(Default)]
pub struct InMemoryItemStore {
    items: RwLock<Vec<Item>>,
}

impl InMemoryItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.items.read().await.len()
    }
}

#[async_trait]
impl ItemStore for InMemoryItemStore {
    async fn list_all(&self) -> Result<Vec<Item>, AppError> {
        let items = self.items.read().await;
        Ok(items.iter().cloned().map(Item::without_id).collect())
    }

    async fn insert(&self, item: Item) -> Result<(), AppError> {
        self.items.write().await.push(item);
        Ok(())
    }
}
