#![allow(dead_code)]

use async_trait::async_trait;
use items_service::config::ItemsConfig;
use items_service::models::Item;
use items_service::services::{InMemoryItemStore, ItemStore, MongoItemStore};
use items_service::startup::Application;
use service_core::error::AppError;
use std::sync::Arc;
use uuid::Uuid;

pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub client: reqwest::Client,
    pub mongo: Option<MongoItemStore>,
    pub db_name: Option<String>,
}

impl TestApp {
    /// Spawn the service on a random port backed by an empty in-memory store.
    pub async fn spawn() -> Self {
        Self::spawn_with_store(Arc::new(InMemoryItemStore::new())).await
    }

    pub async fn spawn_with_store(store: Arc<dyn ItemStore>) -> Self {
        let mut config = ItemsConfig::with_mongo_host("localhost");
        config.server.host = "127.0.0.1".to_string();
        config.server.port = 0; // Random port for testing

        let app = Application::build_with_store(config, store)
            .await
            .expect("Failed to build test application");

        Self::run(app, None, None).await
    }

    /// Spawn against a real MongoDB (`TEST_MONGODB_URI`) using a throwaway
    /// database that `cleanup` drops.
    pub async fn spawn_mongo() -> Self {
        let uri = std::env::var("TEST_MONGODB_URI")
            .unwrap_or_else(|_| "mongodb://localhost:27017".to_string());
        let db_name = format!("items_test_{}", Uuid::new_v4().simple());

        let client = mongodb::Client::with_uri_str(&uri)
            .await
            .expect("Failed to create MongoDB client");
        let store = MongoItemStore::from_client(client, &db_name, "items");
        store.ping().await.expect("MongoDB is not reachable");

        let mut config = ItemsConfig::with_mongo_host("localhost");
        config.server.host = "127.0.0.1".to_string();
        config.server.port = 0;

        let app = Application::build_with_store(config, Arc::new(store.clone()))
            .await
            .expect("Failed to build test application");

        Self::run(app, Some(store), Some(db_name)).await
    }

    async fn run(app: Application, mongo: Option<MongoItemStore>, db_name: Option<String>) -> Self {
        let port = app.port();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for HTTP server to be ready by polling health endpoint
        let client = reqwest::Client::new();
        let health_url = format!("{}/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp {
            address,
            port,
            client,
            mongo,
            db_name,
        }
    }

    pub async fn get_items(&self) -> reqwest::Response {
        self.client
            .get(format!("{}/items", self.address))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn post_item(&self, body: &serde_json::Value) -> reqwest::Response {
        self.client
            .post(format!("{}/items", self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    /// Drop the throwaway database, if any.
    pub async fn cleanup(&self) {
        if let (Some(store), Some(db_name)) = (&self.mongo, &self.db_name) {
            let _ = store.client().database(db_name).drop(None).await;
        }
    }
}

/// A store whose every operation fails like a lost database connection.
pub struct FailingItemStore;

#[async_trait]
impl ItemStore for FailingItemStore {
    async fn list_all(&self) -> Result<Vec<Item>, AppError> {
        Err(AppError::DatabaseError(anyhow::anyhow!("connection refused")))
    }

    async fn insert(&self, _item: Item) -> Result<(), AppError> {
        Err(AppError::DatabaseError(anyhow::anyhow!("connection refused")))
    }
}
