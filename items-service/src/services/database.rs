use crate::config::MongoConfig;
use crate::models::Item;
use crate::services::ItemStore;
use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::doc,
    options::{ClientOptions, FindOptions},
    Client as MongoClient, Collection,
};
use secrecy::ExposeSecret;
use service_core::error::AppError;

#[derive(Clone)]
pub struct MongoItemStore {
    client: MongoClient,
    items: Collection<Item>,
}

impl MongoItemStore {
    /// Build the single process-wide client and verify the server answers.
    pub async fn connect(config: &MongoConfig) -> Result<Self, AppError> {
        let address = config.redacted_address();
        tracing::info!(address = %address, "Connecting to MongoDB");

        let uri = config.connection_uri()?;
        let mut client_options = ClientOptions::parse(uri.expose_secret())
            .await
            .map_err(|e| {
                tracing::error!("Failed to parse MongoDB connection string: {}", e);
                AppError::from(e)
            })?;
        client_options.app_name = Some("items-service".to_string());

        let client = MongoClient::with_options(client_options).map_err(|e| {
            tracing::error!("Failed to create MongoDB client: {}", e);
            AppError::from(e)
        })?;

        let store = Self::from_client(client, &config.database, &config.collection);
        store.ping().await.map_err(|e| {
            tracing::error!("Failed to reach MongoDB at {}: {}", address, e);
            e
        })?;

        tracing::info!(
            database = %config.database,
            collection = %config.collection,
            "Successfully connected to MongoDB"
        );
        Ok(store)
    }

    pub fn from_client(client: MongoClient, database: &str, collection: &str) -> Self {
        let items = client.database(database).collection(collection);
        Self { client, items }
    }

    pub async fn ping(&self) -> Result<(), AppError> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await?;
        Ok(())
    }

    pub fn client(&self) -> &MongoClient {
        &self.client
    }

    pub fn items(&self) -> &Collection<Item> {
        &self.items
    }
}

#[async_trait]
impl ItemStore for MongoItemStore {
    async fn list_all(&self) -> Result<Vec<Item>, AppError> {
        let options = FindOptions::builder()
            .projection(doc! { "_id": 0 })
            .build();

        let cursor = self.items.find(doc! {}, options).await?;
        let items: Vec<Item> = cursor.try_collect().await?;

        tracing::debug!(count = items.len(), "Listed items");
        Ok(items)
    }

    async fn insert(&self, item: Item) -> Result<(), AppError> {
        let result = self.items.insert_one(&item, None).await?;
        tracing::debug!(id = %result.inserted_id, "Inserted item");
        Ok(())
    }
}
