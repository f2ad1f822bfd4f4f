//! MongoDB-backed document store.

use anyhow::{Context, Result};
use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::{Bson, Document, doc};
use mongodb::options::{ClientOptions, ServerApi, ServerApiVersion};
use mongodb::{Client, Database};

use super::DocumentStore;
use crate::error::ApiError;

/// Long-lived MongoDB handle, acquired once at startup and shared by all
/// handlers. The driver owns connection pooling and concurrency safety.
#[derive(Clone)]
pub struct MongoStore {
    client: Client,
    db: Database,
}

impl MongoStore {
    /// Connect to the deployment with Stable API v1 (strict, deprecation
    /// errors on).
    pub async fn connect(uri: &str, database: &str) -> Result<Self> {
        let mut options = ClientOptions::parse(uri)
            .await
            .context("Failed to parse MongoDB connection string")?;

        options.server_api = Some(
            ServerApi::builder()
                .version(ServerApiVersion::V1)
                .strict(true)
                .deprecation_errors(true)
                .build(),
        );

        let client =
            Client::with_options(options).context("Failed to create MongoDB client")?;
        let db = client.database(database);

        Ok(Self { client, db })
    }

    /// Ping the deployment to confirm connectivity before serving.
    pub async fn ping(&self) -> Result<()> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 })
            .await
            .context("Failed to ping MongoDB deployment")?;

        tracing::info!("connected to MongoDB deployment");
        Ok(())
    }
}

#[async_trait]
impl DocumentStore for MongoStore {
    async fn find(
        &self,
        collection: &str,
        filter: Document,
    ) -> Result<Vec<Document>, ApiError> {
        let cursor = self
            .db
            .collection::<Document>(collection)
            .find(filter)
            .await?;
        Ok(cursor.try_collect().await?)
    }

    async fn find_one(
        &self,
        collection: &str,
        filter: Document,
    ) -> Result<Option<Document>, ApiError> {
        Ok(self
            .db
            .collection::<Document>(collection)
            .find_one(filter)
            .await?)
    }

    async fn insert_one(
        &self,
        collection: &str,
        document: Document,
    ) -> Result<Bson, ApiError> {
        let result = self
            .db
            .collection::<Document>(collection)
            .insert_one(document)
            .await?;
        Ok(result.inserted_id)
    }
}
