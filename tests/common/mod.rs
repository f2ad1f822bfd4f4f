//! Common test utilities and fixtures.
//!
//! Provides an in-memory document store and a helper that serves the real
//! router on an ephemeral port, so the HTTP surface can be exercised
//! end-to-end without a live MongoDB.

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::{Bson, Document};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use collegemate::auth::Authenticator;
use collegemate::error::ApiError;
use collegemate::routes::router;
use collegemate::store::DocumentStore;
use collegemate::{AppState, Config};

/// Secret used to sign sessions in tests.
pub const TEST_SECRET: &str = "integration-test-secret";

/// In-memory document store.
///
/// Supports exactly the filter shapes the handlers issue: equality on a
/// field, `_id` equality, the case-insensitive `$regex` substring match,
/// and the empty filter.
#[derive(Default)]
pub struct MemoryStore {
    collections: Mutex<HashMap<String, Vec<Document>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn matches(document: &Document, filter: &Document) -> bool {
    filter.iter().all(|(key, condition)| match condition {
        Bson::Document(operators) if operators.contains_key("$regex") => {
            let needle = operators
                .get_str("$regex")
                .unwrap_or_default()
                .to_lowercase();
            match document.get(key) {
                Some(Bson::String(value)) => value.to_lowercase().contains(&needle),
                _ => false,
            }
        }
        expected => document.get(key) == Some(expected),
    })
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn find(
        &self,
        collection: &str,
        filter: Document,
    ) -> Result<Vec<Document>, ApiError> {
        let collections = self.collections.lock().expect("store lock");
        Ok(collections
            .get(collection)
            .map(|documents| {
                documents
                    .iter()
                    .filter(|document| matches(document, &filter))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn find_one(
        &self,
        collection: &str,
        filter: Document,
    ) -> Result<Option<Document>, ApiError> {
        let collections = self.collections.lock().expect("store lock");
        Ok(collections
            .get(collection)
            .and_then(|documents| {
                documents
                    .iter()
                    .find(|document| matches(document, &filter))
                    .cloned()
            }))
    }

    async fn insert_one(
        &self,
        collection: &str,
        mut document: Document,
    ) -> Result<Bson, ApiError> {
        if !document.contains_key("_id") {
            document.insert("_id", Bson::ObjectId(ObjectId::new()));
        }
        let inserted_id = document.get("_id").cloned().expect("_id just ensured");

        let mut collections = self.collections.lock().expect("store lock");
        collections
            .entry(collection.to_string())
            .or_default()
            .push(document);

        Ok(inserted_id)
    }
}

/// Configuration matching the defaults the service ships with, pointed at
/// nothing (the store is substituted).
pub fn test_config() -> Config {
    Config {
        bind_addr: [127, 0, 0, 1].into(),
        port: 0,
        mongodb_uri: "mongodb://localhost:27017".to_string(),
        database: "collegeMate".to_string(),
        access_token_secret: TEST_SECRET.to_string(),
        cors_origins: vec!["http://localhost:3000".to_string()],
        cookie_secure: false,
    }
}

/// Serve the real router over the given store on an ephemeral port and
/// return the base URL.
pub async fn spawn_app(store: Arc<MemoryStore>) -> String {
    let config = test_config();
    let state = AppState {
        auth: Authenticator::new(TEST_SECRET),
        store,
        cookie_secure: config.cookie_secure,
    };
    let app = router(state, &config);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind ephemeral port");
    let addr = listener.local_addr().expect("Failed to read local addr");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server should run");
    });

    format!("http://{addr}")
}
