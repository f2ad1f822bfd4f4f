//! Document store collaborator.
//!
//! The handler layer depends on persistence only through the three
//! operations below, over schema-less BSON documents. The production
//! implementation is MongoDB ([`MongoStore`]); tests substitute an
//! in-memory implementation so no live store is needed.

mod mongo;

pub use mongo::MongoStore;

use async_trait::async_trait;
use mongodb::bson::{Bson, Document};

use crate::error::ApiError;

/// Collection holding college listings.
pub const COLLEGES: &str = "colleges";
/// Collection holding admission applications.
pub const ADMISSIONS: &str = "admissions";
/// Collection holding user reviews.
pub const REVIEWS: &str = "reviews";

/// Filter-based lookup and insertion over named collections.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// All documents in `collection` matching `filter`.
    async fn find(&self, collection: &str, filter: Document)
        -> Result<Vec<Document>, ApiError>;

    /// First document in `collection` matching `filter`, if any.
    async fn find_one(
        &self,
        collection: &str,
        filter: Document,
    ) -> Result<Option<Document>, ApiError>;

    /// Insert `document` into `collection`, returning the store-assigned id.
    async fn insert_one(&self, collection: &str, document: Document)
        -> Result<Bson, ApiError>;
}
