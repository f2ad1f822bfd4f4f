//! College listing endpoints.

use axum::Json;
use axum::extract::{Path, Query, State};
use mongodb::bson::oid::ObjectId;
use mongodb::bson::{Document, doc};
use serde::Deserialize;

use crate::error::ApiError;
use crate::state::AppState;
use crate::store::COLLEGES;

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    /// Case-insensitive substring to match against the college name.
    /// Empty (or absent) matches everything.
    #[serde(default)]
    pub search: String,
}

/// List colleges whose name contains the search substring.
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Vec<Document>>, ApiError> {
    let filter = doc! {
        "collegeName": {
            "$regex": query.search,
            "$options": "i",
        }
    };

    let colleges = state.store.find(COLLEGES, filter).await?;
    Ok(Json(colleges))
}

/// Look up a single college by its store identifier.
pub async fn by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Option<Document>>, ApiError> {
    let id = ObjectId::parse_str(&id)
        .map_err(|_| ApiError::BadRequest(format!("invalid college id: {id}")))?;

    let college = state.store.find_one(COLLEGES, doc! { "_id": id }).await?;
    Ok(Json(college))
}
