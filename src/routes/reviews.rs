//! Review endpoints.

use axum::Json;
use axum::extract::State;
use mongodb::bson::{Document, doc};
use serde_json::{Value, json};

use crate::error::ApiError;
use crate::state::AppState;
use crate::store::REVIEWS;

/// List all reviews.
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Document>>, ApiError> {
    let reviews = state.store.find(REVIEWS, doc! {}).await?;
    Ok(Json(reviews))
}

/// Store a review document.
pub async fn create(
    State(state): State<AppState>,
    Json(review): Json<Document>,
) -> Result<Json<Value>, ApiError> {
    let inserted_id = state.store.insert_one(REVIEWS, review).await?;
    Ok(Json(json!({ "insertedId": inserted_id })))
}
