//! Admission application endpoints (session-gated).

use axum::extract::{Path, State};
use axum::{Extension, Json};
use mongodb::bson::{Document, doc};
use serde_json::{Value, json};

use crate::auth::Identity;
use crate::error::ApiError;
use crate::state::AppState;
use crate::store::ADMISSIONS;

/// Store an admission application document.
pub async fn create(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Json(application): Json<Document>,
) -> Result<Json<Value>, ApiError> {
    tracing::debug!(user = %identity.0, "admission application received");

    let inserted_id = state.store.insert_one(ADMISSIONS, application).await?;
    Ok(Json(json!({ "insertedId": inserted_id })))
}

/// First admission application for the given email, or `null`.
pub async fn by_email(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Path(email): Path<String>,
) -> Result<Json<Option<Document>>, ApiError> {
    tracing::debug!(user = %identity.0, lookup = %email, "admission lookup");

    let application = state
        .store
        .find_one(ADMISSIONS, doc! { "email": email })
        .await?;
    Ok(Json(application))
}
