//! Login and logout endpoints.

use axum::Json;
use axum::extract::State;
use axum_extra::extract::CookieJar;
use serde::Deserialize;
use serde_json::{Value, json};

use crate::auth::{clear_session_cookie, session_cookie};
use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
}

/// Issue a session credential and set it as the session cookie.
///
/// No credential check happens here: any identity string is accepted and
/// signed. Trust is delegated upstream (prototype contract, see DESIGN.md).
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(body): Json<LoginRequest>,
) -> Result<(CookieJar, Json<Value>), ApiError> {
    let token = state.auth.issue(&body.email)?;
    tracing::info!(user = %body.email, "session issued");

    let jar = jar.add(session_cookie(token, state.cookie_secure));
    Ok((jar, Json(json!({ "success": true }))))
}

/// Clear the session cookie.
///
/// Client-side only: the server keeps no session record, so a copy of the
/// credential taken elsewhere remains valid until it expires.
pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
) -> (CookieJar, Json<Value>) {
    let jar = jar.remove(clear_session_cookie(state.cookie_secure));
    (
        jar,
        Json(json!({ "success": "Cookie removed successfully with logout" })),
    )
}
