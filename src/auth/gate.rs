//! Request gate for protected routes.
//!
//! Applied as a `route_layer` on the protected sub-router, so it runs
//! before any handler logic and cannot be bypassed by route ordering. On
//! success the decoded identity is inserted into the request extensions for
//! downstream handlers; on failure the request short-circuits with 401 and
//! the handler never runs.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;
use axum_extra::extract::CookieJar;

use super::cookie::SESSION_COOKIE;
use crate::error::ApiError;
use crate::state::AppState;

/// Identity decoded from a verified session credential, available to gated
/// handlers via `Extension<Identity>`.
#[derive(Clone, Debug)]
pub struct Identity(pub String);

/// Verify the session cookie and attach the caller's identity, or reject
/// with a single undifferentiated `Unauthorized`.
pub async fn require_session(
    State(state): State<AppState>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = jar
        .get(SESSION_COOKIE)
        .map(|cookie| cookie.value().to_string())
        .ok_or(ApiError::Unauthorized)?;

    let identity = state.auth.verify(&token)?;
    tracing::debug!(user = %identity, "session verified");

    request.extensions_mut().insert(Identity(identity));
    Ok(next.run(request).await)
}
