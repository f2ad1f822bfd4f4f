//! Router assembly.
//!
//! Handlers are stateless request/response mappings: each one forwards its
//! parameters to a single document store query. The protected sub-router
//! carries the session gate as a `route_layer`; everything else is public.

mod admissions;
mod colleges;
mod reviews;
mod session;

use axum::http::{HeaderValue, Method, header};
use axum::routing::{get, post};
use axum::{Router, middleware};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::auth::require_session;
use crate::config::Config;
use crate::state::AppState;

/// Build the full application router.
pub fn router(state: AppState, config: &Config) -> Router {
    let protected = Router::new()
        .route("/admissions", post(admissions::create))
        .route("/admission/{email}", get(admissions::by_email))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_session,
        ));

    Router::new()
        .route("/", get(root))
        .route("/jwt", post(session::login))
        .route("/logout", post(session::logout))
        .route("/colleges", get(colleges::list))
        .route("/colleges/{id}", get(colleges::by_id))
        .route("/reviews", get(reviews::list).post(reviews::create))
        .merge(protected)
        .layer(cors_layer(&config.cors_origins))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Liveness banner.
async fn root() -> &'static str {
    "College mate is running.........."
}

/// Credentialed CORS for the configured frontend origins. The cookie must
/// cross origins, so a wildcard is not an option here.
fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("ignoring invalid CORS origin: {origin}");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true)
}
