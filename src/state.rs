//! Shared application state.

use std::sync::Arc;

use crate::auth::Authenticator;
use crate::store::DocumentStore;

/// State shared by all request tasks: the read-only authenticator keys and
/// the long-lived store handle. Assembled once at startup; no ambient
/// globals.
#[derive(Clone)]
pub struct AppState {
    pub auth: Authenticator,
    pub store: Arc<dyn DocumentStore>,
    /// Whether session cookies carry the `Secure` attribute.
    pub cookie_secure: bool,
}
