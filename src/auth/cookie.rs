//! Session cookie construction.
//!
//! The credential travels in an `HttpOnly` cookie named `token`. The
//! `Secure` attribute mirrors the deployment transport (config flag);
//! `SameSite=Lax` and `Path=/` are set explicitly rather than left to
//! library defaults.

use axum_extra::extract::cookie::{Cookie, SameSite};

/// Name of the session cookie.
pub const SESSION_COOKIE: &str = "token";

/// Build the session cookie carrying a freshly issued credential.
pub fn session_cookie(token: String, secure: bool) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, token))
        .http_only(true)
        .secure(secure)
        .same_site(SameSite::Lax)
        .path("/")
        .build()
}

/// Build the cookie used to clear a session on logout.
///
/// Only the client copy is discarded; the server keeps no session state, so
/// an already-issued credential stays verifiable until it expires.
pub fn clear_session_cookie(secure: bool) -> Cookie<'static> {
    session_cookie(String::new(), secure)
}
