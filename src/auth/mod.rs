//! Session authentication: token issuance, cookie transport, request gate.

mod cookie;
mod gate;
mod token;

pub use cookie::{SESSION_COOKIE, clear_session_cookie, session_cookie};
pub use gate::{Identity, require_session};
pub use token::{Authenticator, Claims, SESSION_TTL_SECS};
