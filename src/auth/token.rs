//! Session credential issuance and verification.
//!
//! A credential is an HS256 JWT over `{sub, iat, exp}` signed with the
//! server secret. It is never stored server-side: validity is purely a
//! function of the signature and the clock, so a still-unexpired token
//! remains valid even after logout.

use crate::error::ApiError;
use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode,
};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// Session lifetime: 30 days.
pub const SESSION_TTL_SECS: u64 = 30 * 24 * 60 * 60;

/// Claims carried by a session credential.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// The identity the credential was issued to.
    pub sub: String,
    /// Issued at (seconds since the Unix epoch).
    pub iat: u64,
    /// Expiration (seconds since the Unix epoch).
    pub exp: u64,
}

/// Issues and verifies session credentials.
///
/// Holds the pre-derived signing keys; a pure function of (payload, secret,
/// clock) otherwise, so it is freely shareable across request tasks.
#[derive(Clone)]
pub struct Authenticator {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
}

impl Authenticator {
    /// Build an authenticator from the server secret.
    ///
    /// The caller (config loading) guarantees the secret is non-empty.
    pub fn new(secret: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // A token expired by one second must already fail verification.
        validation.leeway = 0;

        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    /// Sign a credential for `identity`, expiring [`SESSION_TTL_SECS`] from
    /// now. The identity is signed as-is; establishing that it is legitimate
    /// is the caller's concern.
    pub fn issue(&self, identity: &str) -> Result<String, ApiError> {
        let now = unix_now()?;
        let claims = Claims {
            sub: identity.to_string(),
            iat: now,
            exp: now + SESSION_TTL_SECS,
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|e| ApiError::Internal(format!("failed to sign credential: {e}")))
    }

    /// Verify a credential and return the identity it was issued to.
    ///
    /// Absent, malformed, tampered, and expired tokens all fail with the
    /// same `Unauthorized` so the caller cannot tell which check rejected.
    pub fn verify(&self, token: &str) -> Result<String, ApiError> {
        decode::<Claims>(token, &self.decoding, &self.validation)
            .map(|data| data.claims.sub)
            .map_err(|_| ApiError::Unauthorized)
    }
}

/// Current time in seconds since the Unix epoch.
fn unix_now() -> Result<u64, ApiError> {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .map_err(|_| ApiError::Internal("system clock is before the Unix epoch".to_string()))
}
