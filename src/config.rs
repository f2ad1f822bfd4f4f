//! Environment-driven configuration.
//!
//! Every runtime knob comes from the process environment, read once at
//! startup. The token secret is the only required variable: starting without
//! it (or with an empty value) would mean signing sessions with an empty
//! key, so that fails the process instead.

use anyhow::{Context, Result, bail};
use std::env;
use std::net::IpAddr;

/// Default HTTP port, matching the deployment the frontend expects.
const DEFAULT_PORT: u16 = 5000;

/// Default allowed CORS origin (the local frontend dev server).
const DEFAULT_ORIGIN: &str = "http://localhost:3000";

/// Default database name.
const DEFAULT_DB: &str = "collegeMate";

/// Runtime configuration, assembled once at startup and passed to
/// constructors explicitly.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address to bind the listener on.
    pub bind_addr: IpAddr,
    /// Port to listen on.
    pub port: u16,
    /// MongoDB connection string.
    pub mongodb_uri: String,
    /// Database holding the three collections.
    pub database: String,
    /// Secret key for signing session credentials. Never empty.
    pub access_token_secret: String,
    /// Origins allowed to send credentialed cross-origin requests.
    pub cors_origins: Vec<String>,
    /// Whether the session cookie carries the `Secure` attribute. Mirrors
    /// the deployment transport: false for plain HTTP, true behind TLS.
    pub cookie_secure: bool,
}

impl Config {
    /// Load configuration from the environment.
    ///
    /// Recognized variables: `BIND_ADDR`, `PORT`, `MONGODB_URI`,
    /// `MONGODB_DB`, `ACCESS_TOKEN_SECRET` (required), `CORS_ORIGINS`
    /// (comma-separated), `COOKIE_SECURE`.
    pub fn from_env() -> Result<Self> {
        let access_token_secret = require_non_empty(
            "ACCESS_TOKEN_SECRET",
            env::var("ACCESS_TOKEN_SECRET").ok(),
        )?;

        let bind_addr = match env::var("BIND_ADDR") {
            Ok(raw) => raw
                .parse()
                .with_context(|| format!("BIND_ADDR is not a valid IP address: {raw}"))?,
            Err(_) => IpAddr::from([127, 0, 0, 1]),
        };

        let port = match env::var("PORT") {
            Ok(raw) => raw
                .parse()
                .with_context(|| format!("PORT is not a valid port number: {raw}"))?,
            Err(_) => DEFAULT_PORT,
        };

        let mongodb_uri = env::var("MONGODB_URI")
            .unwrap_or_else(|_| "mongodb://localhost:27017".to_string());

        let database = env::var("MONGODB_DB").unwrap_or_else(|_| DEFAULT_DB.to_string());

        let cors_origins = match env::var("CORS_ORIGINS") {
            Ok(raw) => raw
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect(),
            Err(_) => vec![DEFAULT_ORIGIN.to_string()],
        };

        let cookie_secure = env::var("COOKIE_SECURE")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        Ok(Self {
            bind_addr,
            port,
            mongodb_uri,
            database,
            access_token_secret,
            cors_origins,
            cookie_secure,
        })
    }
}

/// Reject a missing or empty required variable.
fn require_non_empty(name: &str, value: Option<String>) -> Result<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        Some(_) => bail!("{name} must not be empty"),
        None => bail!("{name} must be set"),
    }
}
