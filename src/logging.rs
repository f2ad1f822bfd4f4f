//! Logging setup for the collegemate backend.
//!
//! Logs go to stderr for the process supervisor to collect. The level is
//! controlled via the RUST_LOG environment variable:
//! - RUST_LOG=debug collegemate   (verbose logging)
//! - RUST_LOG=info collegemate    (default level)
//! - RUST_LOG=error collegemate   (errors only)

use anyhow::{Context, Result};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber. Must run before anything logs.
pub fn init() -> Result<()> {
    // Configure filter from environment or default to info
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("collegemate=info,tower_http=info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .try_init()
        .context("Failed to initialize tracing subscriber")?;

    Ok(())
}
