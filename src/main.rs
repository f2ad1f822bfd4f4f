use anyhow::{Context, Result};
use clap::Parser;
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use collegemate::auth::Authenticator;
use collegemate::routes;
use collegemate::store::MongoStore;
use collegemate::{AppState, Config};

#[derive(Parser)]
#[command(
    name = "collegemate",
    about = "Backend service for the collegemate college-admission listing site",
    version
)]
struct Cli {
    /// Port to listen on (overrides the PORT environment variable)
    #[arg(long)]
    port: Option<u16>,

    /// Address to bind (overrides the BIND_ADDR environment variable)
    #[arg(long)]
    bind: Option<IpAddr>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set log level based on verbose flag (must be done before init)
    if cli.verbose && std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "collegemate=debug,tower_http=debug");
    }
    collegemate::logging::init()?;

    let mut config = Config::from_env()?;
    if let Some(port) = cli.port {
        config.port = port;
    }
    if let Some(bind) = cli.bind {
        config.bind_addr = bind;
    }

    let store = MongoStore::connect(&config.mongodb_uri, &config.database).await?;
    store.ping().await?;

    let state = AppState {
        auth: Authenticator::new(&config.access_token_secret),
        store: Arc::new(store),
        cookie_secure: config.cookie_secure,
    };

    let app = routes::router(state, &config);

    let addr = SocketAddr::new(config.bind_addr, config.port);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    tracing::info!("The server is running at port: {}", config.port);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    Ok(())
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c().await.ok();
    tracing::info!("Received shutdown signal...");
}
