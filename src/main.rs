//! Offline Agent - an offline-first caching gateway
//!
//! Serves a single origin through two caching strategies: cache-first for
//! static assets, network-first with offline fallback for pages.

mod agent;
mod api;
mod cache;
mod config;
mod error;
mod models;
mod net;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::signal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use agent::Interceptor;
use api::{create_router, AppState};
use cache::MemoryStorage;
use config::Config;
use net::HttpNetwork;

/// Main entry point for the offline agent gateway.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Wire the in-memory cache storage and the upstream HTTP client
/// 4. Run the install warm-up; the gateway is not ready until it succeeds
/// 5. Create Axum router and start serving on the configured port
/// 6. Handle graceful shutdown on SIGINT/SIGTERM
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing subscriber with env filter
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "offline_agent=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Offline Agent gateway");

    // Load configuration from environment variables
    let config = Config::from_env();
    info!(
        "Configuration loaded: origin={}, static_prefix={}, cache_version={}, port={}",
        config.origin, config.static_prefix, config.cache_version, config.server_port
    );

    // Wire dependencies
    let storage = Arc::new(MemoryStorage::new());
    let network = Arc::new(HttpNetwork::new());
    let interceptor = Arc::new(Interceptor::new(&config, storage, network.clone())?);

    // Install warm-up gates readiness; a failure here means the process
    // exits and the supervisor retries (standard platform retry semantics)
    interceptor
        .install()
        .await
        .context("install warm-up failed")?;

    // Create router with the shared state
    let state = AppState::new(interceptor, network);
    let app = create_router(state);

    // Bind to configured port
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("Gateway listening on http://{}", addr);

    // Start server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("Gateway shutdown complete");
    Ok(())
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating shutdown...");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating shutdown...");
        }
    }
}
