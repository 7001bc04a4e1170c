//! API Routes
//!
//! Configures the Axum router: one reserved health endpoint, everything
//! else falls through to the interceptor.

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{fetch_handler, health_handler, AppState};

/// Creates the gateway router.
///
/// # Endpoints
/// - `GET /agent/health` - Health check (never intercepted)
/// - everything else - Offered to the interceptor via the fallback handler
///
/// # Middleware
/// - CORS: Allows any origin (configurable for production)
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    // Configure CORS middleware
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/agent/health", get(health_handler))
        .fallback(fetch_handler)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
