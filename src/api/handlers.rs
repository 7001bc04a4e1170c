//! API Handlers
//!
//! Bridges incoming HTTP requests to the interceptor and converts stored
//! responses back into HTTP responses.

use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::{Request, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use tracing::debug;

use crate::agent::{FetchOutcome, Interceptor};
use crate::cache::CachedResponse;
use crate::error::{AgentError, Result};
use crate::models::{FetchRequest, HealthResponse};
use crate::net::Network;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// The caching policy
    pub interceptor: Arc<Interceptor>,
    /// Network used for passthrough (non-intercepted) requests
    pub network: Arc<dyn Network>,
}

impl AppState {
    /// Creates a new AppState.
    pub fn new(interceptor: Arc<Interceptor>, network: Arc<dyn Network>) -> Self {
        Self {
            interceptor,
            network,
        }
    }
}

/// Catch-all handler: every request is offered to the interceptor.
///
/// Origin-form paths are rewritten onto the governed origin before
/// interception. A passthrough outcome (absolute-form request for some
/// other origin) is forwarded to the network directly, with no caching.
pub async fn fetch_handler(
    State(state): State<AppState>,
    req: Request<Body>,
) -> Result<Response> {
    let request = to_fetch_request(&state, &req)?;
    debug!(method = %request.method, url = %request.url, "intercepting");

    let response = match state.interceptor.handle_fetch(&request).await? {
        FetchOutcome::Response(response) => response,
        FetchOutcome::Passthrough => state.network.fetch(&request).await?,
    };

    Ok(to_http_response(response))
}

/// Handler for GET /agent/health
///
/// Kept off the intercepted namespace so it never shadows an upstream path
/// the agent should be caching.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

// == Conversions ==
/// Maps an incoming HTTP request to the interceptor's request model.
fn to_fetch_request(state: &AppState, req: &Request<Body>) -> Result<FetchRequest> {
    let method = req.method().as_str().to_string();
    let url = match req.uri().host() {
        // Absolute-form request line: keep the target as given
        Some(_) => url::Url::parse(&req.uri().to_string())
            .map_err(|e| AgentError::InvalidRequest(format!("bad request URI: {}", e)))?,
        None => {
            let path_and_query = req
                .uri()
                .path_and_query()
                .map(|pq| pq.as_str())
                .unwrap_or("/");
            state.interceptor.origin().join(path_and_query)?
        }
    };
    Ok(FetchRequest::new(method, url))
}

/// Converts a stored response back into an HTTP response.
fn to_http_response(stored: CachedResponse) -> Response {
    let status = StatusCode::from_u16(stored.status).unwrap_or(StatusCode::OK);
    let mut builder = Response::builder().status(status);

    for (name, value) in &stored.headers {
        // Bodies were decoded upstream; framing is recomputed on the way out
        if is_framing_header(name) {
            continue;
        }
        builder = builder.header(name, value);
    }

    builder
        .body(Body::from(stored.body))
        .unwrap_or_else(|_| StatusCode::INTERNAL_SERVER_ERROR.into_response())
}

fn is_framing_header(name: &str) -> bool {
    name.eq_ignore_ascii_case("content-length")
        || name.eq_ignore_ascii_case("transfer-encoding")
        || name.eq_ignore_ascii_case("content-encoding")
        || name.eq_ignore_ascii_case("connection")
}
