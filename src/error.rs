//! Error types for the offline agent
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Agent Error Enum ==
/// Unified error type for the offline agent.
#[derive(Error, Debug)]
pub enum AgentError {
    /// Install-time warm-up failed; the whole install is abandoned
    #[error("Install failed: {0}")]
    InstallFailed(String),

    /// Network request failed (offline, DNS failure, refused connection)
    #[error("Network error: {0}")]
    Network(String),

    /// Request could not be parsed or classified
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Cache store backend failed
    #[error("Cache store error: {0}")]
    Store(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for AgentError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AgentError::InstallFailed(msg) => (StatusCode::SERVICE_UNAVAILABLE, msg.clone()),
            AgentError::Network(msg) => (StatusCode::BAD_GATEWAY, msg.clone()),
            AgentError::InvalidRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AgentError::Store(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the offline agent.
pub type Result<T> = std::result::Result<T, AgentError>;
