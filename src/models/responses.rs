//! Response DTOs for the gateway API
//!
//! Defines the structure of outgoing HTTP response bodies for the few
//! endpoints the gateway serves itself (everything else is intercepted).

use serde::Serialize;

/// Response body for the health endpoint (GET /agent/health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}
