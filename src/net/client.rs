//! HTTP Network Client
//!
//! reqwest-backed `Network` implementation used by the gateway.

use async_trait::async_trait;

use crate::cache::CachedResponse;
use crate::error::{AgentError, Result};
use crate::models::FetchRequest;
use crate::net::Network;

// == HTTP Network ==
/// Upstream client. Timeouts and connection pooling are whatever the
/// underlying client provides; this layer adds no retries.
#[derive(Debug, Clone, Default)]
pub struct HttpNetwork {
    client: reqwest::Client,
}

impl HttpNetwork {
    /// Creates a client with default settings.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Network for HttpNetwork {
    async fn fetch(&self, request: &FetchRequest) -> Result<CachedResponse> {
        let method = reqwest::Method::from_bytes(request.method.as_bytes()).map_err(|e| {
            AgentError::InvalidRequest(format!("invalid method '{}': {}", request.method, e))
        })?;

        let response = self
            .client
            .request(method, request.url.as_str())
            .send()
            .await
            .map_err(|e| AgentError::Network(format!("{}: {}", request.url, e)))?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect();
        let body = response
            .bytes()
            .await
            .map_err(|e| AgentError::Network(format!("{}: {}", request.url, e)))?;

        Ok(CachedResponse::new(status, headers, body))
    }
}
