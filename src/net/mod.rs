//! Network Module
//!
//! Upstream network access behind an object-safe trait so the gateway's
//! reqwest client and test fakes are interchangeable.

mod client;

pub use client::HttpNetwork;

use async_trait::async_trait;

use crate::cache::CachedResponse;
use crate::error::Result;
use crate::models::FetchRequest;

// == Network Trait ==
/// Issues a request and resolves to a response or a network failure.
///
/// Any HTTP status counts as success here; `AgentError::Network` means the
/// request itself failed (offline, DNS failure, refused connection).
#[async_trait]
pub trait Network: Send + Sync {
    async fn fetch(&self, request: &FetchRequest) -> Result<CachedResponse>;
}
