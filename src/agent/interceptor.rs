//! Interceptor
//!
//! The agent core: warms the versioned cache store at install time, gates
//! fetches on the agent origin and dispatches each same-origin request to
//! the strategy its path selects.

use std::sync::Arc;

use tracing::{debug, info};

use crate::agent::strategies::{cache_first, network_first};
use crate::cache::{Cache, CacheKey, CacheStorage, CachedResponse};
use crate::config::Config;
use crate::error::{AgentError, Result};
use crate::models::{FetchRequest, Origin, RequestClass};
use crate::net::Network;

// == Fetch Outcome ==
/// Result of offering a request to the interceptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Cross-origin request; not intercepted, default handling applies
    Passthrough,
    /// Response produced by one of the strategies
    Response(CachedResponse),
}

// == Interceptor ==
/// The request-handling policy for a single origin.
///
/// Holds the storage backend and network as injected dependencies; the
/// versioned store is opened on demand, created on first open and never
/// torn down here.
pub struct Interceptor {
    origin: Origin,
    cache_version: String,
    static_prefix: String,
    precache_manifest: Vec<String>,
    storage: Arc<dyn CacheStorage>,
    network: Arc<dyn Network>,
}

impl Interceptor {
    // == Constructor ==
    /// Creates an interceptor from configuration and its two dependencies.
    pub fn new(
        config: &Config,
        storage: Arc<dyn CacheStorage>,
        network: Arc<dyn Network>,
    ) -> Result<Self> {
        let origin = Origin::parse(&config.origin)?;
        Ok(Self {
            origin,
            cache_version: config.cache_version.clone(),
            static_prefix: config.static_prefix.clone(),
            precache_manifest: config.precache_manifest.clone(),
            storage,
            network,
        })
    }

    /// The origin this interceptor governs.
    pub fn origin(&self) -> &Origin {
        &self.origin
    }

    // == Install ==
    /// Warms the versioned cache store with every manifest path.
    ///
    /// Readiness is deferred on this call: it returns only once all entries
    /// are fetched and stored. Any single fetch or store failure fails the
    /// whole install; retrying is the caller's concern.
    pub async fn install(&self) -> Result<()> {
        info!(store = %self.cache_version, "installing: warming precache manifest");
        let cache = self.storage.open(&self.cache_version).await?;

        for path in &self.precache_manifest {
            let url = self.origin.join(path)?;
            let request = FetchRequest::get(url);
            let response = self.network.fetch(&request).await.map_err(|e| {
                AgentError::InstallFailed(format!("precache of '{}' failed: {}", path, e))
            })?;
            cache
                .put(CacheKey::of_request(&request), response)
                .await
                .map_err(|e| {
                    AgentError::InstallFailed(format!("storing '{}' failed: {}", path, e))
                })?;
            debug!(path = %path, "precached");
        }

        info!(entries = self.precache_manifest.len(), "install complete");
        Ok(())
    }

    // == Handle Fetch ==
    /// Applies the origin gate, then dispatches to a strategy.
    ///
    /// Foreign-origin requests yield `Passthrough` without touching cache
    /// or network; the caller applies its default handling.
    pub async fn handle_fetch(&self, request: &FetchRequest) -> Result<FetchOutcome> {
        match request.classify(&self.origin, &self.static_prefix) {
            RequestClass::Foreign => {
                debug!(url = %request.url, "foreign origin, passing through");
                Ok(FetchOutcome::Passthrough)
            }
            RequestClass::StaticAsset => {
                let cache = self.storage.open(&self.cache_version).await?;
                cache_first(cache, self.network.as_ref(), request)
                    .await
                    .map(FetchOutcome::Response)
            }
            RequestClass::Page => {
                let cache = self.storage.open(&self.cache_version).await?;
                let root_key = self.root_key()?;
                network_first(cache, self.network.as_ref(), request, root_key)
                    .await
                    .map(FetchOutcome::Response)
            }
        }
    }

    /// Key of the origin root page, the last-resort offline fallback.
    fn root_key(&self) -> Result<CacheKey> {
        let url = self.origin.join("/")?;
        Ok(CacheKey::new("GET", url.to_string()))
    }
}
