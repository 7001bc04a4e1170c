//! Fetch Strategies
//!
//! The two response strategies the interceptor dispatches to: cache-first
//! for static assets and network-first with cache fallback for pages.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::cache::{Cache, CacheKey, CachedResponse};
use crate::error::Result;
use crate::models::FetchRequest;
use crate::net::Network;

// == Cache First ==
/// Serves from cache when present, otherwise goes to network.
///
/// A miss is not written back to the cache; static assets enter the cache
/// only through the install-time manifest warm-up. Network failures on a
/// miss propagate to the caller unrecovered.
pub(crate) async fn cache_first(
    cache: Arc<dyn Cache>,
    network: &dyn Network,
    request: &FetchRequest,
) -> Result<CachedResponse> {
    let key = CacheKey::of_request(request);

    if let Some(cached) = cache.get(&key).await? {
        debug!(%key, "cache-first: hit");
        return Ok(cached);
    }

    debug!(%key, "cache-first: miss, going to network");
    network.fetch(request).await
}

// == Network First ==
/// Prefers a fresh response, falling back to cache when the network fails.
///
/// A successful response is cloned and stored from a detached task so the
/// caller is never blocked on the write. On failure the request key is
/// tried first, then the origin root as a last resort; only when both miss
/// does the original network error surface.
pub(crate) async fn network_first(
    cache: Arc<dyn Cache>,
    network: &dyn Network,
    request: &FetchRequest,
    root_key: CacheKey,
) -> Result<CachedResponse> {
    let key = CacheKey::of_request(request);

    match network.fetch(request).await {
        Ok(response) => {
            let stored = response.clone();
            let write_cache = cache.clone();
            let write_key = key.clone();
            tokio::spawn(async move {
                if let Err(e) = write_cache.put(write_key.clone(), stored).await {
                    warn!(key = %write_key, "background cache write failed: {}", e);
                }
            });
            Ok(response)
        }
        Err(network_err) => {
            debug!(%key, "network-first: network failed, trying cache");
            if let Some(cached) = cache.get(&key).await? {
                return Ok(cached);
            }
            if let Some(root) = cache.get(&root_key).await? {
                debug!(%key, "network-first: falling back to origin root");
                return Ok(root);
            }
            Err(network_err)
        }
    }
}
