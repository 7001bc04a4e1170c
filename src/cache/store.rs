//! Cache Storage Module
//!
//! The storage seam of the agent: a backend owning named stores, and the
//! store itself mapping request identity to stored responses. Both are
//! object-safe traits so tests and alternative backends can substitute the
//! in-memory implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::cache::{CacheKey, CachedResponse};
use crate::error::Result;

// == Cache Trait ==
/// A single named response store.
#[async_trait]
pub trait Cache: Send + Sync {
    /// Looks up a stored response by request identity.
    async fn get(&self, key: &CacheKey) -> Result<Option<CachedResponse>>;

    /// Stores a response under a request identity, overwriting any previous
    /// entry for that key (last write wins).
    async fn put(&self, key: CacheKey, response: CachedResponse) -> Result<()>;

    /// Lists the request identities currently stored.
    async fn keys(&self) -> Result<Vec<CacheKey>>;
}

// == Cache Storage Trait ==
/// A backend owning named stores.
///
/// Opening a name that does not exist creates an empty store. Opening a new
/// version name leaves older stores untouched; nothing here ever deletes a
/// store.
#[async_trait]
pub trait CacheStorage: Send + Sync {
    /// Opens (creating if absent) the store with the given name.
    async fn open(&self, name: &str) -> Result<Arc<dyn Cache>>;
}

// == Memory Storage ==
/// In-memory storage backend holding every named store for process lifetime.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    stores: RwLock<HashMap<String, Arc<MemoryCache>>>,
}

impl MemoryStorage {
    /// Creates an empty backend.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CacheStorage for MemoryStorage {
    async fn open(&self, name: &str) -> Result<Arc<dyn Cache>> {
        if let Some(store) = self.stores.read().await.get(name) {
            return Ok(store.clone());
        }

        let mut stores = self.stores.write().await;
        let store = stores
            .entry(name.to_string())
            .or_insert_with(|| {
                debug!(store = name, "creating cache store");
                Arc::new(MemoryCache::new())
            })
            .clone();
        Ok(store)
    }
}

// == Memory Cache ==
/// In-memory named store: a locked map of request identity to response.
///
/// Concurrent writes to distinct keys are disjoint; same-key writes are
/// unsequenced and the last one to acquire the lock wins.
#[derive(Debug, Default)]
pub struct MemoryCache {
    entries: RwLock<HashMap<CacheKey, CachedResponse>>,
}

impl MemoryCache {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current number of entries.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    /// Returns true if the store holds no entries.
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[async_trait]
impl Cache for MemoryCache {
    async fn get(&self, key: &CacheKey) -> Result<Option<CachedResponse>> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn put(&self, key: CacheKey, response: CachedResponse) -> Result<()> {
        self.entries.write().await.insert(key, response);
        Ok(())
    }

    async fn keys(&self) -> Result<Vec<CacheKey>> {
        Ok(self.entries.read().await.keys().cloned().collect())
    }
}
