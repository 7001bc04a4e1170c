//! Cache Module
//!
//! Named, versioned response stores behind object-safe async traits, with
//! an in-memory implementation.

mod entry;
mod key;
mod store;


// Re-export public types
pub use entry::CachedResponse;
pub use key::CacheKey;
pub use store::{Cache, CacheStorage, MemoryCache, MemoryStorage};
