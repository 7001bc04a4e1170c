//! Configuration Module
//!
//! Handles loading and managing gateway configuration from environment
//! variables, plus the fixed caching policy constants.

use std::env;

// == Policy Constants ==
/// Version identifier namespacing the cache store.
///
/// Changing the version creates a logically distinct store; older stores are
/// abandoned in place, never migrated or deleted.
pub const CACHE_VERSION: &str = "freerg-v1";

/// Ordered list of paths warmed into the cache store at install time.
pub const PRECACHE_MANIFEST: [&str; 2] = ["/", "/static/manifest.webmanifest"];

/// Default path prefix identifying static assets (served cache-first).
pub const DEFAULT_STATIC_PREFIX: &str = "/static/";

/// Gateway configuration parameters.
///
/// The caching policy itself (version, manifest) is fixed; only the
/// deployment knobs come from environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Origin the agent governs and forwards to (scheme://host:port)
    pub origin: String,
    /// Path prefix served with the cache-first strategy
    pub static_prefix: String,
    /// Name of the cache store namespace
    pub cache_version: String,
    /// Paths fetched and stored during install
    pub precache_manifest: Vec<String>,
    /// HTTP gateway port
    pub server_port: u16,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `AGENT_ORIGIN` - Origin to govern (default: http://localhost:8000)
    /// - `STATIC_PREFIX` - Static-assets path prefix (default: /static/)
    /// - `SERVER_PORT` - HTTP gateway port (default: 3000)
    pub fn from_env() -> Self {
        Self {
            origin: env::var("AGENT_ORIGIN")
                .unwrap_or_else(|_| "http://localhost:8000".to_string()),
            static_prefix: env::var("STATIC_PREFIX")
                .unwrap_or_else(|_| DEFAULT_STATIC_PREFIX.to_string()),
            cache_version: CACHE_VERSION.to_string(),
            precache_manifest: PRECACHE_MANIFEST.iter().map(|p| p.to_string()).collect(),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            origin: "http://localhost:8000".to_string(),
            static_prefix: DEFAULT_STATIC_PREFIX.to_string(),
            cache_version: CACHE_VERSION.to_string(),
            precache_manifest: PRECACHE_MANIFEST.iter().map(|p| p.to_string()).collect(),
            server_port: 3000,
        }
    }
}
