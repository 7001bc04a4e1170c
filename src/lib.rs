//! Offline Agent - an offline-first caching gateway
//!
//! Intercepts requests for a single origin and answers them with one of two
//! strategies: cache-first for static assets, network-first with cache
//! fallback for pages. A fixed manifest is warmed into a versioned cache
//! store at install time so the origin root stays reachable offline.

pub mod agent;
pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod net;

pub use agent::{FetchOutcome, Interceptor};
pub use api::AppState;
pub use config::Config;
