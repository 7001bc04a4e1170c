//! Agent Module
//!
//! The request-handling policy: install-time warm-up, origin gating and the
//! two fetch strategies.

mod interceptor;
mod strategies;

// Re-export public types
pub use interceptor::{FetchOutcome, Interceptor};
