//! API Module
//!
//! HTTP gateway surface: a catch-all route feeding requests through the
//! interceptor, plus a health endpoint.

mod handlers;
mod routes;

// Re-export public types
pub use handlers::AppState;
pub use routes::create_router;
