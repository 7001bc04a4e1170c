//! Models Module
//!
//! Request/response types shared across the agent and the gateway API.

mod origin;
mod request;
mod responses;

// Re-export public types
pub use origin::Origin;
pub use request::{FetchRequest, RequestClass};
pub use responses::HealthResponse;
