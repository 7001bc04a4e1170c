//! Cached Response Module
//!
//! Defines the stored response value: status, headers and an opaque body.

use bytes::Bytes;

// == Cached Response ==
/// A response as held by the cache store.
///
/// The body is an opaque byte buffer. Cloning is cheap (the buffer is
/// reference counted), which makes clone-before-consume explicit: a response
/// handed to both the caller and the cache writer is cloned once and each
/// side owns its copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CachedResponse {
    /// HTTP status code
    pub status: u16,
    /// Ordered header list as received
    pub headers: Vec<(String, String)>,
    /// Response body
    pub body: Bytes,
}

impl CachedResponse {
    // == Constructor ==
    /// Creates a response from its parts.
    pub fn new(status: u16, headers: Vec<(String, String)>, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            headers,
            body: body.into(),
        }
    }

    /// Creates a 200 response with no headers.
    pub fn ok(body: impl Into<Bytes>) -> Self {
        Self::new(200, Vec::new(), body)
    }

    /// Case-insensitive header lookup, first match wins.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}
