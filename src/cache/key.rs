//! Cache Key Module
//!
//! Request identity used to key the cache store.

use std::fmt;

use crate::models::FetchRequest;

// == Cache Key ==
/// Identity of a request: method plus absolute URL.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    method: String,
    url: String,
}

impl CacheKey {
    // == Constructor ==
    /// Creates a key from raw parts.
    pub fn new(method: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            url: url.into(),
        }
    }

    /// Creates the key identifying a request.
    pub fn of_request(request: &FetchRequest) -> Self {
        Self::new(request.method.clone(), request.url.to_string())
    }

    /// Returns the method component.
    pub fn method(&self) -> &str {
        &self.method
    }

    /// Returns the URL component.
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method, self.url)
    }
}
