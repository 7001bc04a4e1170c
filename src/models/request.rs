//! Fetch Request Model
//!
//! The transient request seen by the interceptor, and its classification
//! into exactly one of three buckets.

use url::Url;

use crate::models::Origin;

// == Request Class ==
/// Classification buckets for an incoming request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestClass {
    /// Different origin than the agent's; never intercepted
    Foreign,
    /// Same origin, path under the static-assets prefix
    StaticAsset,
    /// Same origin, everything else
    Page,
}

// == Fetch Request ==
/// A request offered to the interceptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    /// HTTP method name (uppercase)
    pub method: String,
    /// Absolute request URL
    pub url: Url,
}

impl FetchRequest {
    /// Creates a request with an explicit method.
    pub fn new(method: impl Into<String>, url: Url) -> Self {
        Self {
            method: method.into(),
            url,
        }
    }

    /// Creates a GET request.
    pub fn get(url: Url) -> Self {
        Self::new("GET", url)
    }

    /// Returns the URL path component.
    pub fn path(&self) -> &str {
        self.url.path()
    }

    // == Classify ==
    /// Classifies the request given the agent origin and static prefix.
    ///
    /// Requests whose URL carries no origin triple at all (e.g. `data:`)
    /// cannot be ours and classify as foreign.
    pub fn classify(&self, origin: &Origin, static_prefix: &str) -> RequestClass {
        match Origin::of_url(&self.url) {
            Ok(ref request_origin) if request_origin == origin => {
                if self.path().starts_with(static_prefix) {
                    RequestClass::StaticAsset
                } else {
                    RequestClass::Page
                }
            }
            _ => RequestClass::Foreign,
        }
    }
}
