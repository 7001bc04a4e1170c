//! Origin Model
//!
//! The scheme+host+port triple identifying a web resource's security
//! boundary. Two URLs belong to the same origin iff all three match.

use std::fmt;

use url::Url;

use crate::error::{AgentError, Result};

// == Origin ==
/// A scheme+host+port triple.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Origin {
    /// URL scheme (http, https)
    pub scheme: String,
    /// Host name or address
    pub host: String,
    /// Port, defaulted from the scheme when absent
    pub port: u16,
}

impl Origin {
    // == Parse ==
    /// Parses an origin from a base URL string such as `http://localhost:8000`.
    pub fn parse(raw: &str) -> Result<Self> {
        let url = Url::parse(raw)
            .map_err(|e| AgentError::InvalidRequest(format!("invalid origin '{}': {}", raw, e)))?;
        Self::of_url(&url)
    }

    // == Of URL ==
    /// Extracts the origin triple of an absolute URL.
    ///
    /// URLs without a host or a known default port (e.g. `data:` URLs) have
    /// no origin triple and are rejected.
    pub fn of_url(url: &Url) -> Result<Self> {
        let host = url
            .host_str()
            .ok_or_else(|| AgentError::InvalidRequest(format!("URL has no host: {}", url)))?;
        let port = url
            .port_or_known_default()
            .ok_or_else(|| AgentError::InvalidRequest(format!("URL has no port: {}", url)))?;

        Ok(Self {
            scheme: url.scheme().to_string(),
            host: host.to_string(),
            port,
        })
    }

    // == Join ==
    /// Builds an absolute URL for a path (optionally with a query string)
    /// under this origin.
    pub fn join(&self, path: &str) -> Result<Url> {
        let base = format!("{}://{}:{}", self.scheme, self.host, self.port);
        let url = Url::parse(&base)
            .and_then(|u| u.join(path))
            .map_err(|e| AgentError::InvalidRequest(format!("cannot join '{}': {}", path, e)))?;
        Ok(url)
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}://{}:{}", self.scheme, self.host, self.port)
    }
}
