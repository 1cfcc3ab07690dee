//! HTTP abstraction: a blocking GET returning status and body.

use tracing::{debug, warn};

/// Status and decoded body of an HTTP response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body decoded as UTF-8 (lossy).
    pub body: String,
}

/// The request never produced a response.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct TransportError(pub String);

/// Blocking GET, the only verb the service needs.
pub trait Transport {
    /// Fetch `url` and return its status and body.
    fn get(&mut self, url: &str) -> Result<HttpResponse, TransportError>;
}

/// `Transport` backed by the reqwest blocking client.
pub struct ReqwestTransport {
    client: reqwest::blocking::Client,
}

impl ReqwestTransport {
    /// Build a client identifying itself with `user_agent`.
    ///
    /// The client keeps reqwest's default timeout; no override is applied.
    pub fn new(user_agent: &str) -> Result<Self, TransportError> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(user_agent)
            .build()
            .map_err(|e| TransportError(e.to_string()))?;
        Ok(Self { client })
    }

    fn describe(e: &reqwest::Error) -> String {
        if e.is_timeout() {
            format!("timed out: {e}")
        } else if e.is_connect() {
            format!("connection failed: {e}")
        } else {
            e.to_string()
        }
    }
}

impl Transport for ReqwestTransport {
    fn get(&mut self, url: &str) -> Result<HttpResponse, TransportError> {
        debug!(url, "HTTP GET start");
        let resp = self.client.get(url).send().map_err(|e| {
            warn!(url, error = %e, "HTTP GET failed");
            TransportError(Self::describe(&e))
        })?;
        let status = resp.status().as_u16();
        let bytes = resp.bytes().map_err(|e| {
            warn!(url, error = %e, "Failed reading body");
            TransportError(Self::describe(&e))
        })?;
        debug!(url, status, len = bytes.len(), "HTTP GET done");
        Ok(HttpResponse {
            status,
            body: String::from_utf8_lossy(&bytes).into_owned(),
        })
    }
}

/// A transport that always fails, for sources that never go online.
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineTransport;

impl Transport for OfflineTransport {
    fn get(&mut self, url: &str) -> Result<HttpResponse, TransportError> {
        Err(TransportError(format!("offline: refusing to fetch {url}")))
    }
}
