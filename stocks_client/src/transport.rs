//! HTTP transport used by the quote fetcher.
//!
//! `QuoteTransport` is the seam between fetch classification and the network.
//! Production code uses `ReqwestTransport`, a blocking `reqwest` client; tests
//! plug in fakes that record the requested URLs.
use log::debug;
use thiserror::Error;

/// Status and body of a completed HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body; `None` when the server sent no content.
    pub body: Option<Vec<u8>>,
}

impl TransportResponse {
    /// A response with the given status and body bytes. An empty body is stored as `None`.
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        let body = body.into();
        Self {
            status,
            body: if body.is_empty() { None } else { Some(body) },
        }
    }
}

/// The request never produced a response (DNS, connect, TLS, read failure).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("transport error: {0}")]
pub struct TransportError(pub String);

/// Blocking GET capability. Implementations must be shareable across fetch threads.
pub trait QuoteTransport: Send + Sync {
    /// Issue `GET url` and return the response, or a transport error.
    fn get(&self, url: &str) -> Result<TransportResponse, TransportError>;
}

/// Production transport backed by `reqwest::blocking::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::blocking::Client,
}

impl ReqwestTransport {
    /// Create a transport with the default client configuration.
    pub fn new() -> Result<Self, TransportError> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("stocks_client/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| TransportError(e.to_string()))?;
        Ok(Self { client })
    }
}

impl QuoteTransport for ReqwestTransport {
    fn get(&self, url: &str) -> Result<TransportResponse, TransportError> {
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| TransportError(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .bytes()
            .map_err(|e| TransportError(e.to_string()))?;
        debug!("GET {} -> {} ({} bytes)", url, status, body.len());
        Ok(TransportResponse::new(status, body.to_vec()))
    }
}
