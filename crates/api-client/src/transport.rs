//! HTTP transport seam
//!
//! The fetcher only needs "GET this URL with these headers and tell me the
//! status and body". [`Transport`] captures exactly that so the status and
//! envelope logic can run against stubs, while [`ReqwestTransport`] does the
//! real round-trip.

use crate::config::ClientConfig;
use crate::error::ApiResult;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use reqwest::Client;
use thiserror::Error;
use tracing::trace;

/// User agent sent with every request
const CLIENT_USER_AGENT: &str = concat!("foodhub-api-client/", env!("CARGO_PKG_VERSION"));

/// Failure to obtain any response from the backend
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// The request exceeded the configured timeout
    #[error("request timed out")]
    Timeout,

    /// The connection could not be established
    #[error("connection failed: {0}")]
    Connect(String),

    /// Any other request or body read failure
    #[error("HTTP request failed: {0}")]
    Request(String),
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if err.is_connect() {
            Self::Connect(err.to_string())
        } else {
            Self::Request(err.to_string())
        }
    }
}

/// Raw response as seen by the fetcher
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    /// HTTP status code
    pub status: u16,
    /// Undecoded response body
    pub body: Vec<u8>,
}

impl TransportResponse {
    /// Build a response from a status and a body
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Capability to issue a GET request
///
/// Implementations must report every status code as a response; turning
/// non-200 answers into failures is the fetcher's job.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Perform a GET request
    async fn get(&self, url: &str, headers: HeaderMap)
        -> Result<TransportResponse, TransportError>;
}

/// `reqwest`-backed transport
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    inner: Client,
}

impl ReqwestTransport {
    /// Build a transport honoring the configured timeout
    pub fn new(config: &ClientConfig) -> ApiResult<Self> {
        let mut default_headers = HeaderMap::new();
        default_headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        default_headers.insert(USER_AGENT, HeaderValue::from_static(CLIENT_USER_AGENT));

        let inner = Client::builder()
            .timeout(config.timeout)
            .default_headers(default_headers)
            .build()?;

        Ok(Self { inner })
    }

    /// Wrap an already configured `reqwest` client
    #[must_use]
    pub fn from_client(inner: Client) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn get(
        &self,
        url: &str,
        headers: HeaderMap,
    ) -> Result<TransportResponse, TransportError> {
        let response = self.inner.get(url).headers(headers).send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?;

        trace!(url = %url, status, bytes = body.len(), "Response received");

        Ok(TransportResponse {
            status,
            body: body.to_vec(),
        })
    }
}
