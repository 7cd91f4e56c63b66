//! HTTP client abstraction for testability

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use reqwest::StatusCode;
use std::fmt;
use std::time::Duration;
use tracing::{debug, trace, warn};

/// Errors raised by the transport layer.
///
/// These are never retried locally; they surface to the caller as a
/// schema-fetch or update failure.
#[derive(Debug, Clone, PartialEq)]
pub enum TransportError {
    /// HTTP client could not be constructed
    ClientBuild(String),
    /// Connection or request failure
    Request { url: String, message: String },
    /// Server answered with an unexpected status
    Status { url: String, status: u16 },
    /// Response body could not be read
    Body(String),
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportError::ClientBuild(msg) => write!(f, "Failed to create HTTP client: {}", msg),
            TransportError::Request { url, message } => {
                write!(f, "Request to {} failed: {}", url, message)
            }
            TransportError::Status { url, status } => {
                write!(f, "Failed : HTTP error code : {} from {}", status, url)
            }
            TransportError::Body(msg) => write!(f, "Failed to read response: {}", msg),
        }
    }
}

impl std::error::Error for TransportError {}

/// HTTP Basic credentials for the map server.
#[derive(Clone, PartialEq, Eq)]
pub struct BasicCredentials {
    username: String,
    password: String,
}

impl BasicCredentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// Value of the `Authorization` header, `Basic base64(user:password)`.
    pub fn authorization_header(&self) -> String {
        let token = STANDARD.encode(format!("{}:{}", self.username, self.password));
        format!("Basic {}", token)
    }
}

impl fmt::Debug for BasicCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BasicCredentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

/// Trait for synchronous HTTP client operations.
///
/// This abstraction allows for dependency injection and easier testing
/// by enabling mock HTTP clients in tests.
pub trait HttpClient: Send + Sync {
    /// Performs an HTTP GET request with custom headers.
    ///
    /// Any status other than 200 OK is an error.
    ///
    /// # Arguments
    ///
    /// * `url` - The URL to request
    /// * `headers` - Slice of (header_name, header_value) tuples
    ///
    /// # Returns
    ///
    /// The response body as bytes or an error.
    fn get_with_headers(
        &self,
        url: &str,
        headers: &[(&str, &str)],
    ) -> Result<Vec<u8>, TransportError>;

    /// Performs an HTTP POST request with a text body and custom headers.
    ///
    /// Any non-2xx status is an error.
    ///
    /// # Arguments
    ///
    /// * `url` - The URL to request
    /// * `body` - Request body
    /// * `headers` - Slice of (header_name, header_value) tuples
    ///
    /// # Returns
    ///
    /// The response body as bytes or an error.
    fn post_with_headers(
        &self,
        url: &str,
        body: &str,
        headers: &[(&str, &str)],
    ) -> Result<Vec<u8>, TransportError>;
}

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// User-Agent sent with every request.
const USER_AGENT: &str = concat!("geoedit/", env!("CARGO_PKG_VERSION"));

/// Real HTTP client implementation using reqwest.
#[derive(Clone)]
pub struct ReqwestClient {
    client: reqwest::blocking::Client,
}

impl ReqwestClient {
    /// Creates a new ReqwestClient with default configuration.
    pub fn new() -> Result<Self, TransportError> {
        Self::with_timeout(DEFAULT_TIMEOUT_SECS)
    }

    /// Creates a new ReqwestClient with custom timeout.
    pub fn with_timeout(timeout_secs: u64) -> Result<Self, TransportError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| TransportError::ClientBuild(e.to_string()))?;

        Ok(Self { client })
    }

    fn read_body(
        url: &str,
        response: reqwest::blocking::Response,
    ) -> Result<Vec<u8>, TransportError> {
        match response.bytes() {
            Ok(bytes) => {
                trace!(url = url, bytes = bytes.len(), "HTTP response body read");
                Ok(bytes.to_vec())
            }
            Err(e) => {
                warn!(url = url, error = %e, "Failed to read response body");
                Err(TransportError::Body(e.to_string()))
            }
        }
    }

    fn send(
        url: &str,
        request: reqwest::blocking::RequestBuilder,
    ) -> Result<reqwest::blocking::Response, TransportError> {
        match request.send() {
            Ok(resp) => {
                debug!(
                    url = url,
                    status = resp.status().as_u16(),
                    "HTTP response received"
                );
                Ok(resp)
            }
            Err(e) => {
                warn!(
                    url = url,
                    error = %e,
                    is_connect = e.is_connect(),
                    is_timeout = e.is_timeout(),
                    "HTTP request failed"
                );
                Err(TransportError::Request {
                    url: url.to_string(),
                    message: e.to_string(),
                })
            }
        }
    }
}

impl Default for ReqwestClient {
    /// # Panics
    ///
    /// Panics if the TLS backend cannot be initialised.
    fn default() -> Self {
        Self::new().expect("Failed to create default HTTP client")
    }
}

impl HttpClient for ReqwestClient {
    fn get_with_headers(
        &self,
        url: &str,
        headers: &[(&str, &str)],
    ) -> Result<Vec<u8>, TransportError> {
        trace!(url = url, "HTTP GET request starting");

        let mut request = self.client.get(url);
        for (name, value) in headers {
            request = request.header(*name, *value);
        }

        let response = Self::send(url, request)?;

        // DescribeFeatureType must answer exactly 200
        if response.status() != StatusCode::OK {
            warn!(
                url = url,
                status = response.status().as_u16(),
                "HTTP error status"
            );
            return Err(TransportError::Status {
                url: url.to_string(),
                status: response.status().as_u16(),
            });
        }

        Self::read_body(url, response)
    }

    fn post_with_headers(
        &self,
        url: &str,
        body: &str,
        headers: &[(&str, &str)],
    ) -> Result<Vec<u8>, TransportError> {
        trace!(url = url, bytes = body.len(), "HTTP POST request starting");

        let mut request = self.client.post(url).body(body.to_string());
        for (name, value) in headers {
            request = request.header(*name, *value);
        }

        let response = Self::send(url, request)?;

        if !response.status().is_success() {
            warn!(
                url = url,
                status = response.status().as_u16(),
                "HTTP error status"
            );
            return Err(TransportError::Status {
                url: url.to_string(),
                status: response.status().as_u16(),
            });
        }

        Self::read_body(url, response)
    }
}
