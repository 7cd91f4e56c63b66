//! Map server access
//!
//! The [`CartographicServer`] port is what the rest of the crate talks to;
//! [`GeoServerAdapter`] implements it over any [`HttpClient`].
//!
//! ```ignore
//! use geoedit::server::{BasicCredentials, CartographicServer, GeoServerAdapter, ReqwestClient};
//!
//! let http_client = ReqwestClient::new()?;
//! let server = GeoServerAdapter::new(
//!     http_client,
//!     "http://localhost:8080/geoserver",
//!     BasicCredentials::new("admin", "geoserver"),
//! );
//! let schema = server.layer_schema("topp", "states")?;
//! ```

mod geoserver;
mod http;
mod types;

pub use geoserver::GeoServerAdapter;
pub use http::{BasicCredentials, HttpClient, ReqwestClient, TransportError, DEFAULT_TIMEOUT_SECS};
pub use types::{CartographicServer, ServerError, UpdateOutcome};

#[cfg(test)]
pub use http::tests::{MockHttpClient, RecordedRequest};
