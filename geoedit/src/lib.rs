//! geoedit - WFS-T feature editing against GeoServer
//!
//! This library translates between drawing clients and a WFS-T capable map
//! server: it reads layer schemas through `DescribeFeatureType`, encodes
//! feature edits as WFS-T 1.1.0 Update transactions with GML geometry, and
//! interprets the server's verdict.
//!
//! # High-Level API
//!
//! For most use cases, the [`drawing`] module provides the entry point:
//!
//! ```ignore
//! use geoedit::config::ConfigFile;
//! use geoedit::drawing::{DrawingService, FeatureUpdateRequest};
//! use geoedit::server::{GeoServerAdapter, ReqwestClient};
//!
//! let config = ConfigFile::load()?;
//! let server = GeoServerAdapter::new(
//!     ReqwestClient::with_timeout(config.geoserver.timeout)?,
//!     &config.geoserver.url,
//!     config.credentials(),
//! );
//! let service = DrawingService::new(config.layer_repository(), server);
//!
//! let schema = service.layer_schema(layer_id)?;
//! let result = service.update_feature(layer_id, "parcels.12", request);
//! ```

pub mod catalog;
pub mod config;
pub mod drawing;
pub mod feature;
pub mod geometry;
pub mod logging;
pub mod schema;
pub mod server;
pub mod transaction;

/// Version of the geoedit library and CLI.
///
/// This is synchronized across all components in the workspace.
/// The version is defined in `Cargo.toml` and injected at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
