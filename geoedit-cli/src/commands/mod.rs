//! CLI command implementations.
//!
//! Each subcommand has its own module with argument definitions and handlers.
//!
//! # Command Modules
//!
//! - [`config`] - Configuration management (init, path)
//! - [`render`] - Print a WFS-T Update without sending it
//! - [`schema`] - Fetch and translate a layer schema
//! - [`update`] - Push a feature edit to GeoServer

pub mod common;
pub mod config;
pub mod render;
pub mod schema;
pub mod update;
