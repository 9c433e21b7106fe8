//! Extension host and API extensions for
//! [stac-axum](https://github.com/stac-utils/stac-axum), a
//! [STAC API](https://github.com/radiantearth/stac-api-spec) extension
//! framework built on [axum](https://github.com/tokio-rs/axum).
//!
//! Optional API features are packaged as [extensions](ApiExtension). The host
//! constructs each extension once at startup and registers it against an
//! [Api], which owns the routing table and the conformance document:
//!
//! ```
//! use std::sync::Arc;
//! use stac_axum_server::{Api, FilterExtension, MemoryFiltersClient};
//!
//! let mut api = Api::new();
//! let extension = FilterExtension::new(Arc::new(MemoryFiltersClient::new()));
//! api.extend(&extension).unwrap();
//! let router = api.into_router();
//! ```
//!
//! A registration failure propagates and should halt application boot; no
//! extension is ever partially registered.

#![warn(missing_docs, unused_qualifications)]

mod api;
mod client;
mod error;
mod extension;
mod filter;
mod memory;

pub use api::Api;
pub use client::{AsyncFiltersClient, FiltersBackend, FiltersClient};
pub use error::Error;
pub use extension::{ApiExtension, RequestModel};
pub use filter::FilterExtension;
pub use memory::MemoryFiltersClient;

/// Crate-specific result type.
pub type Result<T> = std::result::Result<T, Error>;
