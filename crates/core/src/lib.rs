//! Core types for [stac-axum](https://github.com/stac-utils/stac-axum), a
//! [STAC API](https://github.com/radiantearth/stac-api-spec) extension
//! framework built on [axum](https://github.com/tokio-rs/axum).
//!
//! This crate **is**:
//!
//! - The link model ([Link], [Relation], [MediaType]) and the builders for
//!   links that can be derived from identifiers alone ([CollectionLinks],
//!   [ItemLinks])
//! - Conformance declarations ([Conformance])
//! - The queryables document served by the [filter
//!   extension](https://github.com/stac-api-extensions/filter) ([Queryables])
//!   and its request models ([Filter], [GetFilter])
//!
//! This crate **is not**:
//!
//! - A server implementation — that's
//!   [stac-axum-server](https://github.com/stac-utils/stac-axum)
//!
//! # Inferred links
//!
//! A STAC API can always re-derive a resource's structural links (`self`,
//! `parent`, `collection`, `root`) from its identifiers and the service's base
//! url, so those links are never read from storage:
//!
//! ```
//! use stac_axum_core::{CollectionLinks, InferredLinks};
//!
//! let links = CollectionLinks::new("sentinel-2-l2a", "http://stac.test/");
//! let links = links.create_links().unwrap();
//! assert_eq!(links.len(), 4);
//! assert_eq!(links[0].href, "http://stac.test/collections/sentinel-2-l2a");
//! ```

#![warn(missing_docs, unused_qualifications)]

mod conformance;
mod error;
mod filter;
mod link;
mod links;
mod queryables;

pub use conformance::{CORE_URI, Conformance, FILTER_URIS};
pub use error::Error;
pub use filter::{Filter, FilterLang, GetFilter};
pub use link::{Link, MediaType, Relation};
pub use links::{CollectionLinks, InferredLinks, ItemLinks, filter_links};
pub use queryables::Queryables;

/// Crate-specific result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Return this crate's version.
///
/// # Examples
///
/// ```
/// println!("{}", stac_axum_core::version());
/// ```
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
