//! Route listing module.
//!
//! This module handles:
//! - Route descriptor types and sort keys
//! - Route sources (manifest file, in-memory)
//! - Filtering and ordering of the listing

pub mod filter;
pub mod source;
pub mod types;

pub use filter::{filter_routes, FilterOptions};
pub use source::{ManifestRouteSource, RouteSource, StaticRouteSource};
pub use types::{RouteDescriptor, SortKey};
