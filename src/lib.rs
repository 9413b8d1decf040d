//! Kong route synchronizer.
//!
//! Reads the application's registered HTTP routes from an exported
//! manifest, filters and orders them, collapses methods that share a
//! logical path into one registration each, and upserts the result into
//! Kong's admin API. Skipped and published routes land in daily log
//! files.
//!
//! # Pipeline
//!
//! ```text
//! route manifest ──▶ filter/sort ──▶ aggregate ──▶ PUT /apis (per slug)
//!                                        │                │
//!                                        ▼                ▼
//!                              invalid-kong-route-*  pushed-kong-route-*
//! ```
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Unified error types
//! - [`routes`]: Route descriptors, sources, filtering
//! - [`gateway`]: Payload aggregation and the admin API client
//! - [`sync`]: The pipeline runner and result logger

pub mod config;
pub mod error;
pub mod gateway;
pub mod routes;
pub mod sync;

pub use config::Config;
pub use error::{Result, SyncError};
