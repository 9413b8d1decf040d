//! Gateway module for Kong's admin API.
//!
//! This module handles:
//! - Aggregating routes into registration payloads
//! - The admin API client (node status, route upsert)
//! - Mock gateway for testing

pub mod client;
pub mod mock;
pub mod payload;

pub use client::{Gateway, KongClient};
pub use mock::{MockGateway, MockGatewayConfig};
pub use payload::{aggregate, is_publishable, Aggregation, GatewayPayload};
