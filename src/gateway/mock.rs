//! Mock gateway for unit testing.
//!
//! This module provides a mock admin API that can be used in tests
//! without a running Kong instance.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::error::GatewayError;

use super::client::Gateway;
use super::payload::GatewayPayload;

/// Configuration for mock gateway behavior.
#[derive(Debug, Clone)]
pub struct MockGatewayConfig {
    /// Status code the node endpoint returns.
    pub node_status: u16,
    /// Fail every upsert after this many successes, if set.
    pub fail_after: Option<usize>,
}

impl Default for MockGatewayConfig {
    fn default() -> Self {
        Self {
            node_status: 200,
            fail_after: None,
        }
    }
}

/// Mock gateway recording every registration it receives.
#[derive(Debug, Clone, Default)]
pub struct MockGateway {
    /// Mock configuration.
    config: MockGatewayConfig,
    /// Payloads received by upsert calls, in order.
    published: Arc<Mutex<Vec<GatewayPayload>>>,
}

impl MockGateway {
    /// Create a healthy mock gateway.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock gateway with custom behavior.
    pub fn with_config(config: MockGatewayConfig) -> Self {
        Self {
            config,
            published: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Create a mock gateway whose node endpoint returns the given status.
    pub fn with_node_status(status: u16) -> Self {
        Self::with_config(MockGatewayConfig {
            node_status: status,
            ..Default::default()
        })
    }

    /// Payloads received so far, in call order.
    pub fn published(&self) -> Vec<GatewayPayload> {
        self.published.lock().unwrap().clone()
    }

    /// Clear all recorded payloads.
    pub fn clear(&self) {
        self.published.lock().unwrap().clear();
    }
}

#[async_trait]
impl Gateway for MockGateway {
    async fn node_status(&self) -> Result<u16, GatewayError> {
        Ok(self.config.node_status)
    }

    async fn upsert_api(&self, payload: &GatewayPayload) -> Result<String, GatewayError> {
        let mut published = self.published.lock().unwrap();

        if let Some(limit) = self.config.fail_after {
            if published.len() >= limit {
                return Err(GatewayError::PublishFailed {
                    name: payload.name.clone(),
                    status: 500,
                    body: "mock failure".to_string(),
                });
            }
        }

        published.push(payload.clone());

        Ok(serde_json::to_string(payload).expect("payload serializes"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(name: &str) -> GatewayPayload {
        GatewayPayload {
            name: name.to_string(),
            uris: format!("/{}", name),
            methods: "GET".to_string(),
            upstream_url: format!("http://app.test/{}", name),
        }
    }

    #[tokio::test]
    async fn records_published_payloads_in_order() {
        let gateway = MockGateway::new();

        gateway.upsert_api(&payload("users")).await.unwrap();
        gateway.upsert_api(&payload("orders")).await.unwrap();

        let published = gateway.published();
        assert_eq!(published.len(), 2);
        assert_eq!(published[0].name, "users");
        assert_eq!(published[1].name, "orders");
    }

    #[tokio::test]
    async fn fail_after_limits_successes() {
        let gateway = MockGateway::with_config(MockGatewayConfig {
            node_status: 200,
            fail_after: Some(1),
        });

        assert!(gateway.upsert_api(&payload("users")).await.is_ok());
        assert!(gateway.upsert_api(&payload("orders")).await.is_err());
        assert_eq!(gateway.published().len(), 1);
    }

    #[tokio::test]
    async fn node_status_is_configurable() {
        let gateway = MockGateway::with_node_status(503);
        assert_eq!(gateway.node_status().await.unwrap(), 503);
    }
}
