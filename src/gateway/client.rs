//! Kong admin API client.

use async_trait::async_trait;
use tracing::{debug, instrument};
use url::Url;

use crate::config::Config;
use crate::error::GatewayError;

use super::payload::GatewayPayload;

/// Operations the synchronizer needs from the gateway's admin API.
#[async_trait]
pub trait Gateway {
    /// Status code of the node information endpoint.
    async fn node_status(&self) -> Result<u16, GatewayError>;

    /// Idempotently register a route, returning the raw response body.
    async fn upsert_api(&self, payload: &GatewayPayload) -> Result<String, GatewayError>;
}

/// Kong admin API client.
#[derive(Debug, Clone)]
pub struct KongClient {
    /// HTTP client for admin API requests.
    http: reqwest::Client,
    /// Admin endpoint base URL (host + port).
    admin_url: Url,
}

impl KongClient {
    /// Create a new Kong client from config.
    pub fn new(config: &Config) -> Result<Self, GatewayError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_millis(config.http_timeout_ms))
            .build()
            .expect("failed to create HTTP client");

        let admin_url = Url::parse(&config.admin_url())?;

        Ok(Self { http, admin_url })
    }

    /// The admin endpoint this client talks to.
    pub fn admin_url(&self) -> &Url {
        &self.admin_url
    }

    fn apis_url(&self) -> Result<Url, GatewayError> {
        Ok(self.admin_url.join("apis")?)
    }
}

#[async_trait]
impl Gateway for KongClient {
    #[instrument(skip(self))]
    async fn node_status(&self) -> Result<u16, GatewayError> {
        let response = self.http.get(self.admin_url.clone()).send().await?;
        let status = response.status().as_u16();

        debug!(status, "gateway node status");

        Ok(status)
    }

    #[instrument(skip(self, payload), fields(name = %payload.name))]
    async fn upsert_api(&self, payload: &GatewayPayload) -> Result<String, GatewayError> {
        let response = self
            .http
            .put(self.apis_url()?)
            .json(payload)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(GatewayError::PublishFailed {
                name: payload.name.clone(),
                status: status.as_u16(),
                body,
            });
        }

        debug!(status = status.as_u16(), "route registered");

        Ok(body)
    }
}
