//! Unified error types for the route synchronizer.

use thiserror::Error;

/// Unified error type for the route synchronizer.
#[derive(Error, Debug)]
pub enum SyncError {
    /// Configuration loading error.
    #[error("configuration error: {0}")]
    Config(#[from] envy::Error),

    /// Route manifest error.
    #[error("manifest error: {0}")]
    Manifest(#[from] ManifestError),

    /// Gateway admin API error.
    #[error("gateway error: {0}")]
    Gateway(#[from] GatewayError),

    /// HTTP request error.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON parsing error.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Route manifest loading errors.
#[derive(Error, Debug)]
pub enum ManifestError {
    /// Manifest file could not be read.
    #[error("failed to read manifest {path}: {reason}")]
    ReadFailed {
        /// Path of the manifest that failed.
        path: String,
        /// Reason for failure.
        reason: String,
    },

    /// Manifest file could not be parsed.
    #[error("failed to parse manifest {path}: {reason}")]
    ParseFailed {
        /// Path of the manifest that failed.
        path: String,
        /// Reason for failure.
        reason: String,
    },
}

/// Gateway admin API errors.
#[derive(Error, Debug)]
pub enum GatewayError {
    /// Admin endpoint URL is malformed.
    #[error("invalid admin url: {0}")]
    InvalidAdminUrl(#[from] url::ParseError),

    /// Node status check did not return 200.
    #[error("gateway node unhealthy: HTTP {status}")]
    NodeUnhealthy {
        /// Status code the node endpoint returned.
        status: u16,
    },

    /// Route registration was rejected by the gateway.
    #[error("failed to publish {name}: HTTP {status} - {body}")]
    PublishFailed {
        /// Payload name that was rejected.
        name: String,
        /// Status code of the rejection.
        status: u16,
        /// Response body from the gateway.
        body: String,
    },

    /// HTTP request failed.
    #[error("http request failed: {0}")]
    HttpError(#[from] reqwest::Error),
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, SyncError>;
