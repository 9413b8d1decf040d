//! Application configuration loaded from environment variables.

use serde::Deserialize;
use url::Url;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    // === Gateway Admin Endpoint ===
    /// Kong admin host (scheme + host, no port).
    #[serde(default = "default_kong_url")]
    pub kong_url: String,

    /// Kong admin port.
    #[serde(default = "default_kong_port")]
    pub kong_port: u16,

    // === Upstream Application ===
    /// Base URL the gateway proxies to.
    #[serde(default = "default_app_url")]
    pub app_url: String,

    // === Route Manifest ===
    /// Path of the JSON route manifest exported by the application.
    #[serde(default = "default_routes_manifest")]
    pub routes_manifest: String,

    // === Logging ===
    /// Directory for daily result log files.
    #[serde(default = "default_log_dir")]
    pub log_dir: String,

    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub rust_log: String,

    // === HTTP Client ===
    /// Request timeout for admin API calls.
    #[serde(default = "default_http_timeout_ms")]
    pub http_timeout_ms: u64,
}

fn default_kong_url() -> String {
    "http://localhost".to_string()
}

fn default_kong_port() -> u16 {
    8001
}

fn default_app_url() -> String {
    "http://localhost".to_string()
}

fn default_routes_manifest() -> String {
    "routes.json".to_string()
}

fn default_log_dir() -> String {
    "storage/logs".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_http_timeout_ms() -> u64 {
    30_000
}

impl Config {
    /// Load configuration from environment, reading .env file first.
    pub fn load() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();
        envy::from_env()
    }

    /// Check if the configuration is valid.
    pub fn validate(&self) -> Result<(), String> {
        Url::parse(&self.kong_url)
            .map_err(|e| format!("KONG_URL is not a valid URL: {}", e))?;

        Url::parse(&self.app_url)
            .map_err(|e| format!("APP_URL is not a valid URL: {}", e))?;

        if self.routes_manifest.is_empty() {
            return Err("ROUTES_MANIFEST must not be empty".to_string());
        }

        if self.http_timeout_ms == 0 {
            return Err("HTTP_TIMEOUT_MS must be greater than 0".to_string());
        }

        Ok(())
    }

    /// Full admin endpoint, host and port combined.
    pub fn admin_url(&self) -> String {
        format!("{}:{}", self.kong_url.trim_end_matches('/'), self.kong_port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> Config {
        Config {
            kong_url: default_kong_url(),
            kong_port: default_kong_port(),
            app_url: default_app_url(),
            routes_manifest: default_routes_manifest(),
            log_dir: default_log_dir(),
            rust_log: default_log_level(),
            http_timeout_ms: default_http_timeout_ms(),
        }
    }

    #[test]
    fn default_values_are_sensible() {
        assert_eq!(default_kong_url(), "http://localhost");
        assert_eq!(default_kong_port(), 8001);
        assert_eq!(default_app_url(), "http://localhost");
        assert_eq!(default_routes_manifest(), "routes.json");
        assert_eq!(default_log_dir(), "storage/logs");
    }

    #[test]
    fn admin_url_joins_host_and_port() {
        let config = test_config();
        assert_eq!(config.admin_url(), "http://localhost:8001");
    }

    #[test]
    fn admin_url_strips_trailing_slash() {
        let mut config = test_config();
        config.kong_url = "http://kong.internal/".to_string();
        assert_eq!(config.admin_url(), "http://kong.internal:8001");
    }

    #[test]
    fn validate_accepts_defaults() {
        assert!(test_config().validate().is_ok());
    }

    #[test]
    fn validate_rejects_bad_kong_url() {
        let mut config = test_config();
        config.kong_url = "not a url".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_zero_timeout() {
        let mut config = test_config();
        config.http_timeout_ms = 0;
        assert!(config.validate().is_err());
    }
}
