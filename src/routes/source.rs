//! Route sources: where the route table comes from.
//!
//! The synchronizer never talks to the application directly; it reads a
//! manifest the application exports. Tests inject a static source instead.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{ManifestError, Result};

use super::types::RouteDescriptor;

/// Ordered access to the application's registered routes.
pub trait RouteSource {
    /// Return all registered routes in registration order.
    fn routes(&self) -> Result<Vec<RouteDescriptor>>;
}

/// Route source backed by a JSON manifest file.
#[derive(Debug, Clone)]
pub struct ManifestRouteSource {
    /// Manifest file path.
    path: PathBuf,
}

impl ManifestRouteSource {
    /// Create a source reading from the given manifest path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The manifest path this source reads from.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RouteSource for ManifestRouteSource {
    fn routes(&self) -> Result<Vec<RouteDescriptor>> {
        let raw = std::fs::read_to_string(&self.path).map_err(|e| ManifestError::ReadFailed {
            path: self.path.display().to_string(),
            reason: e.to_string(),
        })?;

        let routes: Vec<RouteDescriptor> =
            serde_json::from_str(&raw).map_err(|e| ManifestError::ParseFailed {
                path: self.path.display().to_string(),
                reason: e.to_string(),
            })?;

        debug!(count = routes.len(), path = %self.path.display(), "loaded route manifest");

        Ok(routes)
    }
}

/// In-memory route source for tests and embedding.
#[derive(Debug, Clone, Default)]
pub struct StaticRouteSource {
    routes: Vec<RouteDescriptor>,
}

impl StaticRouteSource {
    /// Create a source serving the given routes.
    pub fn new(routes: Vec<RouteDescriptor>) -> Self {
        Self { routes }
    }
}

impl RouteSource for StaticRouteSource {
    fn routes(&self) -> Result<Vec<RouteDescriptor>> {
        Ok(self.routes.clone())
    }
}
